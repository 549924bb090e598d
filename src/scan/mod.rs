pub mod scan_plan;
pub mod scan_runner;

pub use scan_plan::ScanPlan;
pub use scan_runner::run_scan;

#[cfg(test)]
mod scan_runner_test;
