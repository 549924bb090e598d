pub mod engine;
pub mod ingest;
pub mod logging;
pub mod output;
pub mod scan;
pub mod shared;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
