use std::path::PathBuf;

use clap::Parser;
use col_db::engine::query::{DiskDatabase, MemoryDatabase, QueryBackend, ResultRow};
use col_db::ingest::{WeatherSchema, read_weather_csv};
use col_db::logging;
use col_db::output::ResultWriter;
use col_db::scan::{ScanPlan, run_scan};
use col_db::shared::config::CONFIG;
use tracing::info;

#[derive(Parser)]
#[command(name = "col_db")]
#[command(about = "Columnar weather store: min/max scan per station, year and month", long_about = None)]
struct Args {
    /// Matriculation number; picks the station and years to scan
    #[arg(short, long)]
    matric: String,

    /// Persist columns and indexes, then answer queries from disk
    #[arg(short, long)]
    disk: bool,

    /// Weather CSV to ingest (defaults to scan.input_path)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Result CSV to write (defaults to the per-mode path in config)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&CONFIG.logging)?;

    let plan = ScanPlan::from_matriculation(&args.matric)?;
    info!(
        station = %plan.station,
        years = ?plan.years,
        disk = args.disk,
        "Scan plan ready"
    );

    let engine = &CONFIG.engine;
    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&CONFIG.scan.input_path));
    let report = read_weather_csv(&input, &engine.empty_data_symbol).inspect_err(|e| e.log_error())?;
    info!(rows = report.records.len(), skipped = report.skipped, "Input ingested");

    let memory = MemoryDatabase::new(WeatherSchema::load(&report.records)?);
    drop(report);

    let (rows, default_output) = if args.disk {
        let disk = DiskDatabase::new(engine.storage_layout(), engine.empty_data_symbol.as_str())
            .with_parallel_reads(engine.parallel_index_reads);
        disk.persist(memory.store(), memory.indexes())?;
        drop(memory);
        (scan(&disk, &plan)?, &CONFIG.scan.disk_output_path)
    } else {
        (scan(&memory, &plan)?, &CONFIG.scan.memory_output_path)
    };

    let output = args.output.unwrap_or_else(|| PathBuf::from(default_output));
    let mut writer = ResultWriter::create(&output)?;
    writer.write_rows(&rows)?;
    writer.finish()?;

    info!(output = %output.display(), rows = rows.len(), "Scan finished");
    Ok(())
}

fn scan(backend: &dyn QueryBackend, plan: &ScanPlan) -> anyhow::Result<Vec<ResultRow>> {
    Ok(run_scan(backend, plan).inspect_err(|e| e.log_error())?)
}
