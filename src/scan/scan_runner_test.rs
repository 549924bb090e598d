use tempfile::tempdir;

use crate::engine::query::{DiskDatabase, MemoryDatabase};
use crate::scan::{ScanPlan, run_scan};
use crate::shared::path::StorageLayout;
use crate::test_helpers::factories::WeatherDatasetFactory;

fn dataset() -> WeatherDatasetFactory {
    WeatherDatasetFactory::new()
        .with_stations(&["Changi", "Paya Lebar"])
        .with_years(&[2009, 2019])
        .with_days_per_month(2)
}

#[test]
fn scan_emits_rows_for_every_month_and_field() {
    let db = MemoryDatabase::new(dataset().store());
    let plan = ScanPlan::from_matriculation("U1922129K").unwrap();

    let rows = run_scan(&db, &plan).unwrap();

    assert!(rows.iter().all(|r| r.group_key == "Changi"));
    for year in ["2009", "2019"] {
        for category in ["Min Temperature", "Max Temperature", "Min Humidity", "Max Humidity"] {
            let months: std::collections::HashSet<&str> = rows
                .iter()
                .filter(|r| r.category == category && r.date.starts_with(year))
                .map(|r| &r.date[5..7])
                .collect();
            assert_eq!(months.len(), 12, "{} in {}", category, year);
        }
    }
}

#[test]
fn scan_is_empty_for_years_without_data() {
    let db = MemoryDatabase::new(dataset().store());
    let plan = ScanPlan::new("Changi", &[2002]);

    assert!(run_scan(&db, &plan).unwrap().is_empty());
}

#[test]
fn memory_and_disk_scans_are_identical() {
    crate::logging::init_for_tests();
    let dir = tempdir().unwrap();
    let memory = MemoryDatabase::new(dataset().store());
    let disk = DiskDatabase::new(StorageLayout::under(dir.path()), "M");
    disk.persist(memory.store(), memory.indexes()).unwrap();

    let plan = ScanPlan::from_matriculation("A0123479B").unwrap();
    assert_eq!(plan.station, "Paya Lebar");

    let from_memory = run_scan(&memory, &plan).unwrap();
    drop(memory);
    let from_disk = run_scan(&disk, &plan).unwrap();
    assert!(!from_disk.is_empty());
    assert_eq!(from_memory, from_disk);
}
