// End-to-end run of clean, fill and analyze over files in a temp directory.

use std::fs;
use tempfile::TempDir;
use tide_cmd::{analyze, clean, fill, run_pipeline, CLEAN_CSV, CLEAN_TXT, RESULT_CSV};
use tide_core::error::TideError;
use tide_core::station_export::StationExportLayout;

const STATION_EXPORT: &str = "\
Station,Kaohsiung
Unit,mm
yyyymmddhh,:00,:06,:12
2016010102,200,201,202
2016010100,150,151,152
20160101,999,999,999
2016010103,---,300,301
";

const HINDCAST: &str = "\
Observation Hindcast
0.150 0.140
NaN   0.170
0.200 0.190
NaN   0.250
NaN   0.260
";

fn layout() -> StationExportLayout {
    StationExportLayout {
        skip_rows: 2,
        ..StationExportLayout::default()
    }
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("station.csv"), STATION_EXPORT).unwrap();
    fs::write(dir.path().join("hindcast.txt"), HINDCAST).unwrap();
    dir
}

#[test]
fn clean_writes_both_regularized_artifacts() {
    let dir = setup();
    let csv = dir.path().join(CLEAN_CSV);
    let txt = dir.path().join(CLEAN_TXT);
    let report =
        clean::run_clean(&dir.path().join("station.csv"), &layout(), &csv, &txt).unwrap();

    assert_eq!(report.dropped_records, 1);
    assert_eq!(report.timeline_hours, 4);
    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "2016/01/01 00:00,0.15\n\
         2016/01/01 01:00,NaN\n\
         2016/01/01 02:00,0.2\n\
         2016/01/01 03:00,NaN\n"
    );
    assert_eq!(
        fs::read_to_string(&txt).unwrap(),
        "Time\tTide_m\n\
         2016/01/01 00:00\t0.15\n\
         2016/01/01 01:00\tNaN\n\
         2016/01/01 02:00\t0.2\n\
         2016/01/01 03:00\tNaN\n"
    );
}

#[test]
fn pipeline_fills_gaps_by_position() {
    let dir = setup();
    run_pipeline(
        &dir.path().join("station.csv"),
        &layout(),
        &dir.path().join("hindcast.txt"),
        "Hindcast",
        dir.path(),
    )
    .unwrap();

    let result = fs::read_to_string(dir.path().join(RESULT_CSV)).unwrap();
    assert_eq!(
        result,
        "Time,Tide_m,Hindcast,Tide_m_filled\n\
         2016-01-01 00:00,0.15,0.14,0.15\n\
         2016-01-01 01:00,,0.17,0.17\n\
         2016-01-01 02:00,0.2,0.19,0.2\n\
         2016-01-01 03:00,,0.25,0.25\n"
    );

    let summary = analyze::run_analyze(&dir.path().join(RESULT_CSV)).unwrap();
    assert_eq!(summary.records, 4);
    assert_eq!(summary.tide_m.missing, 2);
    assert_eq!(summary.tide_m_filled.missing, 0);
}

#[test]
fn fill_reports_stats_for_short_hindcast() {
    let dir = setup();
    let txt = dir.path().join(CLEAN_TXT);
    fs::write(
        &txt,
        "Time\tTide_m\n\
         2016/01/01 00:00\t1.0\n\
         2016/01/01 01:00\tNaN\n\
         2016/01/01 02:00\tNaN\n",
    )
    .unwrap();
    fs::write(dir.path().join("short.txt"), "Hindcast\n9.0\n8.0\n").unwrap();

    let stats = fill::run_fill(
        &txt,
        &dir.path().join("short.txt"),
        "Hindcast",
        &dir.path().join(RESULT_CSV),
    )
    .unwrap();
    assert_eq!(stats.original_missing_count, 2);
    assert_eq!(stats.filled_count, 1);
    assert_eq!(stats.final_missing_count, 1);
}

#[test]
fn missing_inputs_name_the_failing_stage() {
    let dir = TempDir::new().unwrap();
    let err = fill::run_fill(
        &dir.path().join(CLEAN_TXT),
        &dir.path().join("hindcast.txt"),
        "Hindcast",
        &dir.path().join(RESULT_CSV),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("fill stage: reading"));
    assert!(matches!(
        err.downcast_ref::<TideError>(),
        Some(TideError::MissingSource { .. })
    ));

    let err = analyze::run_analyze(&dir.path().join(RESULT_CSV)).unwrap_err();
    assert!(err.to_string().starts_with("analyze stage"));
}

#[test]
fn export_without_decodable_timestamps_aborts_clean() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("station.csv");
    fs::write(&input, "yyyymmddhh,:00\n20160101,1\nbad,2\n").unwrap();
    let layout = StationExportLayout {
        skip_rows: 0,
        ..StationExportLayout::default()
    };
    let csv = dir.path().join(CLEAN_CSV);
    let err =
        clean::run_clean(&input, &layout, &csv, &dir.path().join(CLEAN_TXT)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TideError>(),
        Some(TideError::EmptyInput)
    ));
    assert!(!csv.exists());
}
