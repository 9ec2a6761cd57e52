//! End-to-end evaluation of sheet files through the application layer

use recyclab_app::app::EvaluationService;
use recyclab_app::config::Config;
use recyclab_app::export::export_to_excel;
use recyclab_domain::model::TarePolicy;
use recyclab_types::Error;
use std::fs;
use tempfile::tempdir;

const SHEET: &str = r#"
[info]
sample_name = "Kraft liner"
order_number = "2024-118"
date_tested = "2024-11-05"

[evaporation.filtrate_1]
tin_mass = 40.25
input_mass = 50.0
output_mass = 40.0

[evaporation.water_1]
tin_mass = 38.1
input_mass = 0.0
output_mass = 38.0

[screens.stock]
tin_or_filter_mass = 0.0
input_mass = 0.0
output_mass = 2.0

[screens.coarse]
tin_or_filter_mass = 0.0
output_mass = 9.0

[screens.fine]
tin_or_filter_mass = 12.0
output_mass = 14.0

[[moisture]]
name = "Main"
replicates = [
    { air_dry_mass = 100.0, oven_dry_mass = 45.0 },
    { air_dry_mass = 0.0, oven_dry_mass = 0.0 },
]
"#;

#[test]
fn test_evaluate_sheet_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.toml");
    fs::write(&path, SHEET).unwrap();

    let service = EvaluationService::new(&Config::default());
    let report = service.evaluate_file(&path).unwrap();

    let main = &report.moisture.components[0].result;
    assert!((main.per_replicate_pct[0].unwrap() - 45.0).abs() < 1e-9);
    assert!(main.per_replicate_pct[1].is_none());
    assert!((report.moisture.average_pct.unwrap() - 45.0).abs() < 1e-9);
    assert!((report.moisture.bone_dry_equivalent_g.unwrap() - 22.5).abs() < 1e-9);

    assert!((report.evaporation[0].evaporation_residue_ratio - 0.005).abs() < 1e-12);
    assert_eq!(report.evaporation[2].evaporation_residue_ratio, 0.0);

    // stock input zero -> cannot calculate; coarse tin zero -> 0 %
    assert!(report.screens.stock_consistency_pct.is_none());
    assert_eq!(report.screens.coarse_reject_pct, 0.0);
    assert!((report.screens.fine_reject_pct - 10.0).abs() < 1e-9);
    assert!((report.yield_summary.total_yield_pct - 90.0).abs() < 1e-9);
}

#[test]
fn test_config_policy_changes_coarse_result() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.json");
    let sheet = recyclab_infra::sheet_loader::parse_sheet(
        SHEET,
        recyclab_infra::sheet_loader::SheetFormat::Toml,
    )
    .unwrap();
    fs::write(&path, serde_json::to_string(&sheet).unwrap()).unwrap();

    let config = Config {
        coarse_tare_policy: TarePolicy::AlwaysSubtract,
        ..Default::default()
    };
    let report = EvaluationService::new(&config).evaluate_file(&path).unwrap();
    assert!((report.screens.coarse_reject_pct - 18.0).abs() < 1e-9);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.yaml");
    fs::write(&path, "info: {}").unwrap();
    let err = EvaluationService::default().evaluate_file(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn test_macrostickies_from_pasted_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("area.tsv");
    fs::write(
        &path,
        "Set Number\tScreening 1\tScreening 2\n150 - 200 µm\t10\t20\n200 - 300 µm\t4\t4\n",
    )
    .unwrap();

    let table = EvaluationService::default()
        .macrostickies_from_file(&path)
        .unwrap();
    assert_eq!(table.rows.len(), 3);
    assert!((table.rows[0].std_dev - 7.07).abs() < 1e-12);
    let total = table.total().unwrap();
    assert_eq!(total.screening_1, 14.0);
    assert_eq!(total.screening_2, 24.0);
    assert!((total.mean - 19.0).abs() < 1e-12);
}

#[test]
fn test_export_evaluated_sheet() {
    let dir = tempdir().unwrap();
    let sheet_path = dir.path().join("sample.toml");
    fs::write(&sheet_path, SHEET).unwrap();
    let report = EvaluationService::default().evaluate_file(&sheet_path).unwrap();

    let xlsx = dir.path().join("sample.xlsx");
    export_to_excel(&report, &xlsx).unwrap();
    assert!(xlsx.exists());
}
