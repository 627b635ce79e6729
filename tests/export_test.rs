//! JSON/Excel出力の統合テスト

use garment_ai_common::{Category, GarmentAttributes, GarmentReport, Gender};
use garment_ai_rust::cli::ExportFormat;
use garment_ai_rust::export::{self, excel};
use tempfile::tempdir;

fn create_test_report(index: usize) -> GarmentReport {
    GarmentReport {
        file_name: format!("look_{}.jpg", index),
        file_path: String::new(),
        labels: vec!["denim jacket".to_string()],
        attributes: GarmentAttributes {
            category: Category::Top,
            gender: Gender::Women,
            features: vec!["Denim Material".to_string(), "Outerwear".to_string()],
            colors: vec!["rgb(32,32,192)".to_string(), "#CCCCCC".to_string()],
            confidence: 0.8,
            recommendations: vec!["Add a belt".to_string()],
            ..Default::default()
        },
    }
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.xlsx");

    let reports: Vec<GarmentReport> = (1..=3).map(create_test_report).collect();
    let result = excel::generate_excel(&reports, &output_path, "テスト");

    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());
    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_excel_generation_empty_reports() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("empty.xlsx");

    assert!(excel::generate_excel(&[], &output_path, "空").is_ok());
    assert!(output_path.exists());
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out").join("garments.json");

    let reports: Vec<GarmentReport> = (1..=2).map(create_test_report).collect();
    export::write_json(&reports, &path).unwrap();
    let loaded = export::read_json(&path).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].file_name, "look_2.jpg");
    assert_eq!(loaded[0].attributes, reports[0].attributes);
}

#[test]
fn test_export_both_into_directory() {
    let dir = tempdir().unwrap();
    let reports = vec![create_test_report(1)];

    let written = export::export_reports(&reports, &ExportFormat::Both, dir.path(), "looks").unwrap();

    assert_eq!(written, vec![dir.path().join("looks.json"), dir.path().join("looks.xlsx")]);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn test_export_excel_to_file_path() {
    let dir = tempdir().unwrap();
    let reports = vec![create_test_report(1)];
    let target = dir.path().join("summary.xlsx");

    let written = export::export_reports(&reports, &ExportFormat::Excel, &target, "ignored").unwrap();
    assert_eq!(written, vec![target.clone()]);
    assert!(target.exists());
}

#[test]
fn test_export_into_missing_folder() {
    let dir = tempdir().unwrap();
    let reports: Vec<GarmentReport> = (1..=2).map(create_test_report).collect();

    let json_dir = dir.path().join("reports");
    let written = export::export_reports(&reports, &ExportFormat::Json, &json_dir, "t").unwrap();
    assert_eq!(written, vec![json_dir.join("t.json")]);
    assert!(written[0].exists());

    let excel_dir = dir.path().join("reports2");
    let written = export::export_reports(&reports, &ExportFormat::Excel, &excel_dir, "t").unwrap();
    assert_eq!(written, vec![excel_dir.join("t.xlsx")]);
    assert!(written[0].exists());

    let nested = dir.path().join("a").join("b").join("out.xlsx");
    let written = export::export_reports(&reports, &ExportFormat::Both, &nested, "t").unwrap();
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.exists()));
}
