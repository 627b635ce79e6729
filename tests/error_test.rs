//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use garment_ai_rust::config::Config;
use garment_ai_rust::error::GarmentAiError;
use garment_ai_rust::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"), false);
    assert!(matches!(result, Err(GarmentAiError::FolderNotFound(_))));
}

/// 画像のないフォルダをスキャンした場合
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("look.labels.json"), "[]").unwrap();

    let result = scanner::scan_folder(dir.path(), false);
    assert!(result.unwrap().is_empty());
}

/// 存在しないラベルファイル
#[test]
fn test_missing_labels_file() {
    let result = scanner::labels::load_labels(Path::new("/nonexistent/look.labels.json"));
    assert!(matches!(result, Err(GarmentAiError::FileNotFound(_))));
}

/// GarmentAiErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        GarmentAiError::Config("テスト設定エラー".to_string()),
        GarmentAiError::FileNotFound("look.jpg".to_string()),
        GarmentAiError::FolderNotFound("/path/to/folder".to_string()),
        GarmentAiError::ImageLoad("decode".to_string()),
        GarmentAiError::InvalidLabels("expected array".to_string()),
        GarmentAiError::ExcelGeneration("Excel生成エラー".to_string()),
        GarmentAiError::NoImagesFound("フォルダ".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GarmentAiError = io_err.into();

    assert!(matches!(err, GarmentAiError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: GarmentAiError = json_err.into();

    assert!(matches!(err, GarmentAiError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = garment_ai_common::Error::Config("fallback: empty keyword".to_string());
    let err: GarmentAiError = common_err.into();

    assert!(matches!(err, GarmentAiError::Common(_)));
    assert_eq!(format!("{}", err), "Config error: fallback: empty keyword");
}

/// 不正なキーワードファイル
#[test]
fn test_invalid_keyword_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keywords.json");
    std::fs::write(&path, r#"{ "season": { "rules": [{ "value": "monsoon", "keywords": ["rain"] }] } }"#).unwrap();

    let config = Config {
        keyword_file: Some(path.display().to_string()),
        ..Default::default()
    };
    let result = config.keyword_tables();
    assert!(matches!(
        result,
        Err(GarmentAiError::Common(garment_ai_common::Error::Json(_)))
    ));
}

/// 存在しないキーワードファイル
#[test]
fn test_missing_keyword_file() {
    let config = Config {
        keyword_file: Some("/nonexistent/keywords.json".to_string()),
        ..Default::default()
    };
    assert!(matches!(config.keyword_tables(), Err(GarmentAiError::FileNotFound(_))));
}
