//! 分類ラベルファイルの読み込み
//!
//! 受け付ける形式:
//! - `[{"className": "...", "probability": 0.9}, ...]`（モデル出力そのまま）
//! - `["...", "..."]`（ラベル文字列のみ。確信度は0.0として扱う）

use crate::error::{GarmentAiError, Result};
use garment_ai_common::ClassifierLabel;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// サイドカーファイルの拡張子（`look1.jpg` → `look1.labels.json`）
pub const LABELS_SUFFIX: &str = ".labels.json";

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelFile {
    Scored(Vec<ClassifierLabel>),
    Plain(Vec<String>),
}

pub fn parse_labels(json: &str) -> Result<Vec<ClassifierLabel>> {
    let file: LabelFile = serde_json::from_str(json)
        .map_err(|e| GarmentAiError::InvalidLabels(e.to_string()))?;

    Ok(match file {
        LabelFile::Scored(labels) => labels,
        LabelFile::Plain(names) => names
            .into_iter()
            .map(|n| ClassifierLabel::new(n, 0.0))
            .collect(),
    })
}

pub fn load_labels(path: &Path) -> Result<Vec<ClassifierLabel>> {
    if !path.exists() {
        return Err(GarmentAiError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_labels(&content)
}

/// 画像に対応するサイドカーファイルのパス
pub fn sidecar_path(image_path: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    image_path.with_file_name(format!("{}{}", stem, LABELS_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scored_labels() {
        let labels = parse_labels(r#"[{"className": "gown", "probability": 0.8}]"#).unwrap();
        assert_eq!(labels, vec![ClassifierLabel::new("gown", 0.8)]);
    }

    #[test]
    fn test_parse_plain_labels() {
        let labels = parse_labels(r#"["t-shirt", "men's casual cotton"]"#).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].class_name, "men's casual cotton");
        assert_eq!(labels[1].probability, 0.0);
    }

    #[test]
    fn test_parse_invalid_labels() {
        let result = parse_labels(r#"{"labels": 3}"#);
        assert!(matches!(result, Err(GarmentAiError::InvalidLabels(_))));
    }

    #[test]
    fn test_sidecar_path() {
        assert_eq!(
            sidecar_path(Path::new("/photos/look1.jpg")),
            PathBuf::from("/photos/look1.labels.json")
        );
    }
}
