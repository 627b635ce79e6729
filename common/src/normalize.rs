//! ラベル正規化
//!
//! 分類モデルの出力文字列を小文字化・空白整理して、
//! 後段のキーワード照合に渡せる形にそろえる。

use crate::types::ClassifierLabel;
use regex::Regex;

/// 既定の最大ラベル数（モデル出力の上位20件）
pub const DEFAULT_MAX_LABELS: usize = 20;

lazy_static::lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref TOKEN_SPLIT_RE: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
}

/// 単一ラベルを正規化する
pub fn normalize_label(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    WHITESPACE_RE.replace_all(&lowered, " ").into_owned()
}

/// ラベル列を正規化する
///
/// 入力順（確信度の降順）を保ち、空ラベルは除外し、先頭 `max_labels` 件に切り詰める。
pub fn normalize_labels(labels: &[ClassifierLabel], max_labels: usize) -> Vec<String> {
    labels
        .iter()
        .map(|l| normalize_label(&l.class_name))
        .filter(|l| !l.is_empty())
        .take(max_labels)
        .collect()
}

/// ラベルを単語に分割する（英数字以外を区切りとして扱う）
pub fn tokenize(label: &str) -> Vec<&str> {
    TOKEN_SPLIT_RE
        .split(label)
        .filter(|t| !t.is_empty())
        .collect()
}

/// 正規化後に残る先頭ラベルの確信度（なければ0.0）
pub fn top_confidence(labels: &[ClassifierLabel]) -> f32 {
    labels
        .iter()
        .find(|l| !l.class_name.trim().is_empty())
        .map(|l| l.probability)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Floral   Dress "), "floral dress");
        assert_eq!(normalize_label("T-Shirt\tTee"), "t-shirt tee");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn test_normalize_labels_keeps_order_and_drops_empty() {
        let labels = vec![
            ClassifierLabel::new("Jean", 0.7),
            ClassifierLabel::new("   ", 0.2),
            ClassifierLabel::new("Denim Jacket", 0.1),
        ];
        assert_eq!(normalize_labels(&labels, 20), vec!["jean", "denim jacket"]);
    }

    #[test]
    fn test_normalize_labels_truncates() {
        let labels: Vec<ClassifierLabel> = (0..30)
            .map(|i| ClassifierLabel::new(format!("label {}", i), 0.01))
            .collect();
        let normalized = normalize_labels(&labels, DEFAULT_MAX_LABELS);
        assert_eq!(normalized.len(), 20);
        assert_eq!(normalized[0], "label 0");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("women's summer gown"), vec!["women", "s", "summer", "gown"]);
        assert_eq!(tokenize("jersey, t-shirt"), vec!["jersey", "t", "shirt"]);
        assert!(tokenize("--").is_empty());
    }

    #[test]
    fn test_top_confidence() {
        assert_eq!(top_confidence(&[]), 0.0);
        let labels = vec![ClassifierLabel::new("gown", 0.9), ClassifierLabel::new("robe", 0.05)];
        assert!((top_confidence(&labels) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_top_confidence_skips_dropped_labels() {
        let labels = vec![
            ClassifierLabel::new("   ", 0.95),
            ClassifierLabel::new("gown", 0.6),
        ];
        assert!((top_confidence(&labels) - 0.6).abs() < 1e-6);
        assert_eq!(top_confidence(&[ClassifierLabel::new("", 0.8)]), 0.0);
    }
}
