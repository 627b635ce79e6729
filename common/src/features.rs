//! 特徴タグ抽出
//!
//! 衣類種別・素材・スタイル・細部（ポケット、襟、袖丈など）のタグを集める。
//! グループ同士は排他ではなく、1つのラベル集合から複数のタグが付く。

use crate::keywords::{keyword_matches, KeywordTables, MatchMode};

pub const BASIC_TOP: &str = "Basic Top";
pub const BASIC_BOTTOM: &str = "Basic Bottom";
pub const CASUAL_WEAR: &str = "Casual Wear";

/// 特徴タグを抽出する
///
/// 戻り値は重複なし・挿入順。タグが1つもなければ代替タグを付け、
/// 少なくとも `Casual Wear` を含む。
pub fn extract_features(labels: &[String], tables: &KeywordTables) -> Vec<String> {
    let mut features: Vec<String> = Vec::new();

    let matched = tables
        .feature_groups
        .all_matches(labels)
        .chain(tables.detail_features.all_matches(labels))
        .chain(tables.gender_features.all_matches(labels));

    for tag in matched {
        push_unique(&mut features, tag);
    }

    if features.is_empty() {
        features = fallback_features(labels, tables);
    }

    tracing::debug!(count = features.len(), "features extracted");
    features
}

/// 代替タグ（大まかなトップス/ボトムス判定 + Casual Wear）
fn fallback_features(labels: &[String], tables: &KeywordTables) -> Vec<String> {
    let mut features = Vec::new();

    if any_keyword(labels, &tables.fallback.top) {
        features.push(BASIC_TOP.to_string());
    }
    if any_keyword(labels, &tables.fallback.bottom) {
        features.push(BASIC_BOTTOM.to_string());
    }
    features.push(CASUAL_WEAR.to_string());

    features
}

fn any_keyword(labels: &[String], keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|kw| labels.iter().any(|l| keyword_matches(l, kw, MatchMode::Substring)))
}

fn push_unique(features: &mut Vec<String>, tag: &str) {
    if !features.iter().any(|f| f == tag) {
        features.push(tag.to_string());
    }
}
