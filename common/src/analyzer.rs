//! 解析パイプライン（CLI/ライブラリ共通）
//!
//! ラベル正規化 → カテゴリ判定 → 各属性判定 → 特徴タグ → 推奨コメント の順に処理する。
//! 色抽出は画素バッファのみに依存し、ラベル処理とは独立している。

use crate::classifier;
use crate::color::{extract_dominant_colors, fallback_palette, PixelBuffer};
use crate::features::extract_features;
use crate::keywords::KeywordTables;
use crate::normalize::{normalize_labels, top_confidence, DEFAULT_MAX_LABELS};
use crate::recommend::recommendations_for;
use crate::types::{ClassifierLabel, GarmentAttributes};

/// 解析器
///
/// キーワードテーブルを一度だけ構築して保持する。状態を持たないため、
/// 参照を共有して複数スレッドから同時に使える。
#[derive(Debug, Clone)]
pub struct GarmentAnalyzer {
    tables: KeywordTables,
    max_labels: usize,
}

impl Default for GarmentAnalyzer {
    fn default() -> Self {
        Self::new(KeywordTables::builtin())
    }
}

impl GarmentAnalyzer {
    pub fn new(tables: KeywordTables) -> Self {
        Self {
            tables,
            max_labels: DEFAULT_MAX_LABELS,
        }
    }

    /// 参照する最大ラベル数を変更する
    pub fn with_max_labels(mut self, max_labels: usize) -> Self {
        self.max_labels = max_labels;
        self
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    pub fn max_labels(&self) -> usize {
        self.max_labels
    }

    /// ラベル列から属性を判定する（色は空）
    pub fn analyze_labels(&self, labels: &[ClassifierLabel]) -> GarmentAttributes {
        let normalized = normalize_labels(labels, self.max_labels);
        self.analyze_normalized(&normalized, top_confidence(labels))
    }

    /// 正規化済みラベルから属性を判定する
    pub fn analyze_normalized(&self, labels: &[String], confidence: f32) -> GarmentAttributes {
        let tables = &self.tables;

        let category = classifier::classify_category(labels, tables);
        tracing::debug!(%category, labels = labels.len(), "category classified");

        let attributes = GarmentAttributes {
            category,
            style: classifier::classify_style(labels, tables),
            pattern: classifier::classify_pattern(labels, tables),
            material: classifier::classify_material(labels, tables),
            gender: classifier::classify_gender(labels, tables),
            occasion: classifier::classify_occasion(labels, tables),
            season: classifier::classify_season(labels, tables),
            features: extract_features(labels, tables),
            colors: Vec::new(),
            confidence,
            recommendations: recommendations_for(category, tables),
        };

        tracing::debug!(
            style = %attributes.style,
            pattern = %attributes.pattern,
            material = %attributes.material,
            gender = %attributes.gender,
            "attributes classified"
        );

        attributes
    }

    /// ラベルと画素バッファから属性・主要色を求める
    ///
    /// 画素バッファがなければ代替パレットを使う。
    pub fn analyze(
        &self,
        labels: &[ClassifierLabel],
        pixels: Option<&PixelBuffer>,
    ) -> GarmentAttributes {
        let mut attributes = self.analyze_labels(labels);
        attributes.colors = match pixels {
            Some(buffer) => extract_dominant_colors(buffer),
            None => fallback_palette(),
        };
        attributes
    }
}
