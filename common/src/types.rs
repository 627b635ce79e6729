//! 解析結果の型定義
//!
//! CLIとライブラリで共有される型:
//! - ClassifierLabel: 外部の画像分類モデルの出力（1ラベル）
//! - GarmentAttributes: ラベル集合から導出した衣類属性
//! - GarmentReport: バッチ出力用（ファイル情報 + 属性）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 画像分類モデルの出力1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifierLabel {
    pub class_name: String,
    pub probability: f32,
}

impl ClassifierLabel {
    pub fn new(class_name: impl Into<String>, probability: f32) -> Self {
        Self {
            class_name: class_name.into(),
            probability,
        }
    }
}

/// 衣類カテゴリ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Accessory,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Formal,
    Sporty,
    #[default]
    Casual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Striped,
    Floral,
    Checked,
    Dotted,
    #[default]
    Solid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Denim,
    Cotton,
    Wool,
    Silk,
    Leather,
    #[default]
    Unknown,
}

/// 性別区分（表示用の値をそのままシリアライズ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    #[default]
    Unisex,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Formal,
    Sports,
    #[default]
    Casual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Summer,
    Winter,
    Spring,
    Fall,
    #[default]
    AllSeason,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Top => write!(f, "top"),
            Category::Bottom => write!(f, "bottom"),
            Category::Dress => write!(f, "dress"),
            Category::Accessory => write!(f, "accessory"),
            Category::Unknown => write!(f, "unknown"),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Formal => write!(f, "formal"),
            Style::Sporty => write!(f, "sporty"),
            Style::Casual => write!(f, "casual"),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Striped => write!(f, "striped"),
            Pattern::Floral => write!(f, "floral"),
            Pattern::Checked => write!(f, "checked"),
            Pattern::Dotted => write!(f, "dotted"),
            Pattern::Solid => write!(f, "solid"),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Denim => write!(f, "denim"),
            Material::Cotton => write!(f, "cotton"),
            Material::Wool => write!(f, "wool"),
            Material::Silk => write!(f, "silk"),
            Material::Leather => write!(f, "leather"),
            Material::Unknown => write!(f, "unknown"),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Men => write!(f, "Men"),
            Gender::Women => write!(f, "Women"),
            Gender::Unisex => write!(f, "Unisex"),
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occasion::Formal => write!(f, "formal"),
            Occasion::Sports => write!(f, "sports"),
            Occasion::Casual => write!(f, "casual"),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => write!(f, "summer"),
            Season::Winter => write!(f, "winter"),
            Season::Spring => write!(f, "spring"),
            Season::Fall => write!(f, "fall"),
            Season::AllSeason => write!(f, "all-season"),
        }
    }
}

/// 衣類属性（パイプラインの最終出力）
///
/// 全フィールドが常に値を持つ。キーワードに一致しない属性は既定値になる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentAttributes {
    pub category: Category,
    pub style: Style,
    pub pattern: Pattern,
    pub material: Material,
    pub gender: Gender,
    pub occasion: Occasion,
    pub season: Season,

    /// 特徴タグ（重複なし、挿入順）
    #[serde(default)]
    pub features: Vec<String>,

    /// 主要色（最大3色、画素数の多い順）
    #[serde(default)]
    pub colors: Vec<String>,

    /// 先頭ラベルの確信度
    #[serde(default)]
    pub confidence: f32,

    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// バッチ解析の1件分
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentReport {
    pub file_name: String,

    /// 画像ファイルのパス（Excel出力時に使用）
    #[serde(default)]
    pub file_path: String,

    /// 正規化済みラベル
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(flatten)]
    pub attributes: GarmentAttributes,
}
