//! Garment AI Common Library
//!
//! 画像分類ラベルから衣類属性を導出するパイプライン。CLIと共有される。

pub mod analyzer;
pub mod classifier;
pub mod color;
pub mod error;
pub mod features;
pub mod keywords;
pub mod normalize;
pub mod recommend;
pub mod types;

pub use analyzer::GarmentAnalyzer;
pub use classifier::GenderEvidence;
pub use color::{extract_dominant_colors, PixelBuffer, FALLBACK_PALETTE};
pub use error::{Error, Result};
pub use keywords::{KeywordTables, MatchMode};
pub use types::{
    Category, ClassifierLabel, GarmentAttributes, GarmentReport, Gender, Material, Occasion,
    Pattern, Season, Style,
};
