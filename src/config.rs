use crate::error::{GarmentAiError, Result};
use garment_ai_common::KeywordTables;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// キーワードファイルを指定する環境変数
pub const KEYWORDS_ENV: &str = "GARMENT_AI_KEYWORDS";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// カスタムキーワードテーブル（JSON）
    pub keyword_file: Option<String>,
    /// 色抽出前に縮小する最大辺（px）
    pub max_image_size: u32,
    /// 参照する分類ラベルの上限
    pub max_labels: usize,
    /// バッチ出力のファイル名
    pub default_output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keyword_file: None,
            max_image_size: 200,
            max_labels: garment_ai_common::normalize::DEFAULT_MAX_LABELS,
            default_output: "garments.json".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GarmentAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("garment-ai").join("config.json"))
    }

    /// 使用するキーワードファイル（環境変数を優先）
    pub fn keyword_path(&self) -> Option<PathBuf> {
        if let Ok(path) = std::env::var(KEYWORDS_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        self.keyword_file.as_ref().map(PathBuf::from)
    }

    /// キーワードテーブルを解決する（未指定なら組み込み）
    pub fn keyword_tables(&self) -> Result<KeywordTables> {
        match self.keyword_path() {
            Some(path) => {
                if !path.exists() {
                    return Err(GarmentAiError::FileNotFound(path.display().to_string()));
                }
                tracing::info!(path = %path.display(), "loading keyword tables");
                Ok(KeywordTables::from_file(&path)?)
            }
            None => Ok(KeywordTables::builtin()),
        }
    }

    pub fn set_keyword_file(&mut self, path: Option<String>) -> Result<()> {
        self.keyword_file = path;
        self.save()
    }

    pub fn set_max_image_size(&mut self, size: u32) -> Result<()> {
        if size == 0 {
            return Err(GarmentAiError::Config("max_image_size は1以上を指定してください".into()));
        }
        self.max_image_size = size;
        self.save()
    }
}
