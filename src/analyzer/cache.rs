//! 色抽出結果キャッシュモジュール
//!
//! 画像のSHA-256ハッシュをキーにして主要色をキャッシュし、
//! 同じ画像の再デコードをスキップする。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".garment-cache.json";

/// キャッシュファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    /// バージョン（互換性チェック用）
    version: u32,
    /// ハッシュ → エントリ
    entries: HashMap<String, CacheEntry>,
}

/// キャッシュエントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub file_name: String,
    pub file_size: u64,
    pub colors: Vec<String>,
}

impl CacheFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(folder: &Path) -> PathBuf {
        folder.join(CACHE_FILE_NAME)
    }

    /// キャッシュファイルを読み込み（読めなければ空のキャッシュ）
    pub fn load(folder: &Path) -> Self {
        let cache_path = Self::cache_path(folder);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(error = %e, "キャッシュを開けません、再生成します");
                return Self::default();
            }
        };

        match serde_json::from_reader::<_, CacheFile>(BufReader::new(file)) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => cache,
            Ok(cache) => {
                tracing::warn!(found = cache.version, "キャッシュバージョン不一致、再生成します");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "キャッシュが壊れています、再生成します");
                Self::default()
            }
        }
    }

    pub fn save(&self, folder: &Path) -> Result<()> {
        let file = File::create(Self::cache_path(folder))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn get(&self, hash: &str) -> Option<&[String]> {
        self.entries.get(hash).map(|e| e.colors.as_slice())
    }

    pub fn insert(&mut self, hash: String, file_name: String, file_size: u64, colors: Vec<String>) {
        self.entries.insert(hash, CacheEntry {
            file_name,
            file_size,
            colors,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// キャッシュファイルを削除（存在しなければ false）
    pub fn clear(folder: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(folder);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// キャッシュキーを計算（ファイル内容 + 縮小サイズ）
///
/// 縮小サイズが変わると抽出色も変わるため、キーに含める。
pub fn compute_cache_key(path: &Path, max_image_size: u32) -> Result<(String, u64)> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    hasher.update(max_image_size.to_le_bytes());
    Ok((hex::encode(hasher.finalize()), bytes.len() as u64))
}
