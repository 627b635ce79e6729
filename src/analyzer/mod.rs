pub mod cache;

pub use cache::CacheFile;

use crate::error::Result;
use crate::image_io;
use crate::scanner::{labels, ImageInfo};
use garment_ai_common::color::{fallback_palette, try_extract_dominant_colors};
use garment_ai_common::normalize::normalize_labels;
use garment_ai_common::{ClassifierLabel, GarmentAnalyzer, GarmentAttributes, GarmentReport};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;

/// バッチ解析オプション
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// 色抽出前の縮小サイズ
    pub max_image_size: u32,
    /// 色抽出キャッシュを使う
    pub use_cache: bool,
    /// 進捗バーを表示する
    pub show_progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_image_size: 200,
            use_cache: false,
            show_progress: false,
        }
    }
}

/// 画像ファイルから主要色を抽出する（失敗はエラーで返す）
pub fn extract_colors(path: &Path, max_image_size: u32) -> Result<Vec<String>> {
    let buffer = image_io::load_pixel_buffer(path, max_image_size)?;
    Ok(try_extract_dominant_colors(&buffer)?)
}

/// 主要色を抽出する。失敗時はログに残して代替パレット
fn colors_or_fallback(path: &Path, max_image_size: u32) -> (Vec<String>, bool) {
    match extract_colors(path, max_image_size) {
        Ok(colors) => (colors, true),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "色抽出に失敗、代替パレットを使用");
            (fallback_palette(), false)
        }
    }
}

/// ラベルと（任意の）画像から属性を求める
///
/// 画像を読めない場合は画素なしとして扱い、代替パレットになる。
pub fn analyze_file(
    analyzer: &GarmentAnalyzer,
    labels: &[ClassifierLabel],
    image: Option<&Path>,
    max_image_size: u32,
) -> GarmentAttributes {
    let buffer = image.and_then(|path| match image_io::load_pixel_buffer(path, max_image_size) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "画像を読めません、代替パレットを使用");
            None
        }
    });
    analyzer.analyze(labels, buffer.as_ref())
}

/// サイドカーのラベルを読む。読めない場合は空のラベルとして扱う
fn read_sidecar(image: &ImageInfo) -> Vec<ClassifierLabel> {
    let Some(path) = &image.labels_path else {
        tracing::debug!(file = %image.file_name, "ラベルファイルなし");
        return Vec::new();
    };

    match labels::load_labels(path) {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "ラベルファイルを読めません");
            Vec::new()
        }
    }
}

/// 新規にキャッシュへ追加するエントリ
struct NewCacheEntry {
    hash: String,
    file_name: String,
    file_size: u64,
    colors: Vec<String>,
}

fn analyze_one(
    analyzer: &GarmentAnalyzer,
    image: &ImageInfo,
    cache_file: Option<&CacheFile>,
    max_image_size: u32,
) -> (GarmentReport, Option<NewCacheEntry>) {
    let raw_labels = read_sidecar(image);
    let mut attributes = analyzer.analyze_labels(&raw_labels);
    let mut new_entry = None;

    let key = match cache_file {
        Some(_) => match cache::compute_cache_key(&image.path, max_image_size) {
            Ok(key) => Some(key),
            Err(e) => {
                // ハッシュ計算失敗時は未キャッシュとして扱う
                tracing::warn!(file = %image.file_name, error = %e, "ハッシュ計算に失敗");
                None
            }
        },
        None => None,
    };

    let cached = match (cache_file, &key) {
        (Some(file), Some((hash, _))) => file.get(hash).map(|c| c.to_vec()),
        _ => None,
    };

    attributes.colors = match cached {
        Some(colors) => {
            tracing::debug!(file = %image.file_name, "キャッシュヒット");
            colors
        }
        None => {
            let (colors, extracted) = colors_or_fallback(&image.path, max_image_size);
            if let (true, Some((hash, file_size))) = (extracted, key) {
                new_entry = Some(NewCacheEntry {
                    hash,
                    file_name: image.file_name.clone(),
                    file_size,
                    colors: colors.clone(),
                });
            }
            colors
        }
    };

    let report = GarmentReport {
        file_name: image.file_name.clone(),
        file_path: image.path.display().to_string(),
        labels: normalize_labels(&raw_labels, analyzer.max_labels()),
        attributes,
    };

    (report, new_entry)
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(len as u64).with_style(style)
}

/// 画像群を並列に解析する
///
/// 結果は入力と同じ順序で返る。キャッシュ使用時は `folder` のキャッシュファイルを更新する。
pub fn analyze_images(
    analyzer: &GarmentAnalyzer,
    images: &[ImageInfo],
    folder: &Path,
    options: &BatchOptions,
) -> Result<Vec<GarmentReport>> {
    let mut cache = options.use_cache.then(|| CacheFile::load(folder));
    if let Some(cache) = &cache {
        tracing::info!(entries = cache.len(), "キャッシュを読み込みました");
    }

    let pb = progress_bar(images.len(), options.show_progress);

    let outcomes: Vec<(GarmentReport, Option<NewCacheEntry>)> = images
        .par_iter()
        .map(|image| {
            let outcome = analyze_one(analyzer, image, cache.as_ref(), options.max_image_size);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();

    let mut reports = Vec::with_capacity(outcomes.len());
    let mut added = 0;
    for (report, entry) in outcomes {
        if let (Some(cache), Some(entry)) = (cache.as_mut(), entry) {
            cache.insert(entry.hash, entry.file_name, entry.file_size, entry.colors);
            added += 1;
        }
        reports.push(report);
    }

    if let Some(cache) = &cache {
        if added > 0 {
            cache.save(folder)?;
            tracing::info!(added, total = cache.len(), "キャッシュを更新しました");
        }
    }

    Ok(reports)
}
