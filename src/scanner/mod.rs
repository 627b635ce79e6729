pub mod labels;

use crate::error::{GarmentAiError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    /// 分類ラベルのサイドカーファイル（存在する場合のみ）
    pub labels_path: Option<PathBuf>,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(GarmentAiError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension() else {
            continue;
        };
        if !is_image_extension(&ext.to_string_lossy()) {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let sidecar = labels::sidecar_path(path);
        let labels_path = sidecar.exists().then_some(sidecar);

        images.push(ImageInfo {
            path: path.to_path_buf(),
            file_name,
            labels_path,
        });
    }

    // パスでソート（再帰時もフォルダ単位でまとまる）
    images.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::debug!(count = images.len(), folder = %folder.display(), "folder scanned");
    Ok(images)
}
