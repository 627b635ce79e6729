pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use garment_ai_common::GarmentReport;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.with_extension(extension)
    }
}

/// 出力先の親ディレクトリを作成
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// 解析結果をJSONで保存
pub fn write_json(reports: &[GarmentReport], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(reports)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// 解析結果JSONを読み込み
pub fn read_json(path: &Path) -> Result<Vec<GarmentReport>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 指定形式で書き出し、出力したファイルのパスを返す
pub fn export_reports(
    reports: &[GarmentReport],
    format: &ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Json | ExportFormat::Both) {
        let path = output_path_for_format(output, title, "json");
        write_json(reports, &path)?;
        println!("✔ JSON出力: {}", path.display());
        written.push(path);
    }

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let path = output_path_for_format(output, title, "xlsx");
        ensure_parent_dir(&path)?;
        println!("- Excelを生成中...");
        excel::generate_excel(reports, &path, title)?;
        println!("✔ Excel出力: {}", path.display());
        written.push(path);
    }

    Ok(written)
}
