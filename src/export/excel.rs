//! Excel生成
//!
//! 1画像1行の一覧表。色列はセル背景を主要色で塗る。

use crate::error::Result;
use garment_ai_common::GarmentReport;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

/// 一覧表の列定義
#[derive(Debug, Clone, Copy)]
pub struct ColumnDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub width: f64,
}

pub const COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition { key: "fileName", label: "ファイル名", width: 24.0 },
    ColumnDefinition { key: "category", label: "カテゴリ", width: 11.0 },
    ColumnDefinition { key: "style", label: "スタイル", width: 10.0 },
    ColumnDefinition { key: "pattern", label: "柄", width: 10.0 },
    ColumnDefinition { key: "material", label: "素材", width: 10.0 },
    ColumnDefinition { key: "gender", label: "性別", width: 9.0 },
    ColumnDefinition { key: "occasion", label: "用途", width: 9.0 },
    ColumnDefinition { key: "season", label: "季節", width: 11.0 },
    ColumnDefinition { key: "confidence", label: "確信度", width: 8.0 },
    ColumnDefinition { key: "features", label: "特徴", width: 40.0 },
    ColumnDefinition { key: "recommendations", label: "おすすめ", width: 60.0 },
];

/// 色見本の列数（主要色は最大3色）
const COLOR_COLUMNS: u16 = 3;
const COLOR_COLUMN_WIDTH: f64 = 14.0;

/// `rgb(r,g,b)` / `#RRGGBB` をExcelの色値に変換
pub fn parse_css_color(value: &str) -> Option<u32> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return u32::from_str_radix(hex, 16).ok().filter(|_| hex.len() == 6);
    }

    let inner = value.strip_prefix("rgb(")?.strip_suffix(')')?;
    let channels: Vec<u32> = inner
        .split(',')
        .map(|c| c.trim().parse::<u32>().ok().filter(|v| *v <= 255))
        .collect::<Option<Vec<_>>>()?;
    match channels.as_slice() {
        [r, g, b] => Some((r << 16) | (g << 8) | b),
        _ => None,
    }
}

fn field_value(report: &GarmentReport, key: &str) -> String {
    let attrs = &report.attributes;
    match key {
        "fileName" => report.file_name.clone(),
        "category" => attrs.category.to_string(),
        "style" => attrs.style.to_string(),
        "pattern" => attrs.pattern.to_string(),
        "material" => attrs.material.to_string(),
        "gender" => attrs.gender.to_string(),
        "occasion" => attrs.occasion.to_string(),
        "season" => attrs.season.to_string(),
        "confidence" => format!("{:.2}", attrs.confidence),
        "features" => attrs.features.join(", "),
        "recommendations" => attrs.recommendations.join("\n"),
        _ => "-".to_string(),
    }
}

pub fn generate_excel(reports: &[GarmentReport], output_path: &Path, title: &str) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("解析結果")?;

    let title_format = Format::new().set_bold().set_font_size(14.0);
    let header_format = Format::new()
        .set_bold()
        .set_font_size(9.0)
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));
    let value_format = Format::new()
        .set_font_size(10.0)
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    worksheet.write_string_with_format(0, 0, title, &title_format)?;
    worksheet.write_string(0, 2, format!("生成日時: {}", generated_at))?;

    // ヘッダ行
    let header_row = 2;
    for (col, column) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, column.width)?;
        worksheet.write_string_with_format(header_row, col, column.label, &header_format)?;
    }
    let color_start = COLUMNS.len() as u16;
    for i in 0..COLOR_COLUMNS {
        worksheet.set_column_width(color_start + i, COLOR_COLUMN_WIDTH)?;
        worksheet.write_string_with_format(
            header_row,
            color_start + i,
            format!("色{}", i + 1),
            &header_format,
        )?;
    }

    for (idx, report) in reports.iter().enumerate() {
        let row = header_row + 1 + idx as u32;

        for (col, column) in COLUMNS.iter().enumerate() {
            let value = field_value(report, column.key);
            worksheet.write_string_with_format(row, col as u16, value, &value_format)?;
        }

        for (i, color) in report.attributes.colors.iter().take(COLOR_COLUMNS as usize).enumerate() {
            let mut swatch = value_format.clone();
            if let Some(rgb) = parse_css_color(color) {
                swatch = swatch.set_background_color(Color::RGB(rgb));
            }
            worksheet.write_string_with_format(row, color_start + i as u16, color, &swatch)?;
        }
    }

    workbook.save(output_path)?;
    tracing::debug!(rows = reports.len(), path = %output_path.display(), "excel written");
    Ok(())
}
