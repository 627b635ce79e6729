//! 主要色抽出
//!
//! RGBA8 画素バッファから、黒・白・灰色に近い画素を除いた上で色を量子化し、
//! 出現数の多い上位3色を `rgb(r,g,b)` 形式で返す。
//!
//! ## 処理フロー
//! 1. α < 128 の画素を除外
//! 2. HSL に変換し、L < 0.1 / L > 0.9 / S < 0.1 を除外
//! 3. 各チャンネルを32刻みに丸めて頻度を数える
//! 4. 頻度の降順（同数はRGB値の昇順）で上位3色

use crate::error::{Error, Result};
use std::collections::HashMap;

/// 抽出失敗時の代替パレット
pub const FALLBACK_PALETTE: [&str; 3] = ["#FFFFFF", "#CCCCCC", "#888888"];

/// 返す色数
pub const TOP_COLORS: usize = 3;

/// 量子化の刻み幅
pub const QUANT_STEP: u8 = 32;

const ALPHA_THRESHOLD: u8 = 128;
const MIN_LIGHTNESS: f32 = 0.1;
const MAX_LIGHTNESS: f32 = 0.9;
const MIN_SATURATION: f32 = 0.1;

/// RGBA8 画素バッファ（行優先）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// バッファ長が `width * height * 4` と一致しない場合はエラー
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(Error::PixelAccess(format!(
                "buffer length {} does not match {}x{} RGBA ({} bytes)",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self { width, height, data })
    }

    /// 単色で塗りつぶしたバッファ
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgba.repeat(count),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data.chunks_exact(4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// RGB → HSL（h: 0-360, s/l: 0-1）
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

/// チャンネル値を32刻みの最寄り値に丸める
///
/// 240以上は256に丸まるため255で頭打ちにする。
pub fn quantize_channel(value: u8) -> u8 {
    let step = QUANT_STEP as f32;
    let rounded = (value as f32 / step).round() * step;
    rounded.min(255.0) as u8
}

/// 色の集計対象になる画素か
fn is_contributing(pixel: [u8; 4]) -> bool {
    if pixel[3] < ALPHA_THRESHOLD {
        return false;
    }
    let (_, s, l) = rgb_to_hsl(pixel[0], pixel[1], pixel[2]);
    !(l < MIN_LIGHTNESS || l > MAX_LIGHTNESS || s < MIN_SATURATION)
}

fn format_rgb(rgb: [u8; 3]) -> String {
    format!("rgb({},{},{})", rgb[0], rgb[1], rgb[2])
}

/// 主要色を抽出する（失敗時はエラー）
pub fn try_extract_dominant_colors(buffer: &PixelBuffer) -> Result<Vec<String>> {
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();

    for pixel in buffer.pixels().filter(|p| is_contributing(*p)) {
        let key = [
            quantize_channel(pixel[0]),
            quantize_channel(pixel[1]),
            quantize_channel(pixel[2]),
        ];
        *counts.entry(key).or_insert(0) += 1;
    }

    if counts.is_empty() {
        return Err(Error::PixelAccess(format!(
            "no contributing pixels in {}x{} image",
            buffer.width, buffer.height
        )));
    }

    let mut ranked: Vec<([u8; 3], usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(ranked
        .into_iter()
        .take(TOP_COLORS)
        .map(|(rgb, _)| format_rgb(rgb))
        .collect())
}

/// 主要色を抽出する
///
/// 失敗した場合はログに残して [`FALLBACK_PALETTE`] を返す。エラーは呼び出し側へ伝えない。
pub fn extract_dominant_colors(buffer: &PixelBuffer) -> Vec<String> {
    match try_extract_dominant_colors(buffer) {
        Ok(colors) => colors,
        Err(e) => {
            tracing::warn!(error = %e, "color extraction failed, using fallback palette");
            fallback_palette()
        }
    }
}

pub fn fallback_palette() -> Vec<String> {
    FALLBACK_PALETTE.iter().map(|c| c.to_string()).collect()
}
