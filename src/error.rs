use thiserror::Error;

#[derive(Error, Debug)]
pub enum GarmentAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("ラベルファイルが不正: {0}")]
    InvalidLabels(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error(transparent)]
    Common(#[from] garment_ai_common::Error),
}

impl From<rust_xlsxwriter::XlsxError> for GarmentAiError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        GarmentAiError::ExcelGeneration(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GarmentAiError>;
