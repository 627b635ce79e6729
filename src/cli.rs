use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "garment-ai")]
#[command(about = "衣類画像の属性解析・レポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// キーワードテーブル（JSON）。設定ファイルより優先
    #[arg(long, global = true)]
    pub keywords: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 分類ラベル（と画像）から1件の属性を解析
    Analyze {
        /// 分類ラベルのJSONファイル
        #[arg(short, long, required = true)]
        labels: PathBuf,

        /// 色抽出に使う画像ファイル
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 画像フォルダを一括解析（`<名前>.labels.json` をラベルとして使用）
    Batch {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力ファイル（デフォルト: 入力フォルダ/設定の default_output）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// キャッシュを使用（色抽出をスキップ）
        #[arg(long)]
        use_cache: bool,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 解析結果JSONからExcel等を生成
    Export {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ドキュメントタイトル
        #[arg(short, long, default_value = "衣類解析結果")]
        title: String,
    },

    /// キーワードテーブルを表示/書き出し
    Keywords {
        /// テーブルをJSONファイルに書き出す
        #[arg(long)]
        dump: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// キーワードファイルを設定（空文字で解除）
        #[arg(long)]
        set_keyword_file: Option<String>,

        /// 色抽出前の縮小サイズを設定
        #[arg(long)]
        set_max_image_size: Option<u32>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// キャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// 対象フォルダ（省略時はカレント）
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
