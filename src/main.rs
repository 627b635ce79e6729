use anyhow::Context;
use clap::Parser;
use garment_ai_common::GarmentAnalyzer;
use garment_ai_rust::{analyzer, cli, config, error, export, scanner};
use cli::{Cli, Commands};
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_analyzer(config: &Config, keywords: Option<PathBuf>) -> anyhow::Result<GarmentAnalyzer> {
    let tables = match keywords {
        Some(path) => garment_ai_common::KeywordTables::from_file(&path)
            .with_context(|| format!("キーワードファイルを読めません: {}", path.display()))?,
        None => config.keyword_tables()?,
    };
    Ok(GarmentAnalyzer::new(tables).with_max_labels(config.max_labels))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { labels, image, output } => {
            let analyzer = build_analyzer(&config, cli.keywords)?;
            let input = scanner::labels::load_labels(&labels)
                .with_context(|| format!("ラベルを読めません: {}", labels.display()))?;

            let attributes = analyzer::analyze_file(
                &analyzer,
                &input,
                image.as_deref(),
                config.max_image_size,
            );
            let json = serde_json::to_string_pretty(&attributes)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Batch { folder, output, format, use_cache, recursive } => {
            println!("👕 garment-ai - 一括解析\n");
            let analyzer = build_analyzer(&config, cli.keywords)?;

            // 1. 画像スキャン
            println!("[1/3] 画像をスキャン中...");
            let images = scanner::scan_folder(&folder, recursive)?;
            if images.is_empty() {
                return Err(error::GarmentAiError::NoImagesFound(folder.display().to_string()).into());
            }
            let with_labels = images.iter().filter(|i| i.labels_path.is_some()).count();
            println!("✔ {}枚の画像を検出（ラベルあり: {}枚）\n", images.len(), with_labels);

            // 2. 解析
            println!("[2/3] 解析中...{}", if use_cache { " (キャッシュ有効)" } else { "" });
            let options = analyzer::BatchOptions {
                max_image_size: config.max_image_size,
                use_cache,
                show_progress: !cli.verbose,
            };
            let reports = analyzer::analyze_images(&analyzer, &images, &folder, &options)?;
            println!("✔ 解析完了\n");

            // 3. 出力
            println!("[3/3] 結果を保存中...");
            let output = output.unwrap_or_else(|| folder.join(&config.default_output));
            let title = output
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "garments".to_string());
            export::export_reports(&reports, &format, &output, &title)?;

            println!("\n✅ 完了");
        }

        Commands::Export { input, format, output, title } => {
            println!("📄 garment-ai - エクスポート\n");

            let reports = export::read_json(&input)
                .with_context(|| format!("解析結果を読めません: {}", input.display()))?;
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));

            export::export_reports(&reports, &format, &output_dir, &title)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Keywords { dump } => {
            let analyzer = build_analyzer(&config, cli.keywords)?;
            let json = analyzer.tables().to_json()?;
            match dump {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ キーワードテーブルを書き出しました: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Config { set_keyword_file, set_max_image_size, show } => {
            let mut config = config;

            if let Some(path) = set_keyword_file {
                let path = (!path.is_empty()).then_some(path);
                config.set_keyword_file(path)?;
                println!("✔ キーワードファイルを設定しました");
            }

            if let Some(size) = set_max_image_size {
                config.set_max_image_size(size)?;
                println!("✔ 縮小サイズを設定しました");
            }

            if show {
                println!("設定:");
                println!("  キーワードファイル: {}", config.keyword_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "組み込み".to_string()));
                println!("  縮小サイズ: {}px", config.max_image_size);
                println!("  最大ラベル数: {}", config.max_labels);
                println!("  出力ファイル: {}", config.default_output);
            }
        }

        Commands::Cache { clear, folder, info } => {
            let target = folder.unwrap_or_else(|| PathBuf::from("."));
            let cache_path = analyzer::CacheFile::cache_path(&target);

            if info || !clear {
                if cache_path.exists() {
                    let cache = analyzer::CacheFile::load(&target);
                    println!("キャッシュ情報:");
                    println!("  パス: {}", cache_path.display());
                    println!("  件数: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  サイズ: {} bytes", meta.len());
                    }
                } else {
                    println!("キャッシュファイルが存在しません: {}", cache_path.display());
                }
            }

            if clear {
                match analyzer::CacheFile::clear(&target) {
                    Ok(true) => println!("✔ キャッシュを削除しました: {}", cache_path.display()),
                    Ok(false) => println!("キャッシュファイルが存在しません"),
                    Err(e) => println!("キャッシュ削除エラー: {}", e),
                }
            }
        }
    }

    Ok(())
}
