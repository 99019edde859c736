//! Office AI Rust - CLIエントリポイント

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

use office_ai_common::{ClassifyReport, Office};
use office_ai_rust::cli::{Cli, Commands, OutputFormat};
use office_ai_rust::classifier::{classify_file, VitClassifier};
use office_ai_rust::config::Config;
use office_ai_rust::error::{OfficeAiError, Result};
use office_ai_rust::scanner;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Classify { path, output, format } => {
            run_classify(&path, output.as_deref(), format)?;
        }
        Commands::Labels => {
            run_labels();
        }
        Commands::Config {
            set_model_dir,
            set_model_repo,
            show,
        } => {
            run_config(set_model_dir, set_model_repo, show)?;
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run_classify(path: &Path, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let text_mode = format == OutputFormat::Text;

    if text_mode {
        println!("📸 office-ai-rust - 写真分類\n");
        println!("[1/3] 画像をスキャン中...");
    }

    let images = if path.is_dir() {
        scanner::scan_folder(path)?
    } else {
        vec![scanner::image_info(path)?]
    };

    if images.is_empty() {
        return Err(OfficeAiError::NoImagesFound(path.display().to_string()));
    }

    if text_mode {
        println!("  {} 枚の画像が見つかりました", images.len());
        println!("[2/3] モデルを読み込み中...");
    }

    let model = VitClassifier::load(&config)?;

    if text_mode {
        println!("[3/3] 分類中...\n");
    }

    let progress = if text_mode && images.len() > 1 {
        let bar = ProgressBar::new(images.len() as u64);
        bar.set_style(ProgressStyle::default_bar());
        Some(bar)
    } else {
        None
    };

    let mut reports: Vec<ClassifyReport> = Vec::with_capacity(images.len());
    for info in &images {
        let report = classify_file(&model, info);
        if text_mode {
            println!("{}: {}", report.file_name, report.text);
        }
        if let Some(bar) = &progress {
            bar.inc(1);
        }
        reports.push(report);
    }

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let json = serde_json::to_string_pretty(&reports)?;
    if format == OutputFormat::Json {
        println!("{json}");
    }
    if let Some(out_path) = output {
        fs::write(out_path, &json)?;
        if text_mode {
            println!("\n✔ 結果を保存: {}", out_path.display());
        }
    }

    Ok(())
}

fn run_labels() {
    println!("分類可能なラベル:\n");
    for office in Office::ALL {
        println!("  {}  {}", office.label(), office.name());
    }
}

fn run_config(
    set_model_dir: Option<std::path::PathBuf>,
    set_model_repo: Option<String>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(dir) = set_model_dir {
        config.set_model_dir(dir.clone())?;
        println!("✔ モデルディレクトリを設定しました: {}", dir.display());
        return Ok(());
    }

    if let Some(repo) = set_model_repo {
        config.set_model_repo(repo.clone())?;
        println!("✔ モデルリポジトリを設定しました: {repo}");
        return Ok(());
    }

    if show {
        println!("設定:");
        match &config.model_dir {
            Some(dir) => println!("  モデルディレクトリ: {}", dir.display()),
            None => println!("  モデルディレクトリ: (未設定)"),
        }
        println!("  モデルリポジトリ: {}", config.model_repo);
        println!("  画像サイズ: {}", config.image_size);
    } else {
        println!("オプションを指定してください (--show, --set-model-dir, --set-model-repo)");
    }

    Ok(())
}
