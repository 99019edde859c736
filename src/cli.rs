//! CLI引数定義

use clap::{Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "office-ai")]
#[command(about = "オフィス写真のオンデバイス分類ツール", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真またはフォルダを分類
    Classify {
        /// 画像ファイルまたはフォルダのパス
        path: PathBuf,

        /// 結果の保存先（JSONファイル）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 分類可能なラベル一覧を表示
    Labels,

    /// 設定の表示・変更
    Config {
        /// モデルディレクトリを設定
        #[arg(long)]
        set_model_dir: Option<PathBuf>,

        /// モデルリポジトリIDを設定
        #[arg(long)]
        set_model_repo: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("不明な出力形式: {} (text, json のいずれか)", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_cli_parse_classify() {
        let cli = Cli::try_parse_from(["office-ai", "classify", "photo.jpg", "--format", "json"])
            .unwrap();
        match cli.command {
            Commands::Classify { path, format, output } => {
                assert_eq!(path, PathBuf::from("photo.jpg"));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(output, None);
            }
            _ => panic!("classify サブコマンドのはず"),
        }
    }

    #[test]
    fn test_cli_parse_labels() {
        let cli = Cli::try_parse_from(["office-ai", "labels"]).unwrap();
        assert!(matches!(cli.command, Commands::Labels));
    }
}
