//! エラー型定義

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OfficeAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像ファイルが見つかりません: {0}")]
    NoImagesFound(String),

    #[error("モデルの読み込みに失敗しました: {0}")]
    ModelLoad(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OfficeAiError>;
