//! 分類結果とエラー型定義

use thiserror::Error;

/// 分類エラー（4種固定）
///
/// Display はエラー種別名をそのまま返す。画面には "Failure: {kind}" の
/// 形式で表示される（DisplayText 参照）。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierError {
    /// 初期状態（まだ写真が選択されていない）
    #[error("noResult")]
    NoResult,

    /// 画像バイト列のデコード失敗
    #[error("failedToReadImage")]
    FailedToReadImage,

    /// 宣言のみ。どの経路からも生成されない
    #[error("unexpectedResult")]
    UnexpectedResult,

    /// モデル呼び出し失敗、または未知ラベル
    #[error("failedToClassifyImage")]
    FailedToClassifyImage,
}

impl ClassifierError {
    /// エラー種別名からの逆引き（JSONレポートの error フィールド用）
    pub fn from_kind(kind: &str) -> Option<ClassifierError> {
        match kind {
            "noResult" => Some(ClassifierError::NoResult),
            "failedToReadImage" => Some(ClassifierError::FailedToReadImage),
            "unexpectedResult" => Some(ClassifierError::UnexpectedResult),
            "failedToClassifyImage" => Some(ClassifierError::FailedToClassifyImage),
            _ => None,
        }
    }
}

/// 分類結果: 成功は表示名、失敗は ClassifierError
///
/// 不変条件: 常にどちらか一方のみ。未選択時のデフォルトは Err(NoResult)。
pub type ClassificationResult = std::result::Result<String, ClassifierError>;

/// 画面表示用テキストへの変換
pub trait DisplayText {
    fn display_text(&self) -> String;
}

impl DisplayText for ClassificationResult {
    fn display_text(&self) -> String {
        match self {
            Ok(name) => format!("I guess it's a {name}"),
            Err(ClassifierError::NoResult) => String::new(),
            Err(err) => format!("Failure: {err}"),
        }
    }
}
