//! 分類レポートの型定義
//!
//! CLIが出力し、デスクトップビューアが読み取る共有型。

use serde::{Deserialize, Serialize};

use crate::result::{ClassificationResult, ClassifierError};

/// 1枚の写真の分類レポート
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifyReport {
    pub file_name: String,

    /// 画像ファイルの絶対パス
    pub file_path: String,

    /// 撮影日時（EXIF DateTimeOriginal）
    pub date: String,

    /// モデルが出力した生ラベル（失敗時は空）
    pub label: String,

    /// オフィス表示名（失敗時は空）
    pub office: String,

    /// 画面表示テキスト
    pub text: String,

    /// エラー種別名（成功時は空）
    pub error: String,
}

impl ClassifyReport {
    /// レポートを ClassificationResult に復元する
    pub fn result(&self) -> ClassificationResult {
        if self.error.is_empty() {
            Ok(self.office.clone())
        } else {
            Err(ClassifierError::from_kind(&self.error)
                .unwrap_or(ClassifierError::FailedToClassifyImage))
        }
    }
}
