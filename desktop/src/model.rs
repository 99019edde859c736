//! アプリ状態

use std::path::PathBuf;

use office_ai_common::{ClassificationResult, ClassifierError};

/// 画面の状態
///
/// result は常に Ok か Err のどちらか。初期状態は Err(NoResult) で、
/// 画面上は空文字として表示される。
pub struct AppState {
    pub photo_path: Option<PathBuf>,
    pub result: ClassificationResult,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            photo_path: None,
            result: Err(ClassifierError::NoResult),
        }
    }
}
