//! 分類フロー
//!
//! 画像バイト列 → デコード → 推論 → ラベル解決 → 表示テキスト。
//! 失敗は ClassifierError に集約され、この経路で panic しない。
//! リトライもキャッシュもしない。1回の呼び出しで1回だけ推論する。

pub mod vit;

use image::DynamicImage;
use std::fs;

use office_ai_common::{ClassificationResult, ClassifierError, ClassifyReport, DisplayText, Office};

use crate::scanner::ImageInfo;

pub use vit::VitClassifier;

/// 画像バイト列をデコードする
///
/// 形式不明・破損バイト列は FailedToReadImage。
pub fn decode_image(bytes: &[u8]) -> std::result::Result<DynamicImage, ClassifierError> {
    image::load_from_memory(bytes).map_err(|e| {
        log::warn!("画像デコード失敗: {}", e);
        ClassifierError::FailedToReadImage
    })
}

/// 画像バイト列からオフィスを判定する
pub fn classify_office(
    model: &VitClassifier,
    bytes: &[u8],
) -> std::result::Result<Office, ClassifierError> {
    let image = decode_image(bytes)?;

    let label = model.predict(&image).map_err(|e| {
        log::warn!("推論失敗: {}", e);
        ClassifierError::FailedToClassifyImage
    })?;

    // ラベルテーブル外の出力は分類失敗として扱う
    Office::from_label(&label).ok_or(ClassifierError::FailedToClassifyImage)
}

/// 画像バイト列を分類して表示名を返す
pub fn classify_bytes(model: &VitClassifier, bytes: &[u8]) -> ClassificationResult {
    classify_office(model, bytes).map(|office| office.name().to_string())
}

/// 分類結果からレポートを組み立てる
pub fn build_report(
    info: &ImageInfo,
    outcome: std::result::Result<Office, ClassifierError>,
) -> ClassifyReport {
    let result: ClassificationResult = outcome.map(|o| o.name().to_string());
    let text = result.display_text();

    match outcome {
        Ok(office) => ClassifyReport {
            file_name: info.file_name.clone(),
            file_path: info.path.display().to_string(),
            date: info.date.clone().unwrap_or_default(),
            label: office.label().to_string(),
            office: office.name().to_string(),
            text,
            error: String::new(),
        },
        Err(err) => ClassifyReport {
            file_name: info.file_name.clone(),
            file_path: info.path.display().to_string(),
            date: info.date.clone().unwrap_or_default(),
            label: String::new(),
            office: String::new(),
            text,
            error: err.to_string(),
        },
    }
}

/// ファイル1つを分類してレポートを返す
pub fn classify_file(model: &VitClassifier, info: &ImageInfo) -> ClassifyReport {
    let outcome = match fs::read(&info.path) {
        Ok(bytes) => classify_office(model, &bytes),
        Err(e) => {
            log::warn!("ファイル読み込み失敗 {}: {}", info.path.display(), e);
            Err(ClassifierError::FailedToReadImage)
        }
    };
    build_report(info, outcome)
}
