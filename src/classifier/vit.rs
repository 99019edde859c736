//! ViT分類モデル
//!
//! candle で safetensors 形式の ViT を読み込み、1枚の画像からラベルを推論する。
//! 成果物はローカルディレクトリ優先、なければ Hugging Face Hub から取得。

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::vit;
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use image::DynamicImage;
use std::path::PathBuf;

use office_ai_common::Office;

use crate::config::Config;
use crate::error::{OfficeAiError, Result};

/// 正規化パラメータ（学習時と同一）
const MEAN: f32 = 0.5;
const STD: f32 = 0.5;

/// クラス数はラベルテーブルと一致する
const NUM_CLASSES: usize = Office::ALL.len();

pub struct VitClassifier {
    model: vit::Model,
    device: Device,
    image_size: usize,
}

impl VitClassifier {
    /// モデルを読み込む
    pub fn load(config: &Config) -> Result<Self> {
        let device = Device::Cpu;
        let (weights_path, config_path) = locate_artifacts(config)?;

        log::debug!("モデル設定を読み込み: {}", config_path.display());
        let config_json = std::fs::read_to_string(&config_path)?;
        let vit_config: vit::Config = serde_json::from_str(&config_json)?;

        log::debug!("重みを読み込み: {}", weights_path.display());
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)
                .map_err(|e| OfficeAiError::ModelLoad(e.to_string()))?
        };
        let model = vit::Model::new(&vit_config, NUM_CLASSES, vb)
            .map_err(|e| OfficeAiError::ModelLoad(e.to_string()))?;

        Ok(Self {
            model,
            device,
            image_size: config.image_size as usize,
        })
    }

    /// 画像1枚を推論して生ラベルを返す
    pub fn predict(&self, image: &DynamicImage) -> candle_core::Result<String> {
        let tensor = preprocess(image, self.image_size, &self.device)?;
        let logits = self.model.forward(&tensor)?;
        let probs = candle_nn::ops::softmax(&logits, 1)?
            .flatten_all()?
            .to_vec1::<f32>()?;

        let (index, confidence) = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, p)| (i, *p))
            .unwrap_or((0, 0.0));

        let label = Office::ALL
            .get(index)
            .map(|o| o.label())
            .unwrap_or_default();
        log::debug!("推論結果: {} (確信度 {:.3})", label, confidence);

        Ok(label.to_string())
    }
}

/// モデル成果物（重みと設定）のパスを解決する
///
/// config.model_dir があればそこを使い、なければ hf-hub からダウンロード。
fn locate_artifacts(config: &Config) -> Result<(PathBuf, PathBuf)> {
    if let Some(dir) = &config.model_dir {
        let weights = dir.join("model.safetensors");
        let model_config = dir.join("config.json");
        if !weights.is_file() {
            return Err(OfficeAiError::ModelLoad(format!(
                "model.safetensors がありません: {}",
                dir.display()
            )));
        }
        if !model_config.is_file() {
            return Err(OfficeAiError::ModelLoad(format!(
                "config.json がありません: {}",
                dir.display()
            )));
        }
        return Ok((weights, model_config));
    }

    log::info!("Hugging Face Hub から取得: {}", config.model_repo);
    let api = Api::new().map_err(|e| OfficeAiError::ModelLoad(e.to_string()))?;
    let repo = api.repo(Repo::new(config.model_repo.clone(), RepoType::Model));
    let weights = repo
        .get("model.safetensors")
        .map_err(|e| OfficeAiError::ModelLoad(e.to_string()))?;
    let model_config = repo
        .get("config.json")
        .map_err(|e| OfficeAiError::ModelLoad(e.to_string()))?;
    Ok((weights, model_config))
}

/// モデル入力テンソルへの前処理
///
/// RGB化 → リサイズ → CHW配置 → (x/255 - MEAN)/STD 正規化。
/// 出力形状は (1, 3, size, size)。
pub fn preprocess(image: &DynamicImage, size: usize, device: &Device) -> candle_core::Result<Tensor> {
    let rgb = image.to_rgb8();
    let resized = image::imageops::resize(
        &rgb,
        size as u32,
        size as u32,
        image::imageops::FilterType::Triangle,
    );

    let mut data = vec![0f32; 3 * size * size];
    for (x, y, pixel) in resized.enumerate_pixels() {
        let offset = y as usize * size + x as usize;
        for c in 0..3 {
            data[c * size * size + offset] = (pixel.0[c] as f32 / 255.0 - MEAN) / STD;
        }
    }

    Tensor::from_vec(data, (1, 3, size, size), device)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_preprocess_shape() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(640, 480));
        let tensor = preprocess(&image, 224, &Device::Cpu).unwrap();
        assert_eq!(tensor.dims(), &[1, 3, 224, 224]);
    }

    #[test]
    fn test_preprocess_normalization() {
        // 白画素は (255/255 - 0.5)/0.5 = 1.0、黒画素は -1.0 になる
        let white = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([255, 255, 255])));
        let tensor = preprocess(&white, 8, &Device::Cpu).unwrap();
        let values = tensor.flatten_all().unwrap().to_vec1::<f32>().unwrap();
        assert!(values.iter().all(|v| (v - 1.0).abs() < 1e-6));

        let black = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])));
        let tensor = preprocess(&black, 8, &Device::Cpu).unwrap();
        let values = tensor.flatten_all().unwrap().to_vec1::<f32>().unwrap();
        assert!(values.iter().all(|v| (v + 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_num_classes_matches_label_table() {
        assert_eq!(NUM_CLASSES, Office::ALL.len());
    }
}
