//! 設定管理
//!
//! ~/.config/office-ai/config.json に保存される。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{OfficeAiError, Result};

/// モデル成果物の取得元（ローカル未指定時に hf-hub から取得するリポジトリ）
pub const DEFAULT_MODEL_REPO: &str = "office-ai/office-image-classifier";

/// モデル入力の一辺のピクセル数
pub const DEFAULT_IMAGE_SIZE: u32 = 224;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ローカルのモデルディレクトリ（model.safetensors と config.json を含む）
    pub model_dir: Option<PathBuf>,

    /// Hugging Face Hub のモデルリポジトリID
    pub model_repo: String,

    /// 前処理のリサイズ先サイズ
    pub image_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: None,
            model_repo: DEFAULT_MODEL_REPO.to_string(),
            image_size: DEFAULT_IMAGE_SIZE,
        }
    }
}

impl Config {
    /// 設定ファイルのパスを取得
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OfficeAiError::Config("ホームディレクトリが見つかりません".to_string()))?;
        Ok(home.join(".config").join("office-ai").join("config.json"))
    }

    /// 設定を読み込む（ファイルがなければデフォルト値）
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 設定を保存する
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn set_model_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.model_dir = Some(dir);
        self.save()
    }

    pub fn set_model_repo(&mut self, repo: String) -> Result<()> {
        self.model_repo = repo;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model_dir, None);
        assert_eq!(config.model_repo, DEFAULT_MODEL_REPO);
        assert_eq!(config.image_size, 224);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            model_dir: Some(PathBuf::from("/opt/models/office")),
            model_repo: "someone/other-model".to_string(),
            image_size: 384,
        };

        let json = serde_json::to_string(&config).expect("シリアライズ失敗");
        let restored: Config = serde_json::from_str(&json).expect("デシリアライズ失敗");

        assert_eq!(restored.model_dir, config.model_dir);
        assert_eq!(restored.model_repo, config.model_repo);
        assert_eq!(restored.image_size, config.image_size);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let restored: Config = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert_eq!(restored.model_repo, DEFAULT_MODEL_REPO);
        assert_eq!(restored.image_size, DEFAULT_IMAGE_SIZE);
    }
}
