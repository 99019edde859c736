//! 画像スキャナー
//!
//! 単一ファイルまたはフォルダ直下の画像を列挙し、EXIF撮影日時を添える。

pub mod exif;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{OfficeAiError, Result};

/// 対応する画像拡張子
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// 分類対象の画像1枚
#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    /// EXIF撮影日時（なければ None）
    pub date: Option<String>,
}

/// 拡張子が対応画像かどうか（大文字小文字を無視）
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e))
}

/// 単一ファイルの ImageInfo を作る
pub fn image_info(path: &Path) -> Result<ImageInfo> {
    if !path.is_file() {
        return Err(OfficeAiError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ImageInfo {
        path: path.to_path_buf(),
        file_name,
        date: exif::extract_date(path),
    })
}

/// フォルダ直下の画像を列挙する（再帰なし、ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(OfficeAiError::FolderNotFound(folder.display().to_string()));
    }

    let mut images: Vec<ImageInfo> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(is_image_extension)
                .unwrap_or(false)
        })
        .filter_map(|e| image_info(e.path()).ok())
        .collect();

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup_test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPG"));
        assert!(is_image_extension("jpeg"));
        assert!(is_image_extension("png"));
        assert!(!is_image_extension("gif"));
        assert!(!is_image_extension("txt"));
    }

    #[test]
    fn test_image_info_missing_file() {
        let result = image_info(Path::new("/nonexistent/photo.jpg"));
        assert!(matches!(result, Err(OfficeAiError::FileNotFound(_))));
    }

    #[test]
    fn test_scan_folder_missing() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(OfficeAiError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = setup_test_dir("office_ai_scanner_test");
        fs::write(dir.join("b.jpg"), b"x").unwrap();
        fs::write(dir.join("a.png"), b"x").unwrap();
        fs::write(dir.join("c.JPEG"), b"x").unwrap();
        fs::write(dir.join("notes.txt"), b"x").unwrap();

        let images = scan_folder(&dir).unwrap();
        let names: Vec<&str> = images.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.jpg", "c.JPEG"]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_scan_folder_not_recursive() {
        let dir = setup_test_dir("office_ai_scanner_depth_test");
        let sub = dir.join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.join("top.jpg"), b"x").unwrap();
        fs::write(sub.join("nested.jpg"), b"x").unwrap();

        let images = scan_folder(&dir).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].file_name, "top.jpg");

        fs::remove_dir_all(&dir).ok();
    }
}
