//! EXIF撮影日時の抽出

use exif::{In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 画像ファイルから撮影日時を取得する
///
/// DateTimeOriginal を優先し、なければ DateTime にフォールバック。
/// EXIFが読めない場合は None。
pub fn extract_date(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut reader).ok()?;

    for tag in [Tag::DateTimeOriginal, Tag::DateTime] {
        if let Some(field) = exif.get_field(tag, In::PRIMARY) {
            return Some(field.display_value().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extract_date_missing_file() {
        let path = PathBuf::from("/nonexistent/photo.jpg");
        assert_eq!(extract_date(&path), None);
    }

    #[test]
    fn test_extract_date_non_image_file() {
        let dir = std::env::temp_dir().join("office_ai_exif_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("not_an_image.jpg");
        std::fs::write(&path, b"plain text, no exif container").unwrap();

        assert_eq!(extract_date(&path), None);

        std::fs::remove_dir_all(&dir).ok();
    }
}
