//! オフィスラベル定義
//!
//! 分類モデルが出力する4つの固定ラベルと表示名のマッピング。
//! テーブルは静的で、コンパイル時に確定する。

use serde::{Deserialize, Serialize};

/// 分類対象のオフィス（4拠点固定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Office {
    VkSpbZinger,
    YandexMskNewOffice,
    YandexMskRedRose,
    YandexSpbBenua,
}

impl Office {
    /// モデルのクラスインデックス順（成果物の config.json id2label と同一）
    pub const ALL: [Office; 4] = [
        Office::VkSpbZinger,
        Office::YandexMskNewOffice,
        Office::YandexMskRedRose,
        Office::YandexSpbBenua,
    ];

    /// モデルが出力する生ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Office::VkSpbZinger => "VK_spb_zinger",
            Office::YandexMskNewOffice => "Yandex_msk_new_office",
            Office::YandexMskRedRose => "Yandex_msk_red_rose",
            Office::YandexSpbBenua => "Yandex_spb_benua",
        }
    }

    /// 表示名
    pub fn name(&self) -> &'static str {
        match self {
            Office::VkSpbZinger => "VK office in Saint-Petersburg at Zinger's House",
            Office::YandexMskNewOffice => "Yandex new office in Moscow",
            Office::YandexMskRedRose => "Yandex office in Moscow at Red Rose",
            Office::YandexSpbBenua => "Yandex office in Saint-Petersburg at Benua",
        }
    }

    /// 生ラベルから逆引き（未知のラベルは None）
    pub fn from_label(label: &str) -> Option<Office> {
        Office::ALL.iter().copied().find(|o| o.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table_is_four_entries() {
        assert_eq!(Office::ALL.len(), 4);
    }

    #[test]
    fn test_known_labels_map_to_fixed_names() {
        assert_eq!(
            Office::VkSpbZinger.name(),
            "VK office in Saint-Petersburg at Zinger's House"
        );
        assert_eq!(Office::YandexMskNewOffice.name(), "Yandex new office in Moscow");
        assert_eq!(
            Office::YandexMskRedRose.name(),
            "Yandex office in Moscow at Red Rose"
        );
        assert_eq!(
            Office::YandexSpbBenua.name(),
            "Yandex office in Saint-Petersburg at Benua"
        );
    }

    #[test]
    fn test_from_label_roundtrip() {
        for office in Office::ALL {
            assert_eq!(Office::from_label(office.label()), Some(office));
        }
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(Office::from_label("unknown_office"), None);
        assert_eq!(Office::from_label(""), None);
        // 大文字小文字は区別する
        assert_eq!(Office::from_label("vk_spb_zinger"), None);
    }
}
