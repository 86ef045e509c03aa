//! ナツメヤシ品種の定義
//!
//! サーバーが返すクラス番号と品種名の対応は固定:
//! 0 → Khalas, 1 → Razzez, 2 → Shishi
//!
//! 画面上の並び順（Khalas, Shishi, Razzez）とは一致しないので、
//! 並び順から番号を推測してはいけない。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalmClass {
    Khalas,
    Razzez,
    Shishi,
}

/// カード一覧・結果表示での並び順
pub const DISPLAY_ORDER: [PalmClass; 3] = [PalmClass::Khalas, PalmClass::Shishi, PalmClass::Razzez];

impl PalmClass {
    /// サーバーのクラス番号から品種を引く
    ///
    /// 範囲外の番号は `None`（検証はせず、そのまま呼び出し元へ返す）
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(PalmClass::Khalas),
            1 => Some(PalmClass::Razzez),
            2 => Some(PalmClass::Shishi),
            _ => None,
        }
    }

    pub fn index(&self) -> i32 {
        match self {
            PalmClass::Khalas => 0,
            PalmClass::Razzez => 1,
            PalmClass::Shishi => 2,
        }
    }

    /// 英語ラベル
    pub fn label(&self) -> &'static str {
        match self {
            PalmClass::Khalas => "Khalas",
            PalmClass::Razzez => "Razzez",
            PalmClass::Shishi => "Shishi",
        }
    }
}

impl std::fmt::Display for PalmClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// クラス番号 → ラベル。範囲外は `None`
pub fn label_for_index(index: i32) -> Option<&'static str> {
    PalmClass::from_index(index).map(|c| c.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_label_table() {
        assert_eq!(label_for_index(0), Some("Khalas"));
        assert_eq!(label_for_index(1), Some("Razzez"));
        assert_eq!(label_for_index(2), Some("Shishi"));
    }

    #[test]
    fn test_out_of_range_index_has_no_label() {
        assert_eq!(label_for_index(3), None);
        assert_eq!(label_for_index(5), None);
        assert_eq!(label_for_index(-1), None);
    }

    #[test]
    fn test_index_roundtrip() {
        for class in [PalmClass::Khalas, PalmClass::Razzez, PalmClass::Shishi] {
            assert_eq!(PalmClass::from_index(class.index()), Some(class));
        }
    }

    #[test]
    fn test_display_order_is_not_index_order() {
        let indices: Vec<i32> = DISPLAY_ORDER.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 2, 1]);
    }
}
