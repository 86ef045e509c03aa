//! 表示言語（英語・アラビア語）と画面文言

use clap::ValueEnum;
use palm_classify_common::PalmClass;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
    #[serde(rename = "ar")]
    #[value(name = "ar")]
    Arabic,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// 設定画面の「言語切替」ボタン相当
    pub fn toggle(&self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    pub fn species_label(&self, class: PalmClass) -> &'static str {
        match (self, class) {
            (Language::English, c) => c.label(),
            (Language::Arabic, PalmClass::Khalas) => "خلاص",
            (Language::Arabic, PalmClass::Razzez) => "رزيز",
            (Language::Arabic, PalmClass::Shishi) => "شيشي",
        }
    }

    pub fn species_description(&self, class: PalmClass) -> &'static str {
        match (self, class) {
            (Language::English, PalmClass::Khalas) => {
                "Soft amber date with a caramel sweetness, one of the most prized varieties of the Gulf."
            }
            (Language::English, PalmClass::Shishi) => {
                "Medium-sized date, yellow when fresh and dark brown when ripe, with a firm bite."
            }
            (Language::English, PalmClass::Razzez) => {
                "Late-season date with reddish skin and a rich, syrupy flavour."
            }
            (Language::Arabic, PalmClass::Khalas) => "تمر طري بلون كهرماني وحلاوة تشبه الكراميل، من أشهر أصناف الخليج.",
            (Language::Arabic, PalmClass::Shishi) => "تمر متوسط الحجم، أصفر عند الخلال وبني داكن عند النضج، قوامه متماسك.",
            (Language::Arabic, PalmClass::Razzez) => "تمر متأخر النضج بقشرة مائلة إلى الحمرة ونكهة غنية بالدبس.",
        }
    }

    pub fn not_recognized(&self) -> &'static str {
        match self {
            Language::English => "its not one of Khalas,Shishi,Razzez",
            Language::Arabic => "ليست من أصناف خلاص، شيشي، رزيز",
        }
    }

    pub fn connection_error(&self) -> &'static str {
        match self {
            Language::English => "Connection Error",
            Language::Arabic => "خطأ في الاتصال",
        }
    }

    pub fn server_error(&self, status: u16) -> String {
        match self {
            Language::English => format!("Server Error: {}", status),
            Language::Arabic => format!("خطأ في الخادم: {}", status),
        }
    }

    pub fn cancelled(&self) -> &'static str {
        match self {
            Language::English => "Cancelled",
            Language::Arabic => "تم الإلغاء",
        }
    }

    pub fn uploading(&self) -> &'static str {
        match self {
            Language::English => "Analyzing...",
            Language::Arabic => "جارٍ التحليل...",
        }
    }

    pub fn confidence(&self) -> &'static str {
        match self {
            Language::English => "Confidence",
            Language::Arabic => "نسبة الثقة",
        }
    }

    pub fn species_heading(&self) -> &'static str {
        match self {
            Language::English => "Palm varieties",
            Language::Arabic => "أصناف النخيل",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Language::English.toggle(), Language::Arabic);
        assert_eq!(Language::Arabic.toggle(), Language::English);
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::Arabic).unwrap(), "\"ar\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_english_labels_match_species_table() {
        for class in palm_classify_common::DISPLAY_ORDER {
            assert_eq!(Language::English.species_label(class), class.label());
        }
    }

    #[test]
    fn test_notices() {
        assert_eq!(Language::English.server_error(503), "Server Error: 503");
        assert_eq!(Language::English.connection_error(), "Connection Error");
        assert!(Language::Arabic.server_error(500).contains("500"));
    }
}
