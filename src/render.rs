//! 判定結果のターミナル表示
//!
//! - 信頼度は `97.0%` 形式、赤(#F44336)→青(#2196F3) の線形補間で着色
//! - 3品種を表示順に並べ、判定された品種を強調
//! - しきい値未満は品種行の代わりに「該当なし」メッセージ

use crate::config::Config;
use crate::error::PalmError;
use crate::i18n::Language;
use palm_classify_common::{ClassificationOutcome, Error as ClassifyError, PalmClass, DISPLAY_ORDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const LOW: Rgb = Rgb(0xF4, 0x43, 0x36);
    pub const HIGH: Rgb = Rgb(0x21, 0x96, 0xF3);
    const INACTIVE_LIGHT: Rgb = Rgb(0x28, 0x29, 0x2C);
    const INACTIVE_DARK: Rgb = Rgb(0x9E, 0x9E, 0x9E);
    const HIGHLIGHT_TEXT: Rgb = Rgb(0xFF, 0xFF, 0xFF);

    /// 2色を ratio (0.0〜1.0) で補間。各チャネルは切り捨て
    pub fn blend(from: Rgb, to: Rgb, ratio: f64) -> Rgb {
        let inverse = 1.0 - ratio;
        let mix = |a: u8, b: u8| (a as f64 * inverse + b as f64 * ratio) as u8;
        Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// 信頼度（%）に応じた表示色
pub fn confidence_color(confidence_percent: f64) -> Rgb {
    let ratio = (confidence_percent / 100.0).clamp(0.0, 1.0);
    Rgb::blend(Rgb::LOW, Rgb::HIGH, ratio)
}

pub fn format_confidence(confidence_percent: f64) -> String {
    format!("{:.1}%", confidence_percent)
}

/// 表示層。設定から組み立て、設定変更時は作り直す
#[derive(Debug, Clone)]
pub struct Presenter {
    language: Language,
    dark_mode: bool,
    ansi: bool,
}

impl Presenter {
    pub fn new(config: &Config, ansi: bool) -> Self {
        Self {
            language: config.language,
            dark_mode: config.dark_mode,
            ansi,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn paint(&self, text: &str, fg: Rgb) -> String {
        if self.ansi {
            format!("\x1b[38;2;{};{};{}m{}\x1b[0m", fg.0, fg.1, fg.2, text)
        } else {
            text.to_string()
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.ansi {
            let bg = Rgb::HIGH;
            let fg = Rgb::HIGHLIGHT_TEXT;
            format!(
                "\x1b[1;38;2;{};{};{};48;2;{};{};{}m {} \x1b[0m",
                fg.0, fg.1, fg.2, bg.0, bg.1, bg.2, text
            )
        } else {
            format!("[{}]", text)
        }
    }

    fn inactive_color(&self) -> Rgb {
        if self.dark_mode {
            Rgb::INACTIVE_DARK
        } else {
            Rgb::INACTIVE_LIGHT
        }
    }

    /// 3品種の行。`selected` に一致するものだけ強調
    pub fn label_row(&self, selected: Option<PalmClass>) -> String {
        DISPLAY_ORDER
            .iter()
            .map(|&class| {
                let label = self.language.species_label(class);
                if Some(class) == selected {
                    self.highlight(label)
                } else {
                    self.paint(label, self.inactive_color())
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    pub fn confidence_line(&self, confidence_percent: f64) -> String {
        format!(
            "{}: {}",
            self.language.confidence(),
            self.paint(&format_confidence(confidence_percent), confidence_color(confidence_percent))
        )
    }

    /// 判定結果の表示（2行）
    pub fn outcome(&self, outcome: &ClassificationOutcome) -> String {
        let first = match outcome {
            ClassificationOutcome::Unrecognized { .. } => self.language.not_recognized().to_string(),
            ClassificationOutcome::Recognized { .. } => self.label_row(outcome.class()),
        };
        format!("{}\n{}", first, self.confidence_line(outcome.confidence_percent()))
    }

    /// エラー通知（短い一行）
    pub fn error_notice(&self, err: &PalmError) -> String {
        match err {
            PalmError::Common(ClassifyError::Connection(_)) => self.language.connection_error().to_string(),
            PalmError::Common(ClassifyError::Server(status)) => self.language.server_error(*status),
            PalmError::Cancelled => self.language.cancelled().to_string(),
            other => other.to_string(),
        }
    }

    /// 品種カード一覧
    pub fn species_cards(&self) -> String {
        let mut out = format!("{}\n", self.language.species_heading());
        for class in DISPLAY_ORDER {
            out.push_str(&format!(
                "\n  {}\n    {}\n",
                self.language.species_label(class),
                self.language.species_description(class)
            ));
        }
        out
    }
}
