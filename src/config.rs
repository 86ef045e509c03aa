use crate::error::{PalmError, Result};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SERVER_URL_ENV: &str = "PALM_SERVER_URL";
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// アプリ設定
///
/// 起動時に一度だけ読み込み、表示層へ明示的に渡す。
/// 設定変更後は `settings` コマンドが保存し、表示層を作り直す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub language: Language,
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            language: Language::default(),
            dark_mode: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PalmError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("palm-classify").join("config.json"))
    }

    /// 接続先URLを決定
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 設定ファイル
    pub fn resolve_server_url(&self, cli_override: Option<&str>) -> Result<String> {
        let url = match cli_override {
            Some(url) => url.to_string(),
            None => std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| self.server_url.clone()),
        };
        validate_server_url(&url)?;
        Ok(url.trim_end_matches('/').to_string())
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        validate_server_url(&url)?;
        self.server_url = url;
        Ok(())
    }

    /// 設定変更を適用し、変わっていれば保存する
    ///
    /// 途中でエラーになった場合は何も変更しない。戻り値は変更の有無。
    pub fn apply_changes(&mut self, changes: SettingsChanges, config_path: &Path) -> Result<bool> {
        let mut next = self.clone();

        if let Some(language) = changes.language {
            next.language = language;
        }
        if changes.toggle_language {
            next.language = next.language.toggle();
        }
        if let Some(dark_mode) = changes.dark_mode {
            next.dark_mode = dark_mode;
        }
        if let Some(url) = changes.server_url {
            next.set_server_url(url)?;
        }

        if next == *self {
            return Ok(false);
        }

        next.save_to(config_path)?;
        *self = next;
        Ok(true)
    }
}

/// `settings` コマンドで指定された変更
#[derive(Debug, Clone, Default)]
pub struct SettingsChanges {
    pub language: Option<Language>,
    pub toggle_language: bool,
    pub dark_mode: Option<bool>,
    pub server_url: Option<String>,
}

fn validate_server_url(url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| PalmError::Config(format!("サーバーURLが不正です ({}): {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(PalmError::Config(format!("未対応のスキームです: {}", other))),
    }
}
