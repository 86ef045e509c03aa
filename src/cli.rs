use crate::i18n::Language;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palm-classify")]
#[command(about = "ナツメヤシの写真をアップロードして品種を判定", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 判定サーバーのURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を判定（ファイルまたはフォルダ）
    Classify {
        /// 画像ファイル/フォルダのパス
        #[arg(required_unless_present = "stdin")]
        paths: Vec<PathBuf>,

        /// 標準入力から画像を読み込む（キャッシュへコピーしてから判定）
        #[arg(long, conflicts_with = "paths")]
        stdin: bool,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 品種カード一覧を表示
    Species,

    /// 設定を表示/編集
    Settings {
        /// 表示言語
        #[arg(long, value_enum)]
        language: Option<Language>,

        /// 表示言語を切り替え（en ⇔ ar）
        #[arg(long, conflicts_with = "language")]
        toggle_language: bool,

        /// ダークモード
        #[arg(long)]
        dark_mode: Option<bool>,

        /// 判定サーバーのURL
        #[arg(long)]
        server_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify_paths() {
        let cli = Cli::try_parse_from(["palm-classify", "classify", "a.jpg", "dir"]).unwrap();
        match cli.command {
            Commands::Classify { paths, stdin, json } => {
                assert_eq!(paths.len(), 2);
                assert!(!stdin);
                assert!(!json);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_classify_requires_input() {
        assert!(Cli::try_parse_from(["palm-classify", "classify"]).is_err());
        assert!(Cli::try_parse_from(["palm-classify", "classify", "--stdin"]).is_ok());
    }

    #[test]
    fn test_global_server_flag() {
        let cli = Cli::try_parse_from(["palm-classify", "species", "--server", "http://x:1"]).unwrap();
        assert_eq!(cli.server.as_deref(), Some("http://x:1"));
    }

    #[test]
    fn test_settings_language_values() {
        let cli = Cli::try_parse_from(["palm-classify", "settings", "--language", "ar"]).unwrap();
        match cli.command {
            Commands::Settings { language, .. } => assert_eq!(language, Some(Language::Arabic)),
            _ => panic!("expected settings"),
        }
        assert!(Cli::try_parse_from(["palm-classify", "settings", "--language", "fr"]).is_err());
    }

    #[test]
    fn test_settings_dark_mode_bool() {
        let cli = Cli::try_parse_from(["palm-classify", "settings", "--dark-mode", "true"]).unwrap();
        match cli.command {
            Commands::Settings { dark_mode, .. } => assert_eq!(dark_mode, Some(true)),
            _ => panic!("expected settings"),
        }
    }
}
