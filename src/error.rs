use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalmError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("判定がキャンセルされました")]
    Cancelled,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] palm_classify_common::Error),
}

impl PalmError {
    /// 分類ワークフロー由来のエラーなら中身を返す
    pub fn as_classify_error(&self) -> Option<&palm_classify_common::Error> {
        match self {
            PalmError::Common(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PalmError>;
