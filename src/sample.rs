//! 判定対象の画像サンプル
//!
//! カメラ撮影・ギャラリー選択のどちらもローカルファイルのパスに正規化してから
//! 分類ワークフローへ渡す。

use crate::error::{PalmError, Result};
use chrono::Local;
use std::io::Read;
use std::path::{Path, PathBuf};

const CACHE_DIR_NAME: &str = "palm-classify";

/// ローカルに保存された画像1枚
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSample {
    pub path: PathBuf,
    pub file_name: String,
}

impl ImageSample {
    /// 既存ファイルからサンプルを作る（形式・サイズの検証はしない）
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PalmError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
        })
    }

    /// ストリームの内容をキャッシュディレクトリへコピーしてサンプル化
    ///
    /// ファイル名は `temp_image_<yyyyMMdd_HHmmss>.jpg`。同じ秒に複数回呼ばれた場合は
    /// 連番を付けて既存ファイルを上書きしない。
    pub fn import<R: Read>(mut reader: R, cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let mut attempt = 0u32;
        let (path, mut file) = loop {
            let name = if attempt == 0 {
                format!("temp_image_{}.jpg", timestamp)
            } else {
                format!("temp_image_{}_{}.jpg", timestamp, attempt)
            };
            let candidate = cache_dir.join(name);
            match std::fs::OpenOptions::new().write(true).create_new(true).open(&candidate) {
                Ok(file) => break (candidate, file),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e.into()),
            }
        };

        let written = std::io::copy(&mut reader, &mut file)?;
        tracing::debug!(path = %path.display(), bytes = written, "sample imported");

        Self::from_path(&path)
    }

    /// `import` をブロッキング用スレッドで実行する
    ///
    /// 標準入力のような同期リーダーを非同期ランタイムから読むときに使う。
    pub async fn import_blocking<R>(reader: R, cache_dir: PathBuf) -> Result<Self>
    where
        R: Read + Send + 'static,
    {
        tokio::task::spawn_blocking(move || Self::import(reader, &cache_dir))
            .await
            .map_err(|e| PalmError::Io(std::io::Error::other(e)))?
    }

    /// サンプルのファイルを削除（取り込んだ一時ファイルの後始末用）
    pub async fn remove_file(&self) -> Result<()> {
        tokio::fs::remove_file(&self.path).await?;
        tracing::debug!(path = %self.path.display(), "sample removed");
        Ok(())
    }

    /// 読み込み用の既定キャッシュディレクトリ
    pub fn default_cache_dir() -> Result<PathBuf> {
        let base = dirs::cache_dir()
            .ok_or_else(|| PalmError::Config("キャッシュディレクトリが見つかりません".into()))?;
        Ok(base.join(CACHE_DIR_NAME))
    }

    /// 画像のバイト列を読み込む
    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}
