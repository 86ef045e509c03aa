//! エラー型定義

use thiserror::Error;

/// 分類ワークフローのエラー型
///
/// 1回の呼び出しは成功か、以下のいずれか1種類の失敗で終わる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 通信レベルの失敗（DNS、接続拒否、タイムアウト、TLS、受信中断）
    #[error("Connection error: {0}")]
    Connection(String),

    /// 2xx以外のステータス、またはレスポンス本文が解釈できない
    #[error("Server error: {0}")]
    Server(u16),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
