//! 判定1回分の非同期タスク
//!
//! 状態遷移: Idle → Uploading → {Succeeded | Failed}
//! 終端状態から Uploading へ戻ることはない。結果は oneshot で1回だけ届く。

use super::client::Classifier;
use crate::error::{PalmError, Result};
use crate::sample::ImageSample;
use palm_classify_common::{ClassificationOutcome, Error as ClassifyError};
use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

/// 失敗の種類（表示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connection,
    Server(u16),
    /// ファイル読み込みなど、通信前のローカル失敗
    Local,
    Cancelled,
}

impl From<&PalmError> for FailureKind {
    fn from(err: &PalmError) -> Self {
        match err {
            PalmError::Common(ClassifyError::Connection(_)) => FailureKind::Connection,
            PalmError::Common(ClassifyError::Server(status)) => FailureKind::Server(*status),
            PalmError::Cancelled => FailureKind::Cancelled,
            _ => FailureKind::Local,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    Uploading,
    Succeeded(ClassificationOutcome),
    Failed(FailureKind),
}

impl WorkflowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Succeeded(_) | WorkflowState::Failed(_))
    }

    /// Idle からのみ Uploading へ進める
    pub fn begin_upload(&self) -> Option<WorkflowState> {
        match self {
            WorkflowState::Idle => Some(WorkflowState::Uploading),
            _ => None,
        }
    }

    /// Uploading からのみ終端状態へ進める
    pub fn complete(&self, result: &Result<ClassificationOutcome>) -> Option<WorkflowState> {
        match self {
            WorkflowState::Uploading => Some(match result {
                Ok(outcome) => WorkflowState::Succeeded(*outcome),
                Err(err) => WorkflowState::Failed(err.into()),
            }),
            _ => None,
        }
    }
}

/// 実行中の判定タスク
///
/// drop されると通信中の転送ごと中断する。
pub struct ClassificationTask {
    receiver: Option<oneshot::Receiver<Result<ClassificationOutcome>>>,
    state: watch::Receiver<WorkflowState>,
    handle: JoinHandle<()>,
}

impl ClassificationTask {
    /// 別タスクで判定を開始
    pub fn spawn(classifier: Arc<Classifier>, sample: ImageSample) -> Self {
        let (sender, receiver) = oneshot::channel();
        let (state_tx, state) = watch::channel(WorkflowState::Idle);

        let handle = tokio::spawn(async move {
            let uploading = state_tx.borrow().begin_upload();
            if let Some(next) = uploading {
                state_tx.send_replace(next);
            }

            let result = classifier.classify(&sample).await;

            let finished = state_tx.borrow().complete(&result);
            if let Some(next) = finished {
                state_tx.send_replace(next);
            }
            // 受信側が先に破棄されていれば結果は捨てる
            let _ = sender.send(result);
        });

        Self {
            receiver: Some(receiver),
            state,
            handle,
        }
    }

    /// 現在の状態
    pub fn state(&self) -> WorkflowState {
        let current = self.state.borrow().clone();
        if !current.is_terminal() && self.handle.is_finished() {
            return WorkflowState::Failed(FailureKind::Cancelled);
        }
        current
    }

    /// 通信を中断して結果を破棄
    pub fn cancel(&self) {
        tracing::debug!("classification cancelled");
        self.handle.abort();
    }

    /// 終端結果を待つ。結果は1回だけ受け取れる
    pub async fn outcome(&mut self) -> Result<ClassificationOutcome> {
        let receiver = self.receiver.take().ok_or(PalmError::Cancelled)?;
        receiver.await.map_err(|_| PalmError::Cancelled)?
    }
}

impl Drop for ClassificationTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
