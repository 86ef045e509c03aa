mod client;
mod workflow;

pub use client::Classifier;
pub use workflow::{ClassificationTask, FailureKind, WorkflowState};

use crate::error::Result;
use crate::sample::ImageSample;
use palm_classify_common::ClassificationOutcome;
use serde::Serialize;

/// `--json` 出力用の1枚分の結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleReport {
    pub file_name: String,
    pub file_path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ClassificationOutcome>,

    /// 品種ラベル（範囲外・該当なしは null）
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SampleReport {
    pub fn new(sample: &ImageSample, result: &Result<ClassificationOutcome>) -> Self {
        let (outcome, error) = match result {
            Ok(outcome) => (Some(*outcome), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            file_name: sample.file_name.clone(),
            file_path: sample.path.display().to_string(),
            label: outcome.and_then(|o| o.class()).map(|c| c.label().to_string()),
            outcome,
            error,
        }
    }
}
