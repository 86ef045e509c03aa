//! 判定結果の型と判定ルール
//!
//! - PredictionResponse: サーバーの `/predict` レスポンス
//! - ClassificationOutcome: 信頼度としきい値から導出する最終判定

use serde::{Deserialize, Serialize};

use crate::species::PalmClass;

/// 信頼度しきい値（%）。これ未満は「該当なし」
pub const CONFIDENCE_THRESHOLD: f64 = 94.0;

/// `/predict` のレスポンス
///
/// どのフィールドも欠落・null があり得る。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionResponse {
    pub class_id: Option<i32>,
    /// 0.0〜1.0 の割合
    pub confidence: Option<f64>,
    pub prediction: Option<String>,
}

impl PredictionResponse {
    /// 信頼度（%）。欠落時は 0.0
    pub fn confidence_percent(&self) -> f64 {
        self.confidence.unwrap_or(0.0) * 100.0
    }
}

/// 最終判定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClassificationOutcome {
    /// しきい値以上。`class_id` はサーバーの値そのまま（範囲チェックなし）
    #[serde(rename_all = "camelCase")]
    Recognized {
        class_id: Option<i32>,
        confidence_percent: f64,
    },
    #[serde(rename_all = "camelCase")]
    Unrecognized { confidence_percent: f64 },
}

impl ClassificationOutcome {
    /// レスポンスとしきい値から判定を導出
    pub fn evaluate(response: &PredictionResponse, threshold: f64) -> Self {
        let confidence_percent = response.confidence_percent();
        if confidence_percent < threshold {
            ClassificationOutcome::Unrecognized { confidence_percent }
        } else {
            ClassificationOutcome::Recognized {
                class_id: response.class_id,
                confidence_percent,
            }
        }
    }

    pub fn confidence_percent(&self) -> f64 {
        match self {
            ClassificationOutcome::Recognized { confidence_percent, .. }
            | ClassificationOutcome::Unrecognized { confidence_percent } => *confidence_percent,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, ClassificationOutcome::Recognized { .. })
    }

    /// 判定された品種。該当なし・範囲外・番号欠落は `None`
    pub fn class(&self) -> Option<PalmClass> {
        match self {
            ClassificationOutcome::Recognized { class_id: Some(id), .. } => PalmClass::from_index(*id),
            _ => None,
        }
    }
}
