//! `/predict` エンドポイントへのアップロード
//!
//! 1回の判定につきマルチパートPOSTを1回だけ送る。リトライ・タイムアウト上書きはしない。

use crate::error::{PalmError, Result};
use crate::sample::ImageSample;
use palm_classify_common::{
    parse_prediction_response, ClassificationOutcome, Error as ClassifyError, PredictionResponse,
    CONFIDENCE_THRESHOLD,
};
use reqwest::multipart::{Form, Part};

const PREDICT_PATH: &str = "/predict";
const FILE_FIELD: &str = "file";
const IMAGE_MIME: &str = "image/jpeg";

#[derive(Debug, Clone)]
pub struct Classifier {
    client: reqwest::Client,
    predict_url: String,
    threshold: f64,
}

impl Classifier {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| PalmError::Config(format!("HTTPクライアント初期化失敗: {}", e)))?;

        Ok(Self {
            client,
            predict_url: format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH),
            threshold: CONFIDENCE_THRESHOLD,
        })
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// サンプル1枚を判定
    ///
    /// ファイル読み込みの失敗はローカルエラー（`Io`）、
    /// 通信・サーバーの失敗は `PalmError::Common` として返る。
    pub async fn classify(&self, sample: &ImageSample) -> Result<ClassificationOutcome> {
        let bytes = sample.read_bytes().await?;
        let response = self.request_prediction(&sample.file_name, bytes).await?;
        let outcome = ClassificationOutcome::evaluate(&response, self.threshold);

        tracing::info!(
            file = %sample.file_name,
            class_id = ?response.class_id,
            prediction = ?response.prediction,
            confidence_percent = outcome.confidence_percent(),
            recognized = outcome.is_recognized(),
            "classification finished"
        );

        Ok(outcome)
    }

    /// 画像バイト列を送信し、レスポンスをパースして返す
    pub async fn request_prediction(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> palm_classify_common::Result<PredictionResponse> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(IMAGE_MIME)
            .map_err(connection_error)?;
        let form = Form::new().part(FILE_FIELD, part);

        tracing::debug!(url = %self.predict_url, file = %file_name, "uploading sample");

        let response = self
            .client
            .post(&self.predict_url)
            .multipart(form)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "prediction request rejected");
            return Err(ClassifyError::Server(status.as_u16()));
        }

        let body = response.bytes().await.map_err(connection_error)?;
        parse_prediction_response(status.as_u16(), &body).inspect_err(|_| {
            tracing::warn!(status = status.as_u16(), bytes = body.len(), "unparseable prediction body");
        })
    }
}

fn connection_error(err: reqwest::Error) -> ClassifyError {
    tracing::warn!("transport failure: {}", err);
    ClassifyError::Connection(err.to_string())
}
