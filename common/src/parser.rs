//! `/predict` レスポンスパーサー

use crate::error::{Error, Result};
use crate::prediction::PredictionResponse;

/// 2xxレスポンス本文をパース
///
/// 本文が空、またはJSONとして解釈できない場合は
/// 受信したステータスコードで `Error::Server` を返す。
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンス本文
///
/// # Examples
/// ```
/// use palm_classify_common::parse_prediction_response;
///
/// let body = br#"{"class_id":1,"confidence":0.97,"prediction":"razzez"}"#;
/// let response = parse_prediction_response(200, body).unwrap();
/// assert_eq!(response.class_id, Some(1));
/// ```
pub fn parse_prediction_response(status: u16, body: &[u8]) -> Result<PredictionResponse> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(Error::Server(status));
    }

    serde_json::from_slice::<PredictionResponse>(body).map_err(|_| Error::Server(status))
}
