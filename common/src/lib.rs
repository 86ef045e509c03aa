//! Palm Classify Common Library
//!
//! CLIと将来のフロントエンドで共有される型と判定ルール

pub mod error;
pub mod parser;
pub mod prediction;
pub mod species;

pub use error::{Error, Result};
pub use parser::parse_prediction_response;
pub use prediction::{ClassificationOutcome, PredictionResponse, CONFIDENCE_THRESHOLD};
pub use species::{label_for_index, PalmClass, DISPLAY_ORDER};
