pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod render;
pub mod sample;
pub mod scanner;
