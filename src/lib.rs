//! Portfolio CLI
//!
//! プロジェクトフィルタエンジンをコマンドラインから使うためのモジュール群

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
