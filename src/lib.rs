//! Office AI Rust - オフィス写真のオンデバイス分類ツール

pub mod cli;
pub mod classifier;
pub mod config;
pub mod error;
pub mod scanner;
