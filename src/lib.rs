//! 最新スクリーンショット選択・リネームツール
//!
//! ディレクトリ直下の画像ファイルを更新時刻の降順で選択し、
//! 日付セグメントを正規化した名前にリネームして出力する。

pub mod cli;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod renamer;
pub mod scanner;
pub mod selector;

pub use cli::Cli;
pub use config::Config;
pub use error::{Result, SslatestError};
pub use scanner::ScreenshotEntry;
