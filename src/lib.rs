//! Calorie Counter
//!
//! 料理カタログと日別の食事記録をJSONファイルで管理する。

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod store;
pub mod tracker;

pub use calorie_counter_common as common;
