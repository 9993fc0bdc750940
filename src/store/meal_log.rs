//! 食事記録（`daily_calories.json`）
//!
//! 追記のみ。既存の記録を変更・削除する操作は無い。

use super::{document, DecodePolicy};
use crate::error::Result;
use calorie_counter_common::{DayLog, Macros, MealEntry};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MealLog {
    path: PathBuf,
    policy: DecodePolicy,
}

impl MealLog {
    pub const FILE_NAME: &'static str = "daily_calories.json";

    pub fn new(data_dir: &Path, policy: DecodePolicy) -> Self {
        Self {
            path: data_dir.join(Self::FILE_NAME),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_all(&self) -> Result<Vec<MealEntry>> {
        document::read_array(&self.path, self.policy)
    }

    /// 末尾に1件追加してファイル全体を書き戻す
    pub fn append(&self, entry: MealEntry) -> Result<()> {
        let mut entries = self.load_all()?;
        entries.push(entry);
        document::write_array(&self.path, &entries)
    }

    /// 指定日の記録（記録順）
    pub fn entries_for_date(&self, date: NaiveDate) -> Result<Vec<MealEntry>> {
        Ok(self.day(date)?.entries)
    }

    /// 指定日の合計（他の日の記録は含めない）
    pub fn aggregate_totals(&self, date: NaiveDate) -> Result<Macros> {
        Ok(self.day(date)?.totals)
    }

    /// 指定日の記録と合計を1回の読み込みで取得
    pub fn day(&self, date: NaiveDate) -> Result<DayLog> {
        Ok(DayLog::from_entries(date, self.load_all()?))
    }
}
