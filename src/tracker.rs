//! 料理追加・日別表示の処理
//!
//! 画面（CLI）から呼ばれる操作をまとめる。対象日は常に引数で渡す。

use crate::config::Config;
use crate::error::Result;
use crate::store::{DecodePolicy, DishCatalog, MealLog, Upsert};
use calorie_counter_common::{DayLog, DishForm, DishTemplate, MealEntry};
use chrono::NaiveDate;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Tracker {
    catalog: DishCatalog,
    log: MealLog,
}

impl Tracker {
    pub fn open(data_dir: &Path, policy: DecodePolicy) -> Self {
        Self {
            catalog: DishCatalog::new(data_dir, policy),
            log: MealLog::new(data_dir, policy),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::open(&config.data_dir, config.decode_policy)
    }

    pub fn catalog(&self) -> &DishCatalog {
        &self.catalog
    }

    pub fn meal_log(&self) -> &MealLog {
        &self.log
    }

    /// フォーム内容を検証し、料理をカタログへ保存して `date` の食事に追加する
    ///
    /// 検証に失敗した場合はどちらのファイルにも書き込まない。
    pub fn add_dish(&self, date: NaiveDate, form: &DishForm) -> Result<MealEntry> {
        let submission = form.validate()?;

        // カタログだけ更新されるのを防ぐため、先に記録が読めることを確認
        self.log.load_all()?;

        let outcome = self.catalog.upsert(submission.template.clone())?;
        let entry = submission.meal_entry(date);
        self.log.append(entry.clone())?;

        tracing::info!(
            date = %date,
            dish = %entry.name,
            grams = submission.grams,
            replaced = outcome == Upsert::Replaced,
            "食事を記録しました"
        );
        Ok(entry)
    }

    pub fn day(&self, date: NaiveDate) -> Result<DayLog> {
        self.log.day(date)
    }

    pub fn find_dish(&self, name: &str) -> Result<Option<DishTemplate>> {
        self.catalog.find_by_name(name.trim())
    }

    pub fn dishes(&self) -> Result<Vec<DishTemplate>> {
        self.catalog.load_all()
    }
}
