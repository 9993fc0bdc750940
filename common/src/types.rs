//! 保存データの型定義
//!
//! - DishTemplate: `dishes.json` の1要素（100gあたり）
//! - MealEntry: `daily_calories.json` の1要素（食べた分に換算済み）
//! - DayLog: ある日の記録と合計

use crate::nutrition::{self, Macros};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 料理テンプレート（100gあたりの栄養素）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishTemplate {
    /// 料理名（大文字小文字を区別せずに一意）
    pub name: String,

    #[serde(flatten)]
    pub per_100g: Macros,
}

impl DishTemplate {
    pub fn new(name: impl Into<String>, per_100g: Macros) -> Self {
        Self {
            name: name.into(),
            per_100g,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// 食事記録（一食分に換算済み）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    #[serde(with = "crate::date::iso_or_legacy")]
    pub date: NaiveDate,

    pub name: String,

    #[serde(flatten)]
    pub serving: Macros,
}

impl MealEntry {
    pub fn new(date: NaiveDate, name: impl Into<String>, serving: Macros) -> Self {
        Self {
            date,
            name: name.into(),
            serving,
        }
    }
}

/// ある日の食事一覧と合計
#[derive(Debug, Clone, PartialEq)]
pub struct DayLog {
    pub date: NaiveDate,
    pub entries: Vec<MealEntry>,
    pub totals: Macros,
}

impl DayLog {
    /// 記録全体から `date` の分だけを抜き出す
    pub fn from_entries(date: NaiveDate, all: impl IntoIterator<Item = MealEntry>) -> Self {
        let entries: Vec<MealEntry> = all.into_iter().filter(|e| e.date == date).collect();
        let totals = nutrition::totals(entries.iter().map(|e| &e.serving));
        Self {
            date,
            entries,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 料理名の比較（大文字小文字を無視）
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_names_match() {
        assert!(names_match("Oatmeal", "oatmeal"));
        assert!(names_match("ГРЕЧКА", "гречка"));
        assert!(!names_match("Oatmeal", "Oatmeal "));
    }

    #[test]
    fn test_dish_template_json_shape() {
        let dish = DishTemplate::new("Rice", Macros::new(130.0, 2.7, 0.3, 28.0));
        let json = serde_json::to_value(&dish).expect("シリアライズ失敗");

        assert_eq!(json["name"], "Rice");
        assert_eq!(json["calories"], 130.0);
        assert_eq!(json["proteins"], 2.7);
        assert_eq!(json["fats"], 0.3);
        assert_eq!(json["carbohydrates"], 28.0);
    }

    #[test]
    fn test_meal_entry_writes_iso_date() {
        let entry = MealEntry::new(ymd(2024, 1, 1), "Rice", Macros::new(1.0, 2.0, 3.0, 4.0));
        let json = serde_json::to_string(&entry).expect("シリアライズ失敗");
        assert!(json.contains("\"date\":\"2024-01-01\""));
        assert!(json.contains("\"name\":\"Rice\""));
    }

    #[test]
    fn test_meal_entry_reads_legacy_date() {
        let json = r#"{
            "date": "Mon Jan 01 2024",
            "name": "Soup",
            "calories": 40,
            "proteins": 2.5,
            "fats": 1,
            "carbohydrates": 6
        }"#;
        let entry: MealEntry = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entry.date, ymd(2024, 1, 1));
        assert_eq!(entry.serving.calories, 40.0);
    }

    #[test]
    fn test_meal_entry_rejects_bad_date() {
        let json = r#"{"date":"someday","name":"x","calories":1,"proteins":1,"fats":1,"carbohydrates":1}"#;
        assert!(serde_json::from_str::<MealEntry>(json).is_err());
    }

    #[test]
    fn test_day_log_scopes_totals_to_date() {
        let all = vec![
            MealEntry::new(ymd(2024, 1, 1), "a", Macros::new(100.0, 1.0, 1.0, 1.0)),
            MealEntry::new(ymd(2024, 1, 1), "b", Macros::new(50.0, 2.0, 2.0, 2.0)),
            MealEntry::new(ymd(2024, 1, 2), "c", Macros::new(999.0, 9.0, 9.0, 9.0)),
        ];
        let day = DayLog::from_entries(ymd(2024, 1, 1), all);
        assert_eq!(day.entries.len(), 2);
        assert_eq!(day.totals, Macros::new(150.0, 3.0, 3.0, 3.0));
    }
}
