//! 料理追加フォームの入力検証
//!
//! テキストのまま受け取った6項目を検証し、保存できる形に変換する。
//! 1項目でも数値として読めなければ送信全体を拒否する。

use crate::error::{Error, FormField, Result};
use crate::nutrition::Macros;
use crate::types::{DishTemplate, MealEntry};
use chrono::NaiveDate;

/// 料理追加フォーム（未検証の入力値）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishForm {
    pub name: String,
    pub calories: String,
    pub proteins: String,
    pub fats: String,
    pub carbohydrates: String,
    pub grams: String,
}

/// 検証済みの送信内容
#[derive(Debug, Clone, PartialEq)]
pub struct DishSubmission {
    /// カタログに保存するテンプレート（100gあたり）
    pub template: DishTemplate,
    /// 食べた量（g）
    pub grams: f64,
}

impl DishForm {
    /// 保存済み料理の値で埋めたフォーム（量は空のまま）
    pub fn prefilled(dish: &DishTemplate) -> Self {
        Self {
            name: dish.name.clone(),
            calories: dish.per_100g.calories.to_string(),
            proteins: dish.per_100g.proteins.to_string(),
            fats: dish.per_100g.fats.to_string(),
            carbohydrates: dish.per_100g.carbohydrates.to_string(),
            grams: String::new(),
        }
    }

    /// 項目を空に戻す（再入力用）
    pub fn clear(&mut self, field: FormField) {
        let target = match field {
            FormField::Name => &mut self.name,
            FormField::Calories => &mut self.calories,
            FormField::Proteins => &mut self.proteins,
            FormField::Fats => &mut self.fats,
            FormField::Carbohydrates => &mut self.carbohydrates,
            FormField::Grams => &mut self.grams,
        };
        target.clear();
    }

    pub fn validate(&self) -> Result<DishSubmission> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.calories.trim().is_empty() {
            return Err(Error::MissingCalories);
        }

        let per_100g = Macros {
            calories: parse_number(FormField::Calories, &self.calories)?,
            proteins: parse_number(FormField::Proteins, &self.proteins)?,
            fats: parse_number(FormField::Fats, &self.fats)?,
            carbohydrates: parse_number(FormField::Carbohydrates, &self.carbohydrates)?,
        };
        let grams = parse_number(FormField::Grams, &self.grams)?;

        // 換算後に無限大になると JSON に書けない
        if !is_finite(&per_100g.scaled(grams)) {
            return Err(Error::ServingOutOfRange { grams });
        }

        Ok(DishSubmission {
            template: DishTemplate::new(name, per_100g),
            grams,
        })
    }
}

impl DishSubmission {
    /// 一食分に換算した食事記録を作る
    pub fn meal_entry(&self, date: NaiveDate) -> MealEntry {
        MealEntry::new(
            date,
            self.template.name.clone(),
            self.template.per_100g.scaled(self.grams),
        )
    }
}

fn is_finite(m: &Macros) -> bool {
    [m.calories, m.proteins, m.fats, m.carbohydrates]
        .iter()
        .all(|v| v.is_finite())
}

fn parse_number(field: FormField, raw: &str) -> Result<f64> {
    let invalid = || Error::InvalidNumber {
        field,
        value: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}
