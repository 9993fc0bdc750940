//! 対話式の料理入力
//!
//! コマンドラインで指定されなかった項目だけを尋ねる。保存済みの料理名が
//! 入力された場合は、その値を初期値として表示する。

use crate::error::{CalorieError, Result};
use crate::tracker::Tracker;
use calorie_counter_common::{DishForm, FormField};
use dialoguer::Input;

/// 空の項目を対話式で埋める
///
/// `rejected` は入力エラーで空に戻した項目。保存済みの値では埋めずに必ず尋ねる。
pub fn complete_form(
    tracker: &Tracker,
    mut form: DishForm,
    rejected: &[FormField],
) -> Result<DishForm> {
    if form.name.trim().is_empty() {
        form.name = ask(FormField::Name)?;
    }

    if let Some(saved) = tracker.find_dish(&form.name)? {
        println!("  保存済みの料理: {}", saved.name);
        fill_missing(&mut form, &DishForm::prefilled(&saved), rejected);
    }

    form.calories = ask_if_empty(FormField::Calories, form.calories)?;
    form.proteins = ask_if_empty(FormField::Proteins, form.proteins)?;
    form.fats = ask_if_empty(FormField::Fats, form.fats)?;
    form.carbohydrates = ask_if_empty(FormField::Carbohydrates, form.carbohydrates)?;
    form.grams = ask_if_empty(FormField::Grams, form.grams)?;

    Ok(form)
}

/// `form` の空欄を `saved` の値で埋める（入力済みの項目と `rejected` は残す）
pub fn fill_missing(form: &mut DishForm, saved: &DishForm, rejected: &[FormField]) {
    let pairs = [
        (FormField::Calories, &mut form.calories, &saved.calories),
        (FormField::Proteins, &mut form.proteins, &saved.proteins),
        (FormField::Fats, &mut form.fats, &saved.fats),
        (FormField::Carbohydrates, &mut form.carbohydrates, &saved.carbohydrates),
    ];
    for (field, target, value) in pairs {
        if target.trim().is_empty() && !rejected.contains(&field) {
            *target = value.clone();
        }
    }
}

fn ask_if_empty(field: FormField, current: String) -> Result<String> {
    if current.trim().is_empty() {
        ask(field)
    } else {
        Ok(current)
    }
}

fn ask(field: FormField) -> Result<String> {
    let label = match field {
        FormField::Calories => "calories per 100g".to_string(),
        other => other.to_string(),
    };

    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CalorieError::Prompt(e.to_string()))
}
