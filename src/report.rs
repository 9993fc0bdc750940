//! 表示用の整形
//!
//! 数値は小数点以下2桁、カロリーは `kcal`、その他は `g` を付ける。

use calorie_counter_common::{display_date, DayLog, DishTemplate, Macros};

const NAME_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 14;

const HEADERS: [&str; 5] = ["dish name", "calories", "proteins", "fats", "carbohydrates"];

/// 日別の食事一覧（最後に合計行）
pub fn render_day(day: &DayLog) -> String {
    let mut lines = Vec::with_capacity(day.entries.len() + 4);
    lines.push(format!("date: {}", display_date(day.date)));
    lines.push(header_row());
    lines.push(separator());
    for entry in &day.entries {
        lines.push(row(&entry.name, &entry.serving));
    }
    lines.push(separator());
    lines.push(row("Total", &day.totals));
    lines.join("\n")
}

/// 料理テンプレート（100gあたり）
pub fn render_dish(dish: &DishTemplate) -> String {
    let m = &dish.per_100g;
    [
        format!("dish name: {}", dish.name),
        format!("calories per 100g: {}", kcal(m.calories)),
        format!("proteins: {}", grams(m.proteins)),
        format!("fats: {}", grams(m.fats)),
        format!("carbohydrates: {}", grams(m.carbohydrates)),
    ]
    .join("\n")
}

/// 料理カタログ一覧
pub fn render_catalog(dishes: &[DishTemplate]) -> String {
    let mut lines = vec![header_row(), separator()];
    lines.extend(dishes.iter().map(|d| row(&d.name, &d.per_100g)));
    lines.join("\n")
}

pub fn kcal(value: f64) -> String {
    format!("{:.2} kcal", value)
}

pub fn grams(value: f64) -> String {
    format!("{:.2}g", value)
}

fn row(name: &str, m: &Macros) -> String {
    format!(
        "{:<nw$}{:>vw$}{:>vw$}{:>vw$}{:>vw$}",
        name,
        kcal(m.calories),
        grams(m.proteins),
        grams(m.fats),
        grams(m.carbohydrates),
        nw = NAME_WIDTH,
        vw = VALUE_WIDTH,
    )
}

fn header_row() -> String {
    format!(
        "{:<nw$}{:>vw$}{:>vw$}{:>vw$}{:>vw$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        HEADERS[3],
        HEADERS[4],
        nw = NAME_WIDTH,
        vw = VALUE_WIDTH,
    )
}

fn separator() -> String {
    "-".repeat(NAME_WIDTH + VALUE_WIDTH * 4)
}
