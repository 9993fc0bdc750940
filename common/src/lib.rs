//! Calorie Counter Common Library
//!
//! 入出力を持たない型と計算ロジック（CLI・保存層で共有）

pub mod date;
pub mod error;
pub mod form;
pub mod nutrition;
pub mod types;

pub use date::{display_date, parse_date};
pub use error::{Error, FormField, Result};
pub use form::{DishForm, DishSubmission};
pub use nutrition::{scale, totals, Macros};
pub use types::{names_match, DayLog, DishTemplate, MealEntry};
