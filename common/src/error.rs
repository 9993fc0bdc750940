//! エラー型定義

use std::fmt;
use thiserror::Error;

/// 入力フォームの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Calories,
    Proteins,
    Fats,
    Carbohydrates,
    Grams,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "dish name",
            FormField::Calories => "calories",
            FormField::Proteins => "proteins",
            FormField::Fats => "fats",
            FormField::Carbohydrates => "carbohydrates",
            FormField::Grams => "gram",
        };
        f.write_str(label)
    }
}

/// 共通エラー型（入力検証）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("料理名を入力してください")]
    EmptyName,

    #[error("カロリーを入力してください")]
    MissingCalories,

    #[error("{field} に有効な数値を入力してください: {value:?}")]
    InvalidNumber { field: FormField, value: String },

    #[error("量が大きすぎて一食分を計算できません: {grams}g")]
    ServingOutOfRange { grams: f64 },
}

impl Error {
    /// 再入力が必要な項目
    pub fn field(&self) -> FormField {
        match self {
            Error::EmptyName => FormField::Name,
            Error::MissingCalories => FormField::Calories,
            Error::InvalidNumber { field, .. } => *field,
            Error::ServingOutOfRange { .. } => FormField::Grams,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_number() {
        let error = Error::InvalidNumber {
            field: FormField::Calories,
            value: "abc".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("calories"));
        assert!(display.contains("\"abc\""));
    }

    #[test]
    fn test_error_display_empty_name() {
        let display = format!("{}", Error::EmptyName);
        assert_eq!(display, "料理名を入力してください");
    }

    #[test]
    fn test_error_field() {
        assert_eq!(Error::EmptyName.field(), FormField::Name);
        assert_eq!(Error::MissingCalories.field(), FormField::Calories);
        let error = Error::InvalidNumber {
            field: FormField::Fats,
            value: "-".to_string(),
        };
        assert_eq!(error.field(), FormField::Fats);
        assert_eq!(Error::ServingOutOfRange { grams: 1e10 }.field(), FormField::Grams);
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidNumber {
            field: FormField::Grams,
            value: "x".to_string(),
        };
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidNumber"));
        assert!(debug.contains("Grams"));
    }
}
