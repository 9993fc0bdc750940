//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use calorie_counter::common::{Error as FormError, FormField};
use calorie_counter::error::CalorieError;

/// CalorieErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CalorieError::Config("テスト設定エラー".to_string()),
        CalorieError::DishNotFound("borscht".to_string()),
        CalorieError::Prompt("端末がありません".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 料理が見つからないときは料理名を含める
#[test]
fn test_dish_not_found_message() {
    let err = CalorieError::DishNotFound("borscht".to_string());
    assert!(format!("{}", err).contains("borscht"));
}

/// 破損エラーはパスと原因を含む
#[test]
fn test_decode_error_message() {
    let source = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err = CalorieError::Decode {
        path: "data/dishes.json".to_string(),
        source,
    };

    let display = format!("{}", err);
    assert!(display.contains("data/dishes.json"));
    assert!(std::error::Error::source(&err).is_some());
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CalorieError = io_err.into();

    assert!(matches!(err, CalorieError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CalorieError = json_err.into();

    assert!(matches!(err, CalorieError::JsonParse(_)));
}

/// 入力エラーは透過的に表示される
#[test]
fn test_form_error_transparent() {
    let form_err = FormError::InvalidNumber {
        field: FormField::Calories,
        value: "abc".to_string(),
    };
    let err: CalorieError = form_err.clone().into();

    assert!(matches!(err, CalorieError::Common(_)));
    assert_eq!(format!("{}", err), format!("{}", form_err));
}
