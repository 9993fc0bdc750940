use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalorieError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("料理が見つかりません: {0}")]
    DishNotFound(String),

    #[error("データファイルが壊れています: {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] calorie_counter_common::Error),
}

pub type Result<T> = std::result::Result<T, CalorieError>;
