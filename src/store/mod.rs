//! データファイルの読み書き
//!
//! 料理カタログ（`dishes.json`）と食事記録（`daily_calories.json`）を
//! それぞれJSON配列として保存する。毎回ファイル全体を読み込み、
//! 変更後に全体を書き戻す（単一ユーザー・単一プロセス前提、後勝ち）。

mod catalog;
mod document;
mod meal_log;

pub use catalog::{DishCatalog, Upsert};
pub use meal_log::MealLog;

use serde::{Deserialize, Serialize};

/// 壊れたデータファイルを読んだときの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// `CalorieError::Decode` を返す
    #[default]
    Strict,
    /// 警告ログを出して空として扱う（次の保存で既存データは失われる）
    RecoverEmpty,
}

impl std::str::FromStr for DecodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(DecodePolicy::Strict),
            "recover" | "recover-empty" | "recover_empty" => Ok(DecodePolicy::RecoverEmpty),
            _ => Err(format!("Unknown policy: {}. Use strict or recover-empty", s)),
        }
    }
}

impl std::fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodePolicy::Strict => write!(f, "strict"),
            DecodePolicy::RecoverEmpty => write!(f, "recover-empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_policy_from_str() {
        assert_eq!("strict".parse::<DecodePolicy>(), Ok(DecodePolicy::Strict));
        assert_eq!("Recover-Empty".parse::<DecodePolicy>(), Ok(DecodePolicy::RecoverEmpty));
        assert!("ignore".parse::<DecodePolicy>().is_err());
    }

    #[test]
    fn test_decode_policy_display_round_trip() {
        for policy in [DecodePolicy::Strict, DecodePolicy::RecoverEmpty] {
            assert_eq!(policy.to_string().parse::<DecodePolicy>(), Ok(policy));
        }
    }
}
