//! 日付の変換
//!
//! 保存キーは ISO-8601（`2024-01-01`）。旧デスクトップ版が書き出した
//! 表示形式（`Mon Jan 1 2024`）も読み込めるようにしておき、
//! 次回保存時に ISO 形式へ書き換える。

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// 保存用フォーマット
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// 表示用フォーマット（旧版の保存キーと同じ、日はゼロ埋めなし）
pub const DISPLAY_FORMAT: &str = "%a %b %-d %Y";

/// 旧版の保存キーの読み込み用（`1` / `01` どちらも受け付ける）
const LEGACY_FORMAT: &str = "%a %b %d %Y";

/// 日付文字列を解析（ISO形式 → 旧表示形式の順に試す）
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, LEGACY_FORMAT))
        .ok()
}

/// 表示用の日付文字列
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// serde用: 書き込みはISO、読み込みはISO/旧形式の両方を受け付ける
pub mod iso_or_legacy {
    use super::*;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(ISO_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}
