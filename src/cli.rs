use crate::store::DecodePolicy;
use calorie_counter_common::{parse_date, DishForm};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calorie-counter")]
#[command(about = "日々の食事とカロリーを記録するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データディレクトリ（設定ファイルより優先）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// 壊れたデータファイルを空として扱う
    #[arg(long, global = true)]
    pub recover_corrupt: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 料理を保存して食事に追加
    Add {
        /// 対象日 (YYYY-MM-DD、省略時は今日)
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// 料理名
        #[arg(short, long)]
        name: Option<String>,

        /// 100gあたりのカロリー
        #[arg(short, long)]
        calories: Option<String>,

        /// 100gあたりのたんぱく質
        #[arg(short, long)]
        proteins: Option<String>,

        /// 100gあたりの脂質
        #[arg(short, long)]
        fats: Option<String>,

        /// 100gあたりの炭水化物
        #[arg(long)]
        carbohydrates: Option<String>,

        /// 食べた量 (g)
        #[arg(short, long)]
        grams: Option<String>,

        /// 対話入力を行わない（不足項目はエラー）
        #[arg(long)]
        no_input: bool,
    },

    /// 指定日の食事と合計を表示
    Show {
        /// 対象日 (YYYY-MM-DD、省略時は今日)
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// 保存済みの料理を検索
    Find {
        /// 料理名（大文字小文字は区別しない）
        #[arg(required = true)]
        name: String,

        /// 指定すると、この量を食事に追加する (g)
        #[arg(short, long)]
        grams: Option<String>,

        /// 追加先の日付 (YYYY-MM-DD、省略時は今日)
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// 保存済みの料理一覧
    Dishes,

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// データディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 壊れたデータファイルの扱い (strict/recover-empty)
        #[arg(long)]
        set_decode_policy: Option<DecodePolicy>,
    },
}

/// `add` の引数からフォームを組み立てる
pub fn form_from_args(
    name: Option<String>,
    calories: Option<String>,
    proteins: Option<String>,
    fats: Option<String>,
    carbohydrates: Option<String>,
    grams: Option<String>,
) -> DishForm {
    DishForm {
        name: name.unwrap_or_default(),
        calories: calories.unwrap_or_default(),
        proteins: proteins.unwrap_or_default(),
        fats: fats.unwrap_or_default(),
        carbohydrates: carbohydrates.unwrap_or_default(),
        grams: grams.unwrap_or_default(),
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("Invalid date: {}. Use YYYY-MM-DD", s))
}
