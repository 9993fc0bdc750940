use calorie_counter::common::DishForm;
use calorie_counter::{cli, config, error, logging, prompt, report, store, tracker};
use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{CalorieError, Result};
use std::process::ExitCode;
use tracker::Tracker;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let stored = Config::load()?;

    // コマンドライン指定は保存せずにこの実行だけ適用する
    let mut effective = stored.clone();
    if let Some(dir) = cli.data_dir {
        effective.data_dir = dir;
    }
    if cli.recover_corrupt {
        effective.decode_policy = store::DecodePolicy::RecoverEmpty;
    }
    let tracker = Tracker::from_config(&effective);

    match cli.command {
        Commands::Add { date, name, calories, proteins, fats, carbohydrates, grams, no_input } => {
            let date = date.unwrap_or_else(today);
            let form = cli::form_from_args(name, calories, proteins, fats, carbohydrates, grams);
            add_dish(&tracker, date, form, !no_input)?;
        }

        Commands::Show { date } => {
            let day = tracker.day(date.unwrap_or_else(today))?;
            println!("{}", report::render_day(&day));
        }

        Commands::Find { name, grams, date } => {
            let dish = tracker
                .find_dish(&name)?
                .ok_or_else(|| CalorieError::DishNotFound(name.trim().to_string()))?;
            println!("{}", report::render_dish(&dish));

            if let Some(grams) = grams {
                let mut form = DishForm::prefilled(&dish);
                form.grams = grams;
                println!();
                add_dish(&tracker, date.unwrap_or_else(today), form, false)?;
            }
        }

        Commands::Dishes => {
            let dishes = tracker.dishes()?;
            if dishes.is_empty() {
                println!("保存済みの料理はありません: {}", tracker.catalog().path().display());
            } else {
                println!("{}", report::render_catalog(&dishes));
                println!("\n{}件", dishes.len());
            }
        }

        Commands::Config { show, set_data_dir, set_decode_policy } => {
            let mut config = stored;
            let changed = set_data_dir.is_some() || set_decode_policy.is_some();

            if let Some(dir) = set_data_dir {
                config.data_dir = dir;
            }
            if let Some(policy) = set_decode_policy {
                config.decode_policy = policy;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  データディレクトリ: {}", config.data_dir.display());
                println!("  破損ファイルの扱い: {}", config.decode_policy);
            }
        }
    }

    Ok(())
}

/// 料理を追加し、追加した一食分と当日の一覧を表示
///
/// 対話モードでは入力エラーの項目を空にして再入力を求める。
fn add_dish(
    tracker: &Tracker,
    date: NaiveDate,
    mut form: DishForm,
    interactive: bool,
) -> Result<()> {
    let mut rejected = Vec::new();
    let entry = loop {
        if interactive {
            form = prompt::complete_form(tracker, form, &rejected)?;
        }

        match tracker.add_dish(date, &form) {
            Ok(entry) => break entry,
            Err(CalorieError::Common(e)) if interactive => {
                println!("⚠ {}", e);
                form.clear(e.field());
                rejected.push(e.field());
            }
            Err(e) => return Err(e),
        }
    };

    println!(
        "✔ {} を追加しました ({})",
        entry.name,
        report::kcal(entry.serving.calories)
    );
    println!();
    println!("{}", report::render_day(&tracker.day(date)?));
    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
