//! ログ出力の初期化
//!
//! 利用者向けの表示は標準出力、診断ログは tracing で標準エラーへ出す。
//! `RUST_LOG` が設定されていればそれを優先する。

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "calorie_counter=debug"
    } else {
        "calorie_counter=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // テストなどで二重に初期化された場合は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
