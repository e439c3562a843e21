use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use tracing::level_filters::LevelFilter;

use crate::{leak, parsed_or, required};

lazy_static! {
  pub static ref STDOUT_LOG_SEVERITY: LevelFilter =
    parsed_or("STDOUT_LOG_SEVERITY", LevelFilter::WARN);
  pub static ref LOG_DIRECTORY: PathBuf =
    parsed_or("LOG_DIRECTORY", PathBuf::from("/var/log/tiktok_informer"));

  pub static ref BOT_TOKEN: &'static str = leak(required::<String>("BOT_TOKEN"));

  pub static ref DB_HOST: &'static str = leak(required::<String>("DB_HOST"));
  pub static ref DB_PORT: u16 = parsed_or("DB_PORT", 5432);
  pub static ref DB_USER: &'static str = leak(required::<String>("DB_USER"));
  pub static ref DB_PASS: &'static str = leak(required::<String>("DB_PASS"));
  pub static ref DB_NAME: &'static str = leak(required::<String>("DB_NAME"));
  pub static ref DB_CONN_POOL_MAX: u32 = parsed_or("DB_CONN_POOL_MAX", 100);
  pub static ref DATABASE_URL: &'static str = leak(format!(
    "postgres://{}:{}@{}:{}/{}",
    *DB_USER, *DB_PASS, *DB_HOST, *DB_PORT, *DB_NAME
  ));

  pub static ref POLL_INTERVAL_SECONDS: u64 = parsed_or("POLL_INTERVAL_SECONDS", 300);
  pub static ref BATCH_COUNT: usize = parsed_or("BATCH_COUNT", 5);
}

#[cfg(debug_assertions)]
lazy_static! {
  pub static ref WORKSPACE_DIR: &'static Path = {
    let output = std::process::Command::new(env!("CARGO"))
      .arg("locate-project")
      .arg("--workspace")
      .arg("--message-format=plain")
      .output()
      .unwrap()
      .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output).unwrap().trim());
    Box::leak(Box::from(cargo_path.parent().unwrap()))
  };
}

#[cfg(not(debug_assertions))]
lazy_static! {
  pub static ref WORKSPACE_DIR: &'static Path = Path::new(".");
}
