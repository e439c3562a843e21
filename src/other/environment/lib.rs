use std::str::FromStr;

mod environment;
pub use environment::*;

/// Leaks an owned string so it can live behind a `&'static str` reference
/// for the remainder of the process.
fn leak(s: String) -> &'static str {
  Box::leak(s.into_boxed_str())
}

/// Reads and parses an environment variable, treating empty values as unset.
fn parsed_opt<T: FromStr>(name: &'static str) -> Option<T> {
  std::env::var(name)
    .ok()
    .filter(|s| !s.is_empty())?
    .parse::<T>()
    .ok()
}

/// Reads and parses an environment variable, falling back to a default.
fn parsed_or<T: FromStr>(name: &'static str, default: T) -> T {
  parsed_opt(name).unwrap_or(default)
}

/// Reads a variable the process cannot run without.
///
/// # Panics
/// When the environment variable is missing, empty, or fails to parse.
fn required<T: FromStr>(name: &'static str) -> T {
  parsed_opt(name)
    .unwrap_or_else(|| panic!("Couldn't find or parse env variable {name} for given type"))
}
