//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, plan lines, and Unicode symbols.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};
use provisioner_lib::plan::PlanAction;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ADD: &str = "+";
  pub const MODIFY: &str = "~";
  pub const REMOVE: &str = "-";
  pub const REQUIRED: &str = "*";
}

/// Version suffix for a provision, e.g. ` (29.7.0)`.
pub fn version_suffix(version: Option<&str>) -> String {
  match version {
    Some(v) => format!(" ({})", v),
    None => String::new(),
  }
}

pub fn plan_symbol(action: &PlanAction) -> &'static str {
  match action {
    PlanAction::Add { .. } => symbols::ADD,
    PlanAction::Remove { .. } => symbols::REMOVE,
    PlanAction::Update { .. } => symbols::MODIFY,
  }
}

pub fn print_plan_line(action: &PlanAction) {
  let symbol = plan_symbol(action);
  let line = action.describe();
  match action {
    PlanAction::Add { .. } => println!(
      "  {} {}",
      symbol.if_supports_color(Stream::Stdout, |s| s.green()),
      line
    ),
    PlanAction::Remove { .. } => println!(
      "  {} {}",
      symbol.if_supports_color(Stream::Stdout, |s| s.red()),
      line
    ),
    PlanAction::Update { .. } => println!(
      "  {} {}",
      symbol.if_supports_color(Stream::Stdout, |s| s.yellow()),
      line
    ),
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
