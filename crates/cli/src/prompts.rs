use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal, Write};

/// Ask a yes/no question on stderr. `force` answers yes without asking.
pub fn confirm(message: &str, force: bool) -> Result<bool> {
  if force {
    return Ok(true);
  }

  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    bail!("Cannot prompt for confirmation in non-interactive mode. Use --force to proceed.");
  }

  ask(message, &mut io::stdin().lock(), &mut io::stderr())
}

fn ask(message: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
  write!(output, "{} [y/N] ", message)?;
  output.flush()?;

  let mut answer = String::new();
  input.read_line(&mut answer)?;

  Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  fn answer(text: &str) -> bool {
    let mut out = Vec::new();
    ask("Discard?", &mut Cursor::new(text.as_bytes()), &mut out).unwrap()
  }

  #[test]
  fn accepts_yes_variants() {
    assert!(answer("y\n"));
    assert!(answer("YES\n"));
    assert!(answer("  yes  \n"));
  }

  #[test]
  fn everything_else_is_no() {
    assert!(!answer("\n"));
    assert!(!answer("n\n"));
    assert!(!answer("yep\n"));
    assert!(!answer(""));
  }

  #[test]
  fn prompt_shows_default() {
    let mut out = Vec::new();
    ask("Discard?", &mut Cursor::new(b"n\n".as_slice()), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Discard? [y/N] ");
  }

  #[test]
  fn force_skips_prompt() {
    assert!(confirm("Discard?", true).unwrap());
  }
}
