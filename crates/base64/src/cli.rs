//! Core logic behind the `b64` command-line tool.
//!
//! - `b64 encode [--url]` — stdin bytes → base64 text
//! - `b64 decode [--url]` — stdin base64 text → raw bytes
//! - `b64 info`           — stdin base64 text → JSON metadata
//! - `b64 check`          — exit status reports validity

use thiserror::Error;

use crate::{decode, encode, get_info, Base64Error};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Base64(#[from] Base64Error),
    #[error("input is not UTF-8 text: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Usage: b64 <encode|decode|info|check> [--url]")]
    MissingCommand,
}

// ── Options ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Encode,
    Decode,
    Info,
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Command,
    pub url_safe: bool,
}

impl CliOptions {
    /// Parses arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut command = None;
        let mut url_safe = false;
        for arg in args {
            match arg.as_ref() {
                "--url" | "-u" => url_safe = true,
                flag if flag.starts_with('-') => {
                    return Err(CliError::UnknownOption(flag.to_string()))
                }
                name if command.is_none() => {
                    command = Some(match name {
                        "encode" => Command::Encode,
                        "decode" => Command::Decode,
                        "info" => Command::Info,
                        "check" => Command::Check,
                        other => return Err(CliError::UnknownCommand(other.to_string())),
                    });
                }
                extra => return Err(CliError::UnknownCommand(extra.to_string())),
            }
        }
        let command = command.ok_or(CliError::MissingCommand)?;
        Ok(Self { command, url_safe })
    }
}

// ── Run ───────────────────────────────────────────────────────────────────

/// Runs a command over the full contents of stdin, returning stdout bytes.
///
/// `check` produces no output; invalid input is reported as an error.
pub fn run(options: &CliOptions, input: &[u8]) -> Result<Vec<u8>, CliError> {
    match options.command {
        Command::Encode => {
            let mut out = encode(input, options.url_safe).into_bytes();
            out.push(b'\n');
            Ok(out)
        }
        Command::Decode => Ok(decode(std::str::from_utf8(input)?, options.url_safe)?),
        Command::Info => {
            let info = get_info(std::str::from_utf8(input)?)?;
            let mut out = serde_json::to_vec_pretty(&info)?;
            out.push(b'\n');
            Ok(out)
        }
        Command::Check => {
            if crate::is_valid_base64(std::str::from_utf8(input)?) {
                Ok(Vec::new())
            } else {
                Err(Base64Error::InvalidInput.into())
            }
        }
    }
}
