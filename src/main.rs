mod config;

use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
  process::ExitCode,
};

use anyhow::{Context, Result};
use chatoy_types::parse_document;
use clap::Parser;

use crate::config::Config;

#[macro_use]
extern crate log;

fn read_source(path: &Path) -> Result<String> {
  if path == Path::new("-") {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)
      .context("Failed to read stdin")?;
    return Ok(text);
  }

  fs::read_to_string(path)
    .with_context(|| format!("Failed to read `{}`", path.display()))
}

fn label(path: &Path) -> String {
  if path == Path::new("-") {
    "<stdin>".to_string()
  } else {
    path.display().to_string()
  }
}

/// Checks one input and writes a line per record. Returns whether every
/// record was valid.
fn check(config: &Config, path: &Path, out: &mut impl Write) -> Result<bool> {
  let source = label(path);

  let text = match read_source(path) {
    Ok(text) => text,
    Err(err) => {
      error!("{err:#}");
      writeln!(out, "{source}: {err:#}")?;
      return Ok(false);
    },
  };

  let results = match parse_document(config.shape, &text) {
    Ok(results) => results,
    Err(err) => {
      warn!("`{source}` is not a JSON document");
      writeln!(out, "{source}: {err}")?;
      return Ok(false);
    },
  };

  let mut valid = true;

  for (index, res) in results.iter().enumerate() {
    match res {
      Ok(record) => {
        writeln!(out, "{source}#{index}: ok")?;
        if config.print {
          writeln!(out, "{}", serde_json::to_string(record)?)?;
        }
      },
      Err(err) => {
        valid = false;
        writeln!(out, "{source}#{index}: {err}")?;
      },
    }
  }

  Ok(valid)
}

fn main() -> Result<ExitCode> {
  env_logger::init();

  let config = Config::parse();

  info!("Checking input against the {} shape", config.shape);

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let mut all_valid = true;

  for path in config.sources() {
    all_valid &= check(&config, &path, &mut out)?;
  }

  out.flush()?;

  if all_valid {
    Ok(ExitCode::SUCCESS)
  } else {
    info!("Invalid input found");
    Ok(ExitCode::FAILURE)
  }
}
