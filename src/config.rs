use std::path::PathBuf;

use chatoy_types::Shape;
use clap::{builder::FalseyValueParser, Parser};

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Check JSON documents against the Room and Message shapes", long_about = None)]
pub struct Config {
  /// Shape every record is checked against
  #[arg(long, env = "CHATOY_SHAPE", value_enum, ignore_case = true)]
  pub shape: Shape,

  /// Print the canonical JSON of each valid record
  #[arg(long, env = "CHATOY_PRINT", value_parser = FalseyValueParser::new())]
  pub print: bool,

  /// Files to check, `-` or nothing for stdin
  pub paths: Vec<PathBuf>,
}

impl Config {
  pub fn sources(&self) -> Vec<PathBuf> {
    if self.paths.is_empty() {
      vec![PathBuf::from("-")]
    } else {
      self.paths.clone()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_args() {
    let config = Config::try_parse_from(["chatoy-check", "--shape", "message", "a.json", "b.json"]).unwrap();
    assert_eq!(config.shape, Shape::Message);
    assert!(!config.print);
    assert_eq!(config.sources(), vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
  }

  #[test]
  fn test_defaults_to_stdin() {
    let config = Config::try_parse_from(["chatoy-check", "--shape", "room", "--print"]).unwrap();
    assert!(config.print);
    assert_eq!(config.sources(), vec![PathBuf::from("-")]);
  }

  #[test]
  fn test_shape_ignores_case() {
    let config = Config::try_parse_from(["chatoy-check", "--shape", "Message"]).unwrap();
    assert_eq!(config.shape, Shape::Message);

    let config = Config::try_parse_from(["chatoy-check", "--shape", "ROOM"]).unwrap();
    assert_eq!(config.shape, Shape::Room);
  }

  #[test]
  fn test_unknown_shape() {
    assert!(Config::try_parse_from(["chatoy-check", "--shape", "user"]).is_err());
  }
}
