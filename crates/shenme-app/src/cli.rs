use std::path::PathBuf;

use clap::Parser;
use shenme_config::{Config, OutputFormat};

/// Look up the Chinese definitions of a word on Wiktionary
#[derive(Debug, Parser)]
#[command(name = "shenme", version)]
pub struct Cli {
    /// Word to look up, in simplified or traditional characters
    pub word: String,

    /// Render definitions as an HTML ordered list
    #[arg(long, conflicts_with = "json")]
    pub html: bool,

    /// Print definitions as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Log diagnostic messages to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Wiktionary host to query
    #[arg(long)]
    pub host: Option<String>,
}

impl Cli {
    /// Command-line flags take precedence over every other source
    pub fn apply(&self, config: &mut Config) {
        if self.html {
            config.output.format = OutputFormat::Html;
        } else if self.json {
            config.output.format = OutputFormat::Json;
        }

        if self.verbose {
            config.logging.verbose = true;
        }

        if let Some(host) = &self.host {
            config.wiktionary.host = host.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_word_required() {
        assert!(Cli::try_parse_from(["shenme"]).is_err());
    }

    #[test]
    fn test_single_word_only() {
        assert!(Cli::try_parse_from(["shenme", "中国", "汉语"]).is_err());
    }

    #[test]
    fn test_html_and_json_conflict() {
        assert!(Cli::try_parse_from(["shenme", "--html", "--json", "中国"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["shenme", "-v", "--html", "--host", "zh.wiktionary.org", "书"])
            .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(cli.word, "书");
        assert_eq!(config.output.format, OutputFormat::Html);
        assert!(config.logging.verbose);
        assert_eq!(config.wiktionary.host, "zh.wiktionary.org");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["shenme", "书"]).unwrap();
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        cli.apply(&mut config);

        assert_eq!(config, {
            let mut expected = Config::default();
            expected.output.format = OutputFormat::Json;
            expected
        });
    }
}
