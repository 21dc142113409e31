use clap::{Parser, Subcommand, ValueEnum};
use matform::controls::Applies;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "matform", bin_name = "matform", version)]
#[command(
    about = "Render Angular Material form-control declarations into wrapper markup",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use global settings instead of the project's .matform/
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line of markup per control
    #[default]
    Markup,
    /// Attribute listing per control
    Attrs,
    /// Rendered controls and messages as JSON
    Json,
}

/// Which controls a key listing is narrowed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KeyScope {
    FormControl,
    TextArea,
    DatePicker,
    Button,
}

impl From<KeyScope> for Applies {
    fn from(scope: KeyScope) -> Self {
        match scope {
            KeyScope::FormControl => Applies::FormControl,
            KeyScope::TextArea => Applies::TextArea,
            KeyScope::DatePicker => Applies::DatePicker,
            KeyScope::Button => Applies::Button,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the controls of a declaration file
    Render {
        /// Path to the JSON declaration
        file: PathBuf,

        /// Only render the Nth control (1-based)
        #[arg(short, long)]
        control: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Markup)]
        output: OutputFormat,
    },

    /// Validate a declaration file without rendering it
    Check {
        /// Path to the JSON declaration
        file: PathBuf,
    },

    /// List the configuration keys a declaration may use
    Keys {
        /// Only keys usable on this kind of control
        #[arg(long = "for", value_enum)]
        for_control: Option<KeyScope>,
    },

    /// Get or set settings
    Config {
        /// Setting key (conflict-policy, attribute-per-line)
        key: Option<String>,
        /// New value
        value: Option<String>,
    },

    /// Create the settings directory with defaults
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["matform", "render", "form.json"]).unwrap();
        match cli.command {
            Commands::Render {
                file,
                control,
                output,
            } => {
                assert_eq!(file, PathBuf::from("form.json"));
                assert_eq!(control, None);
                assert_eq!(output, OutputFormat::Markup);
            }
            other => panic!("Expected Render, got {other:?}"),
        }
        assert!(!cli.global);
    }

    #[test]
    fn test_render_options() {
        let cli = Cli::try_parse_from([
            "matform", "render", "form.json", "-c", "2", "--output", "json", "--global",
        ])
        .unwrap();
        assert!(cli.global);
        assert!(matches!(
            cli.command,
            Commands::Render {
                control: Some(2),
                output: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_keys_filter() {
        let cli = Cli::try_parse_from(["matform", "keys", "--for", "date-picker"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Keys {
                for_control: Some(KeyScope::DatePicker)
            }
        ));
    }

    #[test]
    fn test_config_args() {
        let cli =
            Cli::try_parse_from(["matform", "-v", "config", "conflict-policy", "reject"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Config { key, value } => {
                assert_eq!(key.as_deref(), Some("conflict-policy"));
                assert_eq!(value.as_deref(), Some("reject"));
            }
            other => panic!("Expected Config, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["matform"]).is_err());
    }
}
