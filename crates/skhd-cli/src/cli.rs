use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// skhdgen: compile shortcut declarations into an skhd configuration.
#[derive(Parser, Debug)]
#[command(name = "skhdgen", version, about)]
pub struct Args {
    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the declarations and write the skhd configuration.
    Compile {
        /// Declarations file path override.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output path (defaults to ~/.skhdrc).
        #[arg(long)]
        output: Option<PathBuf>,

        /// Use the built-in declarations and ignore any file.
        #[arg(long, conflicts_with = "config")]
        builtin: bool,
    },

    /// Compile without writing and print the result.
    Check {
        /// Declarations file path override.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use the built-in declarations and ignore any file.
        #[arg(long, conflicts_with = "config")]
        builtin: bool,
    },

    /// List the documented shortcuts of an skhd configuration.
    List {
        /// skhd configuration to read (defaults to ~/.skhdrc).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the menu-bar symbol and tooltip for a mode icon.
    Menubar {
        /// Icon name: default, shortcut or launcher.
        icon: String,
    },

    /// Write the built-in declarations to a TOML file.
    Init {
        /// Destination (defaults to the platform config directory).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compile_with_paths() {
        let args = Args::try_parse_from([
            "skhdgen",
            "compile",
            "--config",
            "/tmp/shortcuts.toml",
            "--output",
            "/tmp/.skhdrc",
        ])
        .unwrap();
        match args.command {
            Command::Compile {
                config,
                output,
                builtin,
            } => {
                assert_eq!(config, Some(PathBuf::from("/tmp/shortcuts.toml")));
                assert_eq!(output, Some(PathBuf::from("/tmp/.skhdrc")));
                assert!(!builtin);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn builtin_conflicts_with_config() {
        let result = Args::try_parse_from(["skhdgen", "check", "--builtin", "--config", "x.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_level_is_global() {
        let args =
            Args::try_parse_from(["skhdgen", "list", "--json", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(args.command, Command::List { json: true, .. }));
    }

    #[test]
    fn menubar_takes_icon() {
        let args = Args::try_parse_from(["skhdgen", "menubar", "launcher"]).unwrap();
        assert!(matches!(args.command, Command::Menubar { ref icon } if icon == "launcher"));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["skhdgen"]).is_err());
    }
}
