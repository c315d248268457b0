//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// toolsite static site shell CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: toolsite.toml)
    #[arg(short = 'C', long, default_value = "toolsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the site into the output directory
    #[command(visible_alias = "b")]
    Build {
        /// Output directory path (overrides [build] output)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Enable sitemap generation
        #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        sitemap: Option<bool>,
    },

    /// Start the development server
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate the config and the tool catalogs
    #[command(visible_alias = "c")]
    Check {},
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_with_output() {
        let cli = Cli::try_parse_from(["toolsite", "build", "-o", "public"]).unwrap();
        assert!(cli.is_build());
        match cli.command {
            Commands::Build { output, .. } => {
                assert_eq!(output.unwrap(), PathBuf::from("public"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_parse_serve_alias_and_port() {
        let cli = Cli::try_parse_from(["toolsite", "s", "-p", "8080"]).unwrap();
        match cli.command {
            Commands::Serve { port, interface } => {
                assert_eq!(port, Some(8080));
                assert!(interface.is_none());
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["toolsite"]).is_err());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli =
            Cli::try_parse_from(["toolsite", "check", "--verbose", "--color", "never"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }
}
