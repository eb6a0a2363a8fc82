//! CLI argument parsing for scryforge.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Scryforge: fill Scrypto blueprint templates, score the result, and walk
/// through a mocked build/test pipeline.
///
/// Generated code is never compiled or deployed; the build output shown is a
/// fixed success transcript. When an API credential is available the code can
/// come from an external model instead of the template, silently falling back
/// to the template on any failure.
#[derive(Parser, Debug)]
#[command(name = "scryforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for scryforge.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one blueprint and print the result.
    ///
    /// Fills the chosen template with the given parameters, optionally
    /// substitutes external-model output, scores the code, and prints the
    /// mock build transcript.
    Generate(GenerateArgs),

    /// Start an interactive generation session.
    ///
    /// Accumulates an in-memory history of generations until you quit;
    /// the history is discarded with the session.
    Session(SessionArgs),

    /// List the available templates.
    ///
    /// Shows each template identifier with its intent and placeholders.
    Templates,

    /// Report environment and configuration readiness.
    ///
    /// Read-only: checks the config file, the API credential, and the
    /// template table. Never changes anything.
    Doctor,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Template identifier (e.g. hello_world, token_faucet, nft, dex).
    pub template: String,

    /// Placeholder values as KEY=VALUE pairs (repeatable).
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Complexity label recorded with the result.
    #[arg(long, default_value = "simple")]
    pub complexity: String,

    /// Skip the external generation call and use the template directly.
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the `session` command.
#[derive(Parser, Debug)]
pub struct SessionArgs {
    /// Skip the external generation call for every generation in the session.
    #[arg(long)]
    pub offline: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_minimal() {
        let cli = Cli::try_parse_from(["scryforge", "generate", "hello_world"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.template, "hello_world");
            assert!(args.params.is_empty());
            assert_eq!(args.complexity, "simple");
            assert!(!args.offline);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "scryforge",
            "generate",
            "token_faucet",
            "-p",
            "faucet_name=MyFaucet",
            "--param",
            "token_symbol=MYF",
            "--complexity",
            "advanced",
            "--offline",
        ])
        .unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.template, "token_faucet");
            assert_eq!(args.params, vec!["faucet_name=MyFaucet", "token_symbol=MYF"]);
            assert_eq!(args.complexity, "advanced");
            assert!(args.offline);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_requires_template() {
        assert!(Cli::try_parse_from(["scryforge", "generate"]).is_err());
    }

    #[test]
    fn parse_session() {
        let cli = Cli::try_parse_from(["scryforge", "session"]).unwrap();
        if let Command::Session(args) = cli.command {
            assert!(!args.offline);
        } else {
            panic!("Expected Session command");
        }
    }

    #[test]
    fn parse_session_offline() {
        let cli = Cli::try_parse_from(["scryforge", "session", "--offline"]).unwrap();
        if let Command::Session(args) = cli.command {
            assert!(args.offline);
        } else {
            panic!("Expected Session command");
        }
    }

    #[test]
    fn parse_templates() {
        let cli = Cli::try_parse_from(["scryforge", "templates"]).unwrap();
        assert!(matches!(cli.command, Command::Templates));
    }

    #[test]
    fn parse_doctor() {
        let cli = Cli::try_parse_from(["scryforge", "doctor"]).unwrap();
        assert!(matches!(cli.command, Command::Doctor));
    }
}
