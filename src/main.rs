use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use chessmatch_console::{Console, ConsoleConfig};
use chessmatch_rules::Setup;

/// Play a chess match on the terminal.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Starting layout: demo, standard or empty
    #[arg(long, default_value = "demo")]
    setup: Setup,

    /// Hide the captured-pieces panel under the board
    #[arg(long)]
    no_captured: bool,
}

impl From<Cli> for ConsoleConfig {
    fn from(cli: Cli) -> Self {
        ConsoleConfig {
            setup: cli.setup,
            show_captured: !cli.no_captured,
        }
    }
}

fn main() -> Result<()> {
    let config = ConsoleConfig::from(Cli::parse());

    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(setup = %config.setup, "chessmatch starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config)?;
    let status = console.run()?;
    info!(?status, "chessmatch exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use chessmatch_console::ConsoleConfig;
    use chessmatch_rules::Setup;
    use clap::Parser;

    fn config(args: &[&str]) -> ConsoleConfig {
        let argv = std::iter::once("chessmatch").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into()
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.setup, Setup::Demo);
        assert!(config.show_captured);
    }

    #[test]
    fn setup_and_flags() {
        let config = config(&["--setup", "standard", "--no-captured"]);
        assert_eq!(config.setup, Setup::Standard);
        assert!(!config.show_captured);
    }

    #[test]
    fn setup_name_is_case_insensitive() {
        assert_eq!(config(&["--setup", "EMPTY"]).setup, Setup::Empty);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["chessmatch", "--setup"]).is_err());
        assert!(Cli::try_parse_from(["chessmatch", "--setup", "blitz"]).is_err());
        assert!(Cli::try_parse_from(["chessmatch", "--fast"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
