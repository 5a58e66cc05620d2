use std::io;
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use tracing::debug;

mod error;
mod key;
mod logging;
mod to_hex;
mod to_pem;
mod utils;

use error::Result;
use utils::read_input;

#[derive(Parser)]
#[command(name = "hex2pem", version)]
#[command(about = "Convert key material between PEM and hex", long_about = None)]
#[command(override_usage = "hex2pem -h < infile > outfile\n       hex2pem -p < infile > outfile")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Convert PEM to hex
    #[arg(short = 'h')]
    hex: bool,

    /// Convert hex to PEM
    #[arg(short = 'p')]
    pem: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    ToHex,
    ToPem,
}

impl Cli {
    fn mode(&self) -> Option<Mode> {
        match (self.hex, self.pem) {
            (true, false) => Some(Mode::ToHex),
            (false, true) => Some(Mode::ToPem),
            _ => None,
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, on stdout
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let Some(mode) = cli.mode() else {
        if cli.hex && cli.pem {
            eprintln!("error: specify exactly one of -h or -p");
        }
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    };

    match run(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: Mode) -> Result<()> {
    let input = read_input(io::stdin().lock())?;
    debug!(?mode, input_len = input.len(), "read input");

    let mut stdout = io::stdout().lock();
    match mode {
        Mode::ToHex => to_hex::execute(&input, &mut stdout),
        Mode::ToPem => to_pem::execute(&input, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::{Cli, Mode};

    #[rstest]
    #[case::to_hex(&["hex2pem", "-h"], Some(Mode::ToHex))]
    #[case::to_pem(&["hex2pem", "-p"], Some(Mode::ToPem))]
    #[case::neither(&["hex2pem"], None)]
    #[case::both(&["hex2pem", "-h", "-p"], None)]
    #[case::combined(&["hex2pem", "-hp"], None)]
    fn test_mode(#[case] args: &[&str], #[case] expected: Option<Mode>) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(expected, cli.mode());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["hex2pem", "-x"]).is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
