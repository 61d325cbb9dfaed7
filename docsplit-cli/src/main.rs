mod cmd;
mod config;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

fn make_command() -> Command {
    Command::new("docsplit")
        .about("Split one large Markdown document into linked per-section pages")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(cmd::split::make_subcommand())
        .subcommand(cmd::check::make_subcommand())
}

/// `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)
}

fn dispatch(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("split", args)) => cmd::split::execute(args),
        Some(("check", args)) => cmd::check::execute(args),
        _ => unreachable!("clap enforces a subcommand"),
    }
}

fn main() {
    let matches = make_command().get_matches();

    let result = init_logging(matches.get_flag("verbose")).and_then(|_| dispatch(&matches));
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        make_command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let matches = make_command()
            .try_get_matches_from(["docsplit", "check", "-v", "-i", "GUIDE.md"])
            .unwrap();
        assert!(matches.get_flag("verbose"));

        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "check");
        assert_eq!(args.get_one::<String>("input").map(String::as_str), Some("GUIDE.md"));
    }

    #[test]
    fn test_split_accepts_output_and_manifest() {
        let matches = make_command()
            .try_get_matches_from(["docsplit", "split", "-o", "site", "-m", "pages.yaml"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(args.get_one::<String>("output").map(String::as_str), Some("site"));
        assert_eq!(args.get_one::<String>("manifest").map(String::as_str), Some("pages.yaml"));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(make_command().try_get_matches_from(["docsplit"]).is_err());
    }
}
