mod analyze;
mod strings;
mod utils;

use analyze::AnalyzeArgs;
use clap::Parser;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    name = "arbor",
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[clap(flatten)]
    utils: UtilsArgs,
    #[clap(flatten)]
    args:  AnalyzeArgs,
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    cli.utils.setup()?;
    cli.args.run(&cli.utils)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_references() {
        let cli = Cli::try_parse_from([
            "arbor",
            "-vv",
            "--reference",
            "WP_1.1",
            "--reference",
            "WP_2.1",
            "--min-length",
            "500",
            "a.gbff",
            "b.gbff",
        ])
        .unwrap();
        assert_eq!(cli.utils.verbose, 2);
        assert!(!cli.utils.progress);
        assert!(format!("{:?}", cli.args).contains("WP_2.1"));
    }
}
