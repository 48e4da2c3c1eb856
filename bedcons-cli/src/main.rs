mod summarize;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "bedcons";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Summarize a bigWig signal (e.g. conservation scores) over the regions of a BED6 file.")
        .subcommand_required(true)
        .subcommand(summarize::cli::create_summarize_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SUMMARIZE
        //
        Some((summarize::cli::SUMMARIZE_CMD, matches)) => {
            summarize::handlers::run_summarize(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
