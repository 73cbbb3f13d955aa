//! Virtual 3x3x3 twisty puzzle simulator.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    env_logger::builder().init();
    color_eyre::install()?;

    cli::exec(args.subcommand)
}
