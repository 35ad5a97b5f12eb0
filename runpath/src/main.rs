//! runpath: cheapest run-constrained path across a digit grid.

use clap::Parser;

use runpath_lib::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let stdout = std::io::stdout();
    runpath_lib::run(&args, &mut stdout.lock())
}
