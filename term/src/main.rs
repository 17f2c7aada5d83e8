use anyhow::Context;
use clap::Parser;
use sweeper_core::{CellCount, Coord, Field};

mod board;
mod command;
mod console;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows, at most 26
    #[arg(short, long, default_value_t = 10)]
    rows: Coord,

    /// Number of columns
    #[arg(short, long, default_value_t = 10)]
    columns: Coord,

    /// Number of mines
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    tracing_subscriber::fmt()
        .with_max_level(verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let mut field = Field::new(args.rows, args.columns, args.mines, seed)
        .context("Invalid field configuration")?;

    let stdin = std::io::stdin();
    let ending = console::play(&mut field, stdin.lock(), std::io::stdout().lock())?;
    log::debug!("Session ended: {:?}", ending);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn defaults_to_classic_field() {
        let args = Args::try_parse_from(["sweeper"]).unwrap();

        assert_eq!((args.rows, args.columns, args.mines), (10, 10, 10));
        assert_eq!(args.seed, None);
        assert_eq!(args.verbose.tracing_level_filter(), LevelFilter::ERROR);
    }

    #[test]
    fn verbosity_flags_pick_log_level() {
        let args = Args::try_parse_from(["sweeper", "-vvv", "--seed", "7"]).unwrap();

        assert_eq!(args.verbose.tracing_level_filter(), LevelFilter::DEBUG);
        assert_eq!(args.seed, Some(7));

        let args = Args::try_parse_from(["sweeper", "-q"]).unwrap();

        assert_eq!(args.verbose.tracing_level_filter(), LevelFilter::OFF);
    }
}
