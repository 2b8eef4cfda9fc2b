pub mod compute;
pub mod numeric;
pub mod pass;
pub mod read_to_end;

use std::io::Write;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pass::Pass;

/// Pull the night-labelled pairs out of `abc.txt` as `date, num, den` rows.
///
/// Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).
#[derive(Parser, Debug)]
#[command(name = "night-pairs", version)]
struct Args {
    /// Label to split lines on. `morning` is the old, normally unused pass.
    #[arg(long, value_enum, default_value_t = Pass::Night)]
    pass: Pass,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the rows, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();
    tracing::debug!(?args, "starting");

    let out = read_to_end::run(Path::new(read_to_end::DEFAULT_INPUT), args.pass)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["night-pairs"]).unwrap();
        assert_eq!(args.pass, Pass::Night);
    }

    #[test]
    fn test_args_morning_pass() {
        let args = Args::try_parse_from(["night-pairs", "--pass", "morning"]).unwrap();
        assert_eq!(args.pass, Pass::Morning);
    }

    #[test]
    fn test_args_reject_positional_input() {
        assert!(Args::try_parse_from(["night-pairs", "log.txt"]).is_err());
    }
}
