use clap::Parser;
use seqread_bench::config::{Args, Config};
use seqread_bench::driver;
use seqread_bench::report::Report;
use seqread_common::Result;
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            // --help / --version
            e.exit();
        }
        eprint!("{e}");
        process::exit(1);
    });

    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let samples = driver::measure(&config)?;
    let report = Report::new(samples, config.file_size, config.read_size);
    print!("{report}");
    Ok(())
}
