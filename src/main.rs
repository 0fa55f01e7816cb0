use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use ls8::loader::{read_program, Format};
use ls8::Core;
use simple_logger::SimpleLogger;
use std::io::{self, Write};
use std::path::PathBuf;

/// Runs an LS-8 program until it halts
#[derive(Parser, Debug)]
#[command(name = "ls8", version, about)]
struct Args {
    /// Program to load, one binary-string byte per line
    #[arg(value_name = "PROGRAM")]
    program: PathBuf,

    /// Load PROGRAM as a raw byte image instead of .ls8 text
    #[arg(long)]
    raw: bool,

    /// Print machine state to stderr after halt
    #[arg(long)]
    dump: bool,

    /// Increase log output (-v info, -vv debug, -vvv instruction trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init()?;

    let format = if args.raw { Format::Raw } else { Format::Ls8 };
    let program = read_program(&args.program, format)?;
    info!("{}: {} bytes", args.program.display(), program.len());

    let mut core = Core::new();
    core.load(&program)
        .with_context(|| format!("loading {}", args.program.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    core.run(&mut out)?;
    out.flush()?;
    info!("halted after {} cycles", core.cycle_count);

    if args.dump {
        core.dump(&mut io::stderr())?;
    }
    Ok(())
}
