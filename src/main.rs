// PDFDUMP - print the text of every PDF in a directory to stdout
use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use pdfdump::dump;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory scanned (non-recursively) for matching files
    #[arg(default_value = ".")]
    directory: PathBuf,
    /// File extension to match, without the dot
    #[arg(short, long, default_value = "pdf")]
    pattern: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut stdout = io::stdout();
    dump::dump_directory(&mut stdout, &args.directory, &args.pattern)
}
