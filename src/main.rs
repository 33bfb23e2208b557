use std::env;
use std::io::{self, Write};

use anyhow::Result;
use optable_gen::{Extractor, Source, TableSlice, DEFAULT_URL};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [url-or-file]", args[0]);
        std::process::exit(1);
    }

    let source = match args.get(1) {
        Some(arg) => Source::from_arg(arg),
        None => Source::Url(DEFAULT_URL.to_string()),
    };

    let body = source.load()?;
    let opcodes = Extractor::new(TableSlice::default()).extract(&body)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for opcode in &opcodes {
        writeln!(out, "{}", opcode)?;
    }

    log::info!("Emitted {} table entries", opcodes.len());
    Ok(())
}
