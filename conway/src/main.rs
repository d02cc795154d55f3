// main.rs - Reads a board, runs it for the requested steps, prints the result

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use log::info;

use conway::{CliArgs, Result};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main(CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: CliArgs) -> Result<()> {
    let symbols = args.symbols()?;

    let text = match &args.input {
        Some(path) => {
            info!("reading {}", path.display());
            conway::decode(fs::read(path)?)
        }
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            conway::decode(buf)
        }
    };

    let rendered = conway::simulate(&text, &symbols)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
