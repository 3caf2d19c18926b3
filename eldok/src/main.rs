//! Export a compiled proof library snapshot as one JSON document.

use clap::Parser;
use medio::Environment;
use std::fmt::{self, Display};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Clone, Debug, Parser)]
pub struct Opt {
    /// Output file (standard output if omitted)
    output: Option<PathBuf>,
}

#[derive(Debug)]
enum Error {
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => e.fmt(f),
            Self::Json(e) => e.fmt(f),
        }
    }
}

/// Read a library snapshot from standard input and export it.
fn run(opt: &Opt) -> Result<(), Error> {
    let mut snapshot = String::new();
    io::stdin().read_to_string(&mut snapshot)?;
    let env: Environment = serde_json::from_str(&snapshot)?;
    log::info!("loaded snapshot with {} declarations", env.decls().count());

    let out = serde_json::to_string(&eltiri::export(&env))?;
    match &opt.output {
        Some(path) => std::fs::write(path, out)?,
        None => io::stdout().write_all(out.as_bytes())?,
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();
    if let Err(e) = run(&opt) {
        eprintln!("export failed: {}", e);
        std::process::exit(1)
    }
}
