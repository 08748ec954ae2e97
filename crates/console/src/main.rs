use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use gildedrose_console::{Cli, run};

fn main() -> Result<()> {
    gildedrose_observability::init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    out.flush()?;

    if cli.pause {
        eprintln!("press Enter to exit");
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }
    Ok(())
}
