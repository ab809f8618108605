mod logging;

use std::io::{self, Write};

use anyhow::Context;
use poolgen_core::config::Config;
use poolgen_core::pool::BackendPool;

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let pool = BackendPool::generate(&Config::default());

    // The pool itself is the one thing that goes to stdout.
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "backend_urls = {pool}")
        .context("failed to write the backend pool to stdout")?;

    Ok(())
}
