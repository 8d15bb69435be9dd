//! Offline inspection of the versioned vault contract ABI tables.

use clap::Parser;
use vault_abi_cli::{run, Options};

fn main() -> anyhow::Result<()> {
    let opts = Options::parse();
    opts.logging.init();

    let stdout = std::io::stdout();
    run(&opts.command, &mut stdout.lock())
}
