mod cli;
mod subtitle;
mod utils;

use anyhow::Result;

fn main() -> Result<()> {
    cli::run()
}
