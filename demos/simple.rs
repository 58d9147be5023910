// Example for the README

use clap::Parser;
use mplot as plt;
use plt::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging();

    let (fig, [[mut ax]]) = plt::subplots()?;
    fig.suptitle("simple")?;
    ax.xy(&[0., 1., 2., 3.], &[0., 1., 4., 9.]).fmt("r").plot()?;

    cli.output().present(&fig)?;
    Ok(())
}
