// Several curves sharing one axes, with a legend.

use clap::Parser;
use mplot as plt;
use plt::{cli::{self, Cli}, mesh};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging();

    let x = mesh::linspace(0., 2., 100);
    let x_2 = mesh::powi(&x, 2);
    let x_3 = mesh::powi(&x, 3);

    let (fig, [[mut ax]]) = plt::subplots()?;
    fig.set_size_inches(6.4, 4.8)?.suptitle("multiple")?;
    ax.xy(&x, &x).label("linear")
        .xy(&x, &x_2).label("quadratic")
        .xy(&x, &x_3).label("cubic")
        .plot()?;
    ax.set_xlabel("x label")?
        .set_ylabel("y label")?
        .legend()?;

    cli.output().present(&fig)?;
    Ok(())
}
