// Same curves as `multiple`, sampled with a fixed step on a smaller
// figure.

use clap::Parser;
use mplot as plt;
use plt::{cli::{self, Cli}, mesh};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging();

    let x = mesh::arange(0., 2., 0.02)?;
    let x_2 = mesh::powi(&x, 2);
    let x_3 = mesh::powi(&x, 3);

    let (fig, [[mut ax]]) = plt::subplots()?;
    fig.set_size_inches(5., 2.7)?;
    ax.xy(&x, &x).label("linear")
        .xy(&x, &x_2).label("quadratic")
        .xy(&x, &x_3).label("cubic")
        .plot()?;
    ax.set_xlabel("x label")?
        .set_ylabel("y label")?
        .set_title("Multiple curves")?
        .legend()?;

    cli.output().present(&fig)?;
    Ok(())
}
