// The first four powers of x, one per panel of a 2×2 grid.

use clap::Parser;
use mplot as plt;
use plt::{cli::{self, Cli}, mesh};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging();

    let x = mesh::arange(0., 2., 0.02)?;
    let x_2 = mesh::powi(&x, 2);
    let x_3 = mesh::powi(&x, 3);
    let x_4 = mesh::powi(&x, 4);

    let (fig, [[mut ax00, mut ax01],
               [mut ax10, mut ax11]]) = plt::subplots()?;
    fig.suptitle("Subplots")?;
    for (ax, y, name) in [(&mut ax00, &x, "$x$"),
                          (&mut ax01, &x_2, "$x^2$"),
                          (&mut ax10, &x_3, "$x^3$"),
                          (&mut ax11, &x_4, "$x^4$")] {
        ax.xy(&x, y).plot()?;
        ax.text(0.05, 0.95, name).ha("left").va("top").axes_coords().add()?;
    }

    ax10.set_xlabel("$x$")?;
    ax11.set_xlabel("$x$")?;
    ax00.set_ylabel("$f(x)$")?;
    ax10.set_ylabel("$f(x)$")?;

    cli.output().present(&fig)?;
    Ok(())
}
