// Shaded contours of the difference of two Gaussian bumps.

use clap::Parser;
use mplot as plt;
use plt::{cli::{self, Cli}, mesh::{self, Mesh}};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging();

    let delta = 0.025;
    let x = mesh::arange(-3., 3., delta)?;
    let y = mesh::arange(-2., 2., delta)?;
    let m = Mesh::new(&x, &y);
    let z = m.map(mesh::gaussian_difference);

    let (fig, [[mut ax]]) = plt::subplots()?;
    let cs = ax.contourf(&m.x, &m.y, &z).plot()?;
    fig.colorbar(&cs).add()?.set_ylabel("Height")?;
    ax.set_xlabel("$x$")?
        .set_ylabel("$y$")?
        .set_title("Shaded contours")?;

    cli.output().present(&fig)?;
    Ok(())
}
