/// https://matplotlib.org/stable/gallery/mplot3d/surface3d.html

use clap::Parser;
use mplot as plt;
use plt::{cli::{self, Cli}, mesh::{self, Mesh}};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging();

    let (fig, [[mut ax]]) = plt::subplots_3d()?;
    fig.suptitle("3dsurface")?;

    let x = mesh::arange(-5., 5., 0.25)?;
    let y = mesh::arange(-5., 5., 0.25)?;
    let m = Mesh::new(&x, &y);
    let z = m.map(mesh::radial_sine);

    let surf = ax.plot_surface(&m.x, &m.y, &z)
        .cmap("coolwarm").linewidth(0.).antialiased(false).plot()?;
    ax.set_zlim(-1., 1.)?
        .set_zticks(5)?
        .set_zformatter("{x:.01f}")?;
    fig.colorbar(&surf).shrink(0.5).aspect(5.).add()?;

    cli.output().present(&fig)?;
    Ok(())
}
