//! Where a finished figure goes.

use std::path::PathBuf;
use log::info;
use crate::{show, Error, Figure};

/// Destination of a figure.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Output {
    /// Open a window and wait until it is closed.  The figure must
    /// come from [`crate::figure`] or [`crate::subplots`] (i.e. be
    /// managed by pyplot).
    #[default]
    Screen,
    /// Write the figure to `path`, the format being deduced from the
    /// extension.  A `dpi` of `None` keeps Matplotlib's default.
    File { path: PathBuf, dpi: Option<f64> },
}

impl Output {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Output::File { path: path.into(), dpi: None }
    }

    /// Send `fig` to this destination.
    pub fn present(&self, fig: &Figure) -> Result<(), Error> {
        match self {
            Output::Screen => {
                info!("showing figure; close the window to continue");
                show()
            }
            Output::File { path, dpi } => {
                let mut save = fig.save();
                if let Some(dpi) = dpi {
                    save.dpi(*dpi);
                }
                save.to_file(path)?;
                info!("figure written to {}", path.display());
                Ok(())
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use crate::{rendering_enabled, Figure};

    #[test]
    fn default_is_screen() {
        assert_eq!(Output::default(), Output::Screen);
        assert_eq!(Output::file("a.png"),
                   Output::File { path: "a.png".into(), dpi: None });
    }

    #[test]
    fn present_to_file() -> Result<(), Error> {
        if !rendering_enabled()? {
            return Ok(())
        }
        let fig = Figure::new()?;
        let [[mut ax]] = fig.subplots()?;
        ax.xy(&[0., 1., 2., 3.], &[0., 1., 4., 9.]).fmt("r").plot()?;
        let path = PathBuf::from("target/output_present.png");
        let _ = std::fs::remove_file(&path);
        Output::File { path: path.clone(), dpi: Some(50.) }.present(&fig)?;
        assert!(path.exists());
        Ok(())
    }
}
