//! Small [Matplotlib][] charting demos written in [Rust][].
//!
//! The crate has two halves:
//!
//! - [`mesh`] generates the data: evenly spaced coordinates, coordinate
//!   grids and the functions evaluated on them.  It is pure Rust and
//!   does not need Python.
//! - The rest is a thin binding to Matplotlib, close to its explicit
//!   "axes" interface while keeping a Rust flavor: [`subplots`] returns
//!   a statically shaped grid of [`Axes`] and plots are built with
//!   chained options before being drawn.
//!
//! Finished figures go to an [`Output`]: on screen or to a file.
//!
//! [Rust]: https://www.rust-lang.org/
//! [Matplotlib]: https://matplotlib.org/

use std::{
    borrow::Borrow,
    fmt::{Display, Formatter},
    mem::swap,
    path::Path,
};
use lazy_static::lazy_static;
use log::debug;
use ndarray::{ArrayBase, Dimension};
use numpy::{PyArray, PyArray1};
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::{IntoPyDict, PyDict},
};

pub mod cli;
pub mod mesh;
pub mod output;

pub use output::Output;

/// Call the method `$m` of the Python object `$obj` (a `Py<_>`) with
/// the positional arguments `$args`, discarding the result.
macro_rules! meth {
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| -> Result<(), Error> {
            $obj.bind(py).call_method1(intern!(py, stringify!($m)), $args)?;
            Ok(())
        })
    };
}

/// Possible errors of the plotting and data generating functions.
#[derive(Debug)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    NoMatplotlib,
    /// The path contains an element that is not a directory or does
    /// not exist.
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    PermissionError,
    /// Other Python errors.
    Python(PyErr),
    /// A range was requested with a zero step.
    ZeroStep,
    /// A range bound or step is infinite or NaN.
    NonFinite,
    /// A range has more elements than can be allocated.
    TooLong,
    /// A range step is below the floating point resolution of its
    /// values, so consecutive elements would not be distinct.
    StepTooSmall,
    /// Matplotlib returned a grid of axes of unexpected shape.
    Layout,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::NoMatplotlib =>
                write!(f, "The matplotlib library has not been found.\n\
Please install it.  See https://matplotlib.org/\n\
If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554"),
            Error::FileNotFoundError =>
                write!(f, "A path contains an element that is not a \
                           directory or does not exist"),
            Error::PermissionError =>
                write!(f, "Permission denied to access or create the \
                           filesystem path"),
            Error::Python(e) =>
                write!(f, "Python error: {}", e),
            Error::ZeroStep =>
                write!(f, "The step of a range must not be zero"),
            Error::NonFinite =>
                write!(f, "The bounds and step of a range must be finite"),
            Error::TooLong =>
                write!(f, "The range has too many elements"),
            Error::StepTooSmall =>
                write!(f, "The step of the range is too small to separate \
                           its elements"),
            Error::Layout =>
                write!(f, "Matplotlib returned axes with an unexpected \
                           layout"),
        }
    }
}

impl std::error::Error for Error {}

impl From<PyErr> for Error {
    fn from(e: PyErr) -> Self {
        Error::Python(e)
    }
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py| {
        debug!("importing Python module {}", $m);
        PyModule::import_bound(py, $m).map(Bound::unbind)
    })
}}

lazy_static! {
    // Import matplotlib modules.
    static ref FIGURE: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.figure")
    };
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
    static ref TICKER: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.ticker")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}

/// Return `true` if Matplotlib can be used from this process.
pub fn is_available() -> bool {
    PYPLOT.is_ok() && FIGURE.is_ok()
}


/// Trait expressing that `Self` can be converted to a `numpy.ndarray`.
///
/// The data is copied: Matplotlib keeps references to the arrays it
/// is given until the figure is drawn, possibly long after the Rust
/// value is gone.
pub trait Data {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny>;
}

impl Data for [f64] {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny> {
        PyArray1::from_slice_bound(py, self).into_any()
    }
}

impl<const N: usize> Data for [f64; N] {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny> {
        self[..].to_numpy(py)
    }
}

impl Data for Vec<f64> {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny> {
        self[..].to_numpy(py)
    }
}

impl<S, D> Data for ArrayBase<S, D>
where S: ndarray::Data<Elem = f64>,
      D: Dimension {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny> {
        PyArray::from_array_bound(py, self).into_any()
    }
}

#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject,
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

/// An artist carrying a color map (filled contours, surfaces,...) to
/// which a [`Colorbar`] can be attached.
#[derive(Debug, Clone)]
pub struct Mappable {
    obj: PyObject,
}

/// A colorbar added to a [`Figure`].
#[derive(Debug, Clone)]
pub struct Colorbar {
    cbar: PyObject,
}

impl Figure {
    /// Return a new `Figure` that is not managed by pyplot.  It will
    /// not be shown by [`show`] but can be saved without any GUI.
    pub fn new() -> Result<Figure, Error> {
        let figure = pymod!(FIGURE)?;
        Python::with_gil(|py| {
            let fig = figure.bind(py).getattr(intern!(py, "Figure"))?
                .call0()?;
            Ok(Self { fig: fig.unbind() })
        })
    }

    /// Add a `R`×`C` grid of subplots to the figure.
    ///
    /// Return an error if Matplotlib is not present on the system.
    pub fn subplots<const R: usize, const C: usize>(
        &self) -> Result<[[Axes; C]; R], Error> {
        self.subplots_projection(None)
    }

    /// Same as [`Figure::subplots`] with each axes using the "3d"
    /// projection.
    pub fn subplots_3d<const R: usize, const C: usize>(
        &self) -> Result<[[Axes; C]; R], Error> {
        self.subplots_projection(Some("3d"))
    }

    fn subplots_projection<const R: usize, const C: usize>(
        &self, projection: Option<&str>) -> Result<[[Axes; C]; R], Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            // Always get a 2D array of axes, whatever `R` and `C` are.
            kwargs.set_item("squeeze", false)?;
            if let Some(p) = projection {
                kwargs.set_item("subplot_kw",
                                [("projection", p)].into_py_dict_bound(py))?;
            }
            let axs = self.fig.bind(py)
                .call_method("subplots", (R, C), Some(&kwargs))?;
            let mut rows = Vec::with_capacity(R);
            for r in 0 .. R {
                let mut row = Vec::with_capacity(C);
                for c in 0 .. C {
                    let ax = axs.get_item((r, c))?.unbind();
                    row.push(Axes { ax });
                }
                rows.push(<[Axes; C]>::try_from(row)
                          .map_err(|_| Error::Layout)?);
            }
            <[[Axes; C]; R]>::try_from(rows).map_err(|_| Error::Layout)
        })
    }

    /// Add a centered title to the figure.
    pub fn suptitle(&self, title: &str) -> Result<&Self, Error> {
        meth!(self.fig, suptitle, (title,))?;
        Ok(self)
    }

    /// Set the figure size in inches.
    pub fn set_size_inches(&self, w: f64, h: f64) -> Result<&Self, Error> {
        meth!(self.fig, set_size_inches, (w, h))?;
        Ok(self)
    }

    /// Prepare a colorbar for `mappable`.  It is created by
    /// [`ColorbarOptions::add`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mplot as plt;
    /// use plt::mesh::{self, Mesh};
    /// let x = mesh::arange(-3., 3., 0.1)?;
    /// let m = Mesh::new(&x, &x);
    /// let z = m.map(mesh::gaussian_difference);
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// let cs = ax.contourf(&m.x, &m.y, &z).plot()?;
    /// fig.colorbar(&cs).add()?.set_ylabel("Height")?;
    /// fig.save().to_file("target/Contourf_colorbar.pdf")?;
    /// # Ok::<(), mplot::Error>(())
    /// ```
    #[must_use]
    pub fn colorbar<'a>(&'a self, mappable: &'a Mappable)
                        -> ColorbarOptions<'a> {
        ColorbarOptions { fig: self, mappable,
                          shrink: None, aspect: None }
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone(), dpi: None }
    }
}

pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
}

impl Savefig {
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    /// Write the figure to `path`.  The format is deduced from the
    /// extension.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        debug!("saving figure to {}", path.display());
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi)?
            }
            self.fig.bind(py).call_method(
                intern!(py, "savefig"), (path,), Some(&kwargs)
            ).map_err(|e| {
                if e.is_instance_of::<PyFileNotFoundError>(py) {
                    Error::FileNotFoundError
                } else if e.is_instance_of::<PyPermissionError>(py) {
                    Error::PermissionError
                } else {
                    Error::Python(e)
                }
            })?;
            Ok(())
        })
    }
}

/// Options of a colorbar, see [`Figure::colorbar`].
#[must_use]
pub struct ColorbarOptions<'a> {
    fig: &'a Figure,
    mappable: &'a Mappable,
    shrink: Option<f64>,
    aspect: Option<f64>,
}

impl<'a> ColorbarOptions<'a> {
    /// Fraction by which to multiply the size of the colorbar.
    pub fn shrink(mut self, s: f64) -> Self {
        self.shrink = Some(s);
        self
    }

    /// Ratio of long to short dimensions.
    pub fn aspect(mut self, a: f64) -> Self {
        self.aspect = Some(a);
        self
    }

    /// Add the colorbar to the figure.
    pub fn add(self) -> Result<Colorbar, Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(s) = self.shrink {
                kwargs.set_item("shrink", s)?;
            }
            if let Some(a) = self.aspect {
                kwargs.set_item("aspect", a)?;
            }
            let cbar = self.fig.fig.bind(py).call_method(
                intern!(py, "colorbar"), (self.mappable.obj.bind(py),),
                Some(&kwargs))?;
            Ok(Colorbar { cbar: cbar.unbind() })
        })
    }
}

impl Colorbar {
    /// Label the long axis of the colorbar (assumed vertical).
    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        Python::with_gil(|py| -> Result<(), Error> {
            self.cbar.bind(py).getattr(intern!(py, "ax"))?
                .call_method1(intern!(py, "set_ylabel"), (label,))?;
            Ok(())
        })?;
        Ok(self)
    }
}


pub fn figure() -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = pyplot.bind(py).getattr(intern!(py, "figure"))?
            .call0()?;
        Ok(Figure { fig: fig.unbind() })
    })
}

pub fn subplots<const R: usize, const C: usize>(
) -> Result<(Figure, [[Axes; C]; R]), Error> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// Same as [`subplots`] with the "3d" projection for all axes.
///
/// # Example
///
/// ```no_run
/// use mplot as plt;
/// use plt::mesh::{self, Mesh};
/// let x = mesh::arange(-5., 5., 0.25)?;
/// let m = Mesh::new(&x, &x);
/// let z = m.map(mesh::radial_sine);
/// let (fig, [[mut ax]]) = plt::subplots_3d()?;
/// ax.plot_surface(&m.x, &m.y, &z).cmap("coolwarm").plot()?;
/// fig.save().to_file("target/Surface.pdf")?;
/// # Ok::<(), mplot::Error>(())
/// ```
pub fn subplots_3d<const R: usize, const C: usize>(
) -> Result<(Figure, [[Axes; C]; R]), Error> {
    let fig = figure()?;
    let ax = fig.subplots_3d()?;
    Ok((fig, ax))
}

/// Display all open figures and block until their windows are closed.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        pyplot.bind(py).call_method0(intern!(py, "show"))?;
        Ok(())
    })
}


impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mplot as plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
    /// fig.save().to_file("target/XY_plot.pdf")?;
    /// # Ok::<(), mplot::Error>(())
    /// ```
    // FIXME: Do we want to check that `x` and `y` have the same
    // dimension?  Better error message?
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        // The chain leading to plot starts with the data (using this
        // function) so that additional data may be added, sharing
        // common options.  We also mutably borrow `self` to reflect that
        // the final `.plot()` will mutate the underlying Python object.
        XY { axes: self,
             options: PlotOptions::new(),
             data: (x, y),
             prev_data: vec![] }
    }

    /// Convenience function to plot X-Y coordinates coming from `xy`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mplot as plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.xy_from(&[(1., 2.), (4., 2.), (2., 3.), (3., 4.)]).plot()?;
    /// ax.xy_from([(1., 0.), (2., 3.), (3., 1.), (4., 3.)]).plot()?;
    /// fig.save().to_file("target/XY_from_plot.pdf")?;
    /// # Ok::<(), mplot::Error>(())
    /// ```
    #[must_use]
    pub fn xy_from<'a, I>(&'a mut self, xy: I) -> XYFrom<'a, I>
    where I: IntoIterator,
          <I as IntoIterator>::Item: Borrow<(f64, f64)> {
        // (f64, f64) chosen for compatibility with `zip`.
        XYFrom { axes: self,
                 options: PlotOptions::new(),
                 data: xy }
    }

    /// Filled contours of `z` over the grid (`x`, `y`).  All three
    /// arrays must have the same shape, as produced by
    /// [`mesh::Mesh`].
    #[must_use]
    pub fn contourf<'a, D>(&'a mut self, x: &'a D, y: &'a D, z: &'a D)
                           -> Contourf<'a, D>
    where D: Data + ?Sized {
        Contourf { axes: self, x, y, z,
                   levels: None, cmap: None }
    }

    /// Surface `z` over the grid (`x`, `y`).  The axes must use the
    /// "3d" projection, see [`subplots_3d`].
    #[must_use]
    pub fn plot_surface<'a, D>(&'a mut self, x: &'a D, y: &'a D, z: &'a D)
                               -> Surface<'a, D>
    where D: Data + ?Sized {
        Surface { axes: self, x, y, z,
                  cmap: None, linewidth: None, antialiased: true }
    }

    /// Put the text `s` at position (`x`, `y`), in data coordinates
    /// unless [`Text::axes_coords`] is requested.
    #[must_use]
    pub fn text<'a>(&'a mut self, x: f64, y: f64, s: &'a str) -> Text<'a> {
        Text { axes: self, x, y, s,
               ha: None, va: None, axes_coords: false }
    }

    pub fn set_title(&mut self, v: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_title, (v,))?;
        Ok(self)
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlabel, (label,))?;
        Ok(self)
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylabel, (label,))?;
        Ok(self)
    }

    pub fn legend(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, legend, ())?;
        Ok(self)
    }

    /// Set the z-axis view limits (3D axes only).
    pub fn set_zlim(&mut self, bottom: f64, top: f64)
                    -> Result<&mut Self, Error> {
        meth!(self.ax, set_zlim, (bottom, top))?;
        Ok(self)
    }

    /// Put `n` evenly spaced major ticks on the z-axis (3D axes only).
    pub fn set_zticks(&mut self, n: usize) -> Result<&mut Self, Error> {
        let ticker = pymod!(TICKER)?;
        Python::with_gil(|py| -> Result<(), Error> {
            let locator = ticker.bind(py)
                .getattr(intern!(py, "LinearLocator"))?.call1((n,))?;
            self.ax.bind(py).getattr(intern!(py, "zaxis"))?
                .call_method1(intern!(py, "set_major_locator"), (locator,))?;
            Ok(())
        })?;
        Ok(self)
    }

    /// Format the z-axis tick labels with the Python format string
    /// `fmt` where the value is named `x`, e.g. "{x:.01f}".
    pub fn set_zformatter(&mut self, fmt: &str) -> Result<&mut Self, Error> {
        Python::with_gil(|py| -> Result<(), Error> {
            self.ax.bind(py).getattr(intern!(py, "zaxis"))?
                .call_method1(intern!(py, "set_major_formatter"), (fmt,))?;
            Ok(())
        })?;
        Ok(self)
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    fmt: &'a str,
    animated: bool,
    antialiased: bool,
    label: &'a str,
    linewidth: Option<f64>,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { fmt: "", animated: false, antialiased: true,
                      label: "", linewidth: None }
    }

    fn kwargs<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let kwargs = PyDict::new_bound(py);
        if self.animated {
            kwargs.set_item("animated", true)?
        }
        kwargs.set_item("antialiased", self.antialiased)?;
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label)?
        }
        if let Some(w) = self.linewidth {
            kwargs.set_item("linewidth", w)?
        }
        Ok(kwargs)
    }

    fn plot_xy<D>(&self, py: Python<'_>, axes: &Axes, x: &D, y: &D)
                  -> Result<(), Error>
    where D: Data + ?Sized {
        let xn = x.to_numpy(py);
        let yn = y.to_numpy(py);
        debug!("plotting a line (label {:?})", self.label);
        axes.ax.bind(py).call_method(intern!(py, "plot"),
                                     (xn, yn, self.fmt),
                                     Some(&self.kwargs(py)?))?;
        Ok(())
    }
}

/// Declare methods to set the options assuming `self.options` exists.
macro_rules! set_plotoptions { () => {
    #[must_use]
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.options.fmt = fmt;
        self
    }

    #[must_use]
    pub fn animated(mut self) -> Self {
        self.options.animated = true;
        self
    }

    #[must_use]
    pub fn antialiased(mut self, b: bool) -> Self {
        self.options.antialiased = b;
        self
    }

    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }

    #[must_use]
    pub fn linewidth(mut self, w: f64) -> Self {
        self.options.linewidth = Some(w);
        self
    }
}}

#[must_use]
pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    // Latest data and its setting.
    options: PlotOptions<'a>,
    data: (&'a D, &'a D),
    // Previous data with their settings.
    prev_data: Vec<(PlotOptions<'a>, (&'a D, &'a D))>,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    /// Plot the data with the options specified in [`XY`].
    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            for (opt, (x, y)) in self.prev_data.iter() {
                opt.plot_xy(py, self.axes, *x, *y)?
            }
            let (x, y) = self.data;
            self.options.plot_xy(py, self.axes, x, y)
        })
    }

    /// Add the dataset (`x`, `y`).  It starts with the options of the
    /// previous dataset.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mplot as plt;
    /// let x = plt::mesh::linspace(0., 2., 100);
    /// let x2 = plt::mesh::powi(&x, 2);
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.xy(&x, &x).label("linear")
    ///     .xy(&x, &x2).label("quadratic").plot()?;
    /// ax.legend()?;
    /// fig.save().to_file("target/XY_xy_plot.pdf")?;
    /// # Ok::<(), mplot::Error>(())
    /// ```
    pub fn xy(mut self, x: &'a D, y: &'a D) -> Self {
        let mut data = (x, y);
        swap(&mut data, &mut self.data);
        self.prev_data.push((self.options.clone(), data));
        self
    }
}

#[must_use]
pub struct XYFrom<'a, I> {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    data: I,
}

impl<'a, I> XYFrom<'a, I>
where I: IntoIterator,
      <I as IntoIterator>::Item: Borrow<(f64, f64)> {
    set_plotoptions!();

    /// Plot the data with the options specified in [`XYFrom`].
    pub fn plot(self) -> Result<(), Error> {
        let data = self.data.into_iter();
        let n = data.size_hint().0;
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        for di in data {
            let &(xi, yi) = di.borrow();
            x.push(xi);
            y.push(yi);
        }
        Python::with_gil(|py| {
            self.options.plot_xy(py, self.axes, &x, &y) })
    }
}

/// Options of a filled contour plot, see [`Axes::contourf`].
#[must_use]
pub struct Contourf<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    x: &'a D,
    y: &'a D,
    z: &'a D,
    levels: Option<usize>,
    cmap: Option<&'a str>,
}

impl<'a, D> Contourf<'a, D>
where D: Data + ?Sized {
    /// Number of contour levels (chosen by Matplotlib by default).
    pub fn levels(mut self, n: usize) -> Self {
        self.levels = Some(n);
        self
    }

    /// Name of the Matplotlib color map, e.g. "viridis".
    pub fn cmap(mut self, name: &'a str) -> Self {
        self.cmap = Some(name);
        self
    }

    pub fn plot(self) -> Result<Mappable, Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(n) = self.levels {
                kwargs.set_item("levels", n)?;
            }
            if let Some(c) = self.cmap {
                kwargs.set_item("cmap", c)?;
            }
            debug!("plotting filled contours");
            let args = (self.x.to_numpy(py), self.y.to_numpy(py),
                        self.z.to_numpy(py));
            let cs = self.axes.ax.bind(py)
                .call_method(intern!(py, "contourf"), args, Some(&kwargs))?;
            Ok(Mappable { obj: cs.unbind() })
        })
    }
}

/// Options of a 3D surface plot, see [`Axes::plot_surface`].
#[must_use]
pub struct Surface<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    x: &'a D,
    y: &'a D,
    z: &'a D,
    cmap: Option<&'a str>,
    linewidth: Option<f64>,
    antialiased: bool,
}

impl<'a, D> Surface<'a, D>
where D: Data + ?Sized {
    /// Name of the Matplotlib color map, e.g. "coolwarm".
    pub fn cmap(mut self, name: &'a str) -> Self {
        self.cmap = Some(name);
        self
    }

    pub fn linewidth(mut self, w: f64) -> Self {
        self.linewidth = Some(w);
        self
    }

    pub fn antialiased(mut self, b: bool) -> Self {
        self.antialiased = b;
        self
    }

    pub fn plot(self) -> Result<Mappable, Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(c) = self.cmap {
                kwargs.set_item("cmap", c)?;
            }
            if let Some(w) = self.linewidth {
                kwargs.set_item("linewidth", w)?;
            }
            kwargs.set_item("antialiased", self.antialiased)?;
            debug!("plotting a surface");
            let args = (self.x.to_numpy(py), self.y.to_numpy(py),
                        self.z.to_numpy(py));
            let surf = self.axes.ax.bind(py).call_method(
                intern!(py, "plot_surface"), args, Some(&kwargs))?;
            Ok(Mappable { obj: surf.unbind() })
        })
    }
}

/// Options of a text annotation, see [`Axes::text`].
#[must_use]
pub struct Text<'a> {
    axes: &'a Axes,
    x: f64,
    y: f64,
    s: &'a str,
    ha: Option<&'a str>,
    va: Option<&'a str>,
    axes_coords: bool,
}

impl<'a> Text<'a> {
    /// Horizontal alignment: "left", "center" or "right".
    pub fn ha(mut self, align: &'a str) -> Self {
        self.ha = Some(align);
        self
    }

    /// Vertical alignment: "top", "center", "bottom" or "baseline".
    pub fn va(mut self, align: &'a str) -> Self {
        self.va = Some(align);
        self
    }

    /// Interpret the position relative to the axes: (0, 0) is the
    /// lower left corner and (1, 1) the upper right one.
    pub fn axes_coords(mut self) -> Self {
        self.axes_coords = true;
        self
    }

    pub fn add(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let ax = self.axes.ax.bind(py);
            let kwargs = PyDict::new_bound(py);
            if let Some(ha) = self.ha {
                kwargs.set_item("ha", ha)?;
            }
            if let Some(va) = self.va {
                kwargs.set_item("va", va)?;
            }
            if self.axes_coords {
                kwargs.set_item("transform",
                                ax.getattr(intern!(py, "transAxes"))?)?;
            }
            ax.call_method(intern!(py, "text"), (self.x, self.y, self.s),
                           Some(&kwargs))?;
            Ok(())
        })
    }
}


#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Whether a rendering test may run.  Without Matplotlib the test is
/// skipped (`Ok(false)`) unless `MPLOT_REQUIRE_MATPLOTLIB` is set, in
/// which case it fails.
#[cfg(test)]
pub(crate) fn rendering_enabled() -> Result<bool, Error> {
    rendering_policy(is_available(),
                     std::env::var_os("MPLOT_REQUIRE_MATPLOTLIB").is_some())
}

#[cfg(test)]
fn rendering_policy(available: bool, required: bool) -> Result<bool, Error> {
    match (available, required) {
        (true, _) => Ok(true),
        (false, true) => Err(Error::NoMatplotlib),
        (false, false) => {
            log::warn!("SKIPPED: matplotlib not available \
                        (set MPLOT_REQUIRE_MATPLOTLIB to fail instead)");
            Ok(false)
        }
    }
}
