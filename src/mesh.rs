//! Evenly spaced coordinates, coordinate grids and the closed-form
//! functions evaluated on them.
//!
//! Everything here is pure: no Python, no display.  The plotting side
//! of the crate only ever consumes the arrays produced below.
//!
//! # Example
//!
//! ```
//! use mplot::mesh::{self, Mesh};
//! let x = mesh::arange(-1., 1., 0.5)?;
//! let y = mesh::arange(-2., 2., 1.)?;
//! let m = Mesh::new(&x, &y);
//! assert_eq!(m.shape(), (5, 5));
//! let z = m.map(mesh::radial_sine);
//! assert_eq!(z[[2, 2]], 0.);
//! # Ok::<(), mplot::Error>(())
//! ```

use ndarray::{Array, Array1, Array2, ArrayBase, Data, Dimension, Ix1, Zip};
use crate::Error;

/// Relative widening of `(stop - start) / step` before flooring, so
/// that a `stop` hit up to rounding still belongs to the range.
const SLACK: f64 = 1e-10;

/// Largest number of `f64` an allocation may hold.
const MAX_LEN: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Return `start`, `start + step`, `start + 2 step`,... up to and
/// including `stop` (up to floating point rounding).
///
/// The length is `floor((stop - start) / step) + 1`.  If `step` points
/// away from `stop`, the result is empty.  Return an error if `step`
/// is zero, if an argument is not finite, if the range cannot be
/// allocated, or if `step` is so small compared to the values that two
/// consecutive elements round to the same float (e.g. a step of 1
/// around 1e16): the result is always strictly monotonic.
///
/// ```
/// let x = mplot::mesh::arange(0., 2., 0.02)?;
/// assert_eq!(x.len(), 101);
/// # Ok::<(), mplot::Error>(())
/// ```
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Array1<f64>, Error> {
    if step == 0. {
        return Err(Error::ZeroStep)
    }
    let q = (stop - start) / step;
    if !(start.is_finite() && step.is_finite() && q.is_finite()) {
        return Err(Error::NonFinite)
    }
    if q < 0. {
        return Ok(Array1::zeros(0))
    }
    // Keep the count in f64 until it is known to fit an allocation.
    let count = (q + q * SLACK + SLACK).floor() + 1.;
    if count > MAX_LEN as f64 {
        return Err(Error::TooLong)
    }
    let n = count as usize;
    let mut v = Vec::new();
    v.try_reserve_exact(n).map_err(|_| Error::TooLong)?;
    // Multiply rather than accumulate so the error does not grow.
    v.extend((0 .. n).map(|i| start + i as f64 * step));
    if v.windows(2).any(|w| (w[1] - w[0]) * step <= 0.) {
        return Err(Error::StepTooSmall)
    }
    Ok(Array1::from_vec(v))
}

/// Return `n` evenly spaced values from `start` to `stop`, both
/// included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    Array1::linspace(start, stop, n)
}

/// All `(x, y)` combinations of two coordinate sequences.
///
/// With `x` of length `m` and `y` of length `n`, both arrays have `n`
/// rows and `m` columns and cell `[i, j]` holds `(x[j], y[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
}

impl Mesh {
    pub fn new<Sx, Sy>(x: &ArrayBase<Sx, Ix1>, y: &ArrayBase<Sy, Ix1>) -> Mesh
    where Sx: Data<Elem = f64>,
          Sy: Data<Elem = f64> {
        let shape = (y.len(), x.len());
        Mesh { x: Array2::from_shape_fn(shape, |(_, j)| x[j]),
               y: Array2::from_shape_fn(shape, |(i, _)| y[i]) }
    }

    /// (rows, columns) = (length of `y`, length of `x`).
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// Evaluate `f(x, y)` on every cell of the grid.
    pub fn map<F>(&self, mut f: F) -> Array2<f64>
    where F: FnMut(f64, f64) -> f64 {
        Zip::from(&self.x).and(&self.y).map_collect(|&x, &y| f(x, y))
    }
}

/// Same as [`Mesh::new`] but return the two arrays as a pair, in the
/// manner of `numpy.meshgrid`.
pub fn meshgrid<Sx, Sy>(
    x: &ArrayBase<Sx, Ix1>, y: &ArrayBase<Sy, Ix1>
) -> (Array2<f64>, Array2<f64>)
where Sx: Data<Elem = f64>,
      Sy: Data<Elem = f64> {
    let Mesh { x, y } = Mesh::new(x, y);
    (x, y)
}

/// sin(√(x² + y²))
pub fn radial_sine(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt().sin()
}

/// Difference of two unit Gaussian bumps centred at (0, 0) and (1, 1),
/// scaled by 2.
pub fn gaussian_difference(x: f64, y: f64) -> f64 {
    let z1 = (-x * x - y * y).exp();
    let z2 = (-(x - 1.).powi(2) - (y - 1.).powi(2)).exp();
    2. * (z1 - z2)
}

/// Raise every element of `a` to the power `k`.
pub fn powi<S, D>(a: &ArrayBase<S, D>, k: i32) -> Array<f64, D>
where S: Data<Elem = f64>,
      D: Dimension {
    a.mapv(|v| v.powi(k))
}


#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const EPS: f64 = 1e-12;

    #[test]
    fn arange_includes_stop() -> Result<(), Error> {
        let x = arange(0., 2., 0.02)?;
        assert_eq!(x.len(), 101);
        assert_eq!(x[0], 0.);
        assert!((x[100] - 2.).abs() < EPS, "last = {}", x[100]);
        assert!(x.windows(2).into_iter().all(|w| w[0] < w[1]));
        Ok(())
    }

    #[test]
    fn arange_demo_ranges() -> Result<(), Error> {
        assert_eq!(arange(-5., 5., 0.25)?.len(), 41);
        assert_eq!(arange(-3., 3., 0.025)?.len(), 241);
        assert_eq!(arange(-2., 2., 0.025)?.len(), 161);
        // Half-open style bounds used with numpy still give the same grid.
        assert_eq!(arange(-5., 5.01, 0.25)?.len(), 41);
        assert_eq!(arange(0., 2.01, 0.02)?.len(), 101);
        Ok(())
    }

    #[test]
    fn arange_integral_step() -> Result<(), Error> {
        assert_eq!(arange(-1., 1., 1.)?, array![-1., 0., 1.]);
        assert_eq!(arange(-3., 2.5, 1.)?, array![-3., -2., -1., 0., 1., 2.]);
        Ok(())
    }

    #[test]
    fn arange_descending() -> Result<(), Error> {
        let x = arange(3., -3., -0.5)?;
        assert_eq!(x.len(), 13);
        assert_eq!(x[0], 3.);
        assert_eq!(x[12], -3.);
        assert!(x.windows(2).into_iter().all(|w| w[0] > w[1]));
        Ok(())
    }

    #[test]
    fn arange_wrong_direction_is_empty() -> Result<(), Error> {
        assert!(arange(3., -3., 0.5)?.is_empty());
        assert!(arange(-3., 3., -0.5)?.is_empty());
        Ok(())
    }

    #[test]
    fn arange_single_point() -> Result<(), Error> {
        assert_eq!(arange(1.5, 1.5, 0.1)?, array![1.5]);
        assert_eq!(arange(1.5, 1.5, -0.1)?, array![1.5]);
        Ok(())
    }

    #[test]
    fn arange_rejects_bad_arguments() {
        assert!(matches!(arange(3., -3., 0.), Err(Error::ZeroStep)));
        assert!(matches!(arange(f64::NAN, 1., 0.1), Err(Error::NonFinite)));
        assert!(matches!(arange(0., f64::INFINITY, 0.1),
                         Err(Error::NonFinite)));
        assert!(matches!(arange(0., 1., f64::INFINITY),
                         Err(Error::NonFinite)));
    }

    #[test]
    fn arange_too_long() {
        assert!(matches!(arange(0., 1e20, 1.), Err(Error::TooLong)));
        assert!(matches!(arange(0., f64::MAX, 1e-300), Err(Error::NonFinite)));
        assert!(matches!(arange(1e10, -1e10, -1e-10), Err(Error::TooLong)));
    }

    #[test]
    fn arange_step_below_resolution() {
        assert!(matches!(arange(1e16, 1e16 + 4., 1.),
                         Err(Error::StepTooSmall)));
        assert!(matches!(arange(1e16 + 4., 1e16, -1.),
                         Err(Error::StepTooSmall)));
        // A step of 2 is exactly representable there.
        let x = arange(1e16, 1e16 + 4., 2.).unwrap();
        assert_eq!(x.len(), 3);
    }

    #[test]
    fn linspace_endpoints() {
        let x = linspace(0., 2., 100);
        assert_eq!(x.len(), 100);
        assert_eq!(x[0], 0.);
        assert_eq!(x[99], 2.);
        assert!(linspace(0., 1., 0).is_empty());
        assert_eq!(linspace(4., 9., 1), array![4.]);
    }

    #[test]
    fn mesh_layout() -> Result<(), Error> {
        let x = arange(-1., 1., 1.)?;
        let y = arange(-2., 2., 1.)?;
        let (gx, gy) = meshgrid(&x, &y);
        assert_eq!(gx.dim(), (5, 3));
        assert_eq!(gy.dim(), (5, 3));
        for i in 0 .. y.len() {
            for j in 0 .. x.len() {
                assert_eq!(gx[[i, j]], x[j]);
                assert_eq!(gy[[i, j]], y[i]);
            }
        }
        Ok(())
    }

    #[test]
    fn mesh_map_keeps_shape() {
        let m = Mesh::new(&array![0., 1., 2., 3.], &array![10., 20.]);
        assert_eq!(m.shape(), (2, 4));
        let s = m.map(|x, y| x + y);
        assert_eq!(s, array![[10., 11., 12., 13.], [20., 21., 22., 23.]]);
    }

    #[test]
    fn radial_sine_values() {
        assert_eq!(radial_sine(0., 0.), 0.);
        assert!((radial_sine(3., 4.) - 5f64.sin()).abs() < EPS);
        let x = arange(-5., 5., 0.25).unwrap();
        let z = Mesh::new(&x, &x).map(radial_sine);
        // The origin sits in the middle of the grid.
        assert_eq!(z[[20, 20]], 0.);
        assert!(z.iter().all(|v| (-1. ..= 1.).contains(v)));
    }

    #[test]
    fn gaussian_difference_values() {
        let expected = 2. * (1. - (-2f64).exp());
        assert!((gaussian_difference(0., 0.) - expected).abs() < EPS);
        assert!((gaussian_difference(1., 1.) + expected).abs() < EPS);
        // Antisymmetric about (1/2, 1/2).
        assert!((gaussian_difference(0.5, 0.5)).abs() < EPS);
    }

    #[test]
    fn powers() {
        let x = array![0., 1., 2.];
        assert_eq!(powi(&x, 1), x);
        assert_eq!(powi(&x, 2), array![0., 1., 4.]);
        assert_eq!(powi(&x, 3), array![0., 1., 8.]);
        assert_eq!(powi(&x, 4), array![0., 1., 16.]);
        let g = array![[1., 2.], [3., 4.]];
        assert_eq!(powi(&g, 2), array![[1., 4.], [9., 16.]]);
    }

    #[test]
    fn generation_is_deterministic() -> Result<(), Error> {
        let gen = || -> Result<_, Error> {
            let x = arange(-3., 3., 0.025)?;
            let y = arange(-2., 2., 0.025)?;
            let m = Mesh::new(&x, &y);
            Ok((m.map(gaussian_difference), powi(&x, 3), m))
        };
        let (z0, p0, m0) = gen()?;
        let (z1, p1, m1) = gen()?;
        let same = |a: &[f64], b: &[f64]|
            a.iter().zip(b).all(|(u, v)| u.to_bits() == v.to_bits());
        assert!(same(z0.as_slice().unwrap(), z1.as_slice().unwrap()));
        assert!(same(p0.as_slice().unwrap(), p1.as_slice().unwrap()));
        assert_eq!(m0, m1);
        Ok(())
    }
}
