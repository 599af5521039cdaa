/*!
 * Small dense linear algebra kernel.
 *
 * This crate provides two numerical operations on flat, caller-owned
 * buffers of `f64`:
 *
 * * [`invert`], which replaces a square matrix with its inverse, using
 *   Gauss-Jordan elimination with partial pivoting; and
 * * [`mmult`], which computes a general matrix product `c = a*b` into an
 *   output buffer.
 *
 * It is meant for small-to-medium dense problems where pulling in a full
 * BLAS/LAPACK distribution would be overkill.  Everything is single-threaded
 * and synchronous, and there is no global state, so concurrent calls on
 * disjoint buffers are fine.
 *
 * # Layout
 *
 * **All matrices are column-major.**  Element `(row, col)` of an `r x c`
 * matrix is stored at index `row + r*col`.  Passing a row-major buffer
 * won't fail; it will silently operate on the transpose.  (For [`mmult`]
 * that gives `(a*b)^T = b^T * a^T` in row-major terms, so row-major
 * callers can swap the operands.)
 *
 * # Inversion
 *
 * [`invert`] works in place: on success the buffer holds the inverse, and on
 * failure its contents are unspecified.  [`Matrix::inverse`] is the copying
 * variant.  Failure is reported as an [`Error`]:
 *
 * * [`Error::Singular`] if some pivot is too small to trust.  A pivot is
 *   rejected unless its magnitude exceeds `tolerance * ||A||_inf`; the
 *   default tolerance is `n * f64::EPSILON`, and it can be tuned with
 *   [`InvertOptions`].
 * * [`Error::InvalidArgument`] if the dimensions don't make sense.
 *
 * Inversion uses `O(n)` scratch memory, freed before it returns.
 *
 * # Multiplication
 *
 * [`mmult`] has no failure path.  The output is overwritten.  Each output
 * element is summed in order over the inner dimension, so the result is the
 * same as the textbook triple loop, but the memory access pattern is
 * unit-stride for column-major data.  Zero dimensions are allowed.
 *
 * # Files
 *
 * The [`io`] module reads and writes a simple binary matrix format, using
 * [`bincode`].
 *
 * # C interface
 *
 * With the `cffi` feature (on by default), the library builds as a `cdylib`
 * exporting `goblapack_invert`, `goblapack_invert_with_tolerance` and
 * `goblapack_mmult`.  The build script writes a matching `goblapack.h` into
 * the target directory.
 */

mod error;
mod dense;
pub mod io;

#[cfg(feature = "cffi")]
pub mod cffi;

pub use error::{Error,FileError};
pub use dense::invert::{invert,invert_with_options,InvertOptions};
pub use dense::mmult::mmult;
pub use dense::matrix::Matrix;
