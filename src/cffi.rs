/*
 * @file cffi.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * C foreign function interface.
 * All matrices are column-major arrays of doubles, owned by the caller.
 */

use crate::{invert_with_options,mmult,Error,InvertOptions};
use core::slice::{from_raw_parts,from_raw_parts_mut};
use std::os::raw::c_int;

/** Status: success */
pub const GOBLAPACK_OK : c_int = 0;

/** Status: invalid argument (bad dimension, null pointer or bad tolerance) */
pub const GOBLAPACK_INVALID_ARGUMENT : c_int = -1;

/** Convert an inversion result to a LAPACK-style status code */
fn status(result: Result<(), Error>) -> c_int {
    match result {
        Ok(()) => GOBLAPACK_OK,
        Err(Error::Singular { column }) => c_int::try_from(column+1).unwrap_or(c_int::MAX),
        Err(Error::InvalidArgument) => GOBLAPACK_INVALID_ARGUMENT,
    }
}

unsafe fn invert_raw(n: c_int, a: *mut f64, options: &InvertOptions) -> c_int {
    if n <= 0 || a.is_null() { return GOBLAPACK_INVALID_ARGUMENT; }
    let n = n as usize;
    let size = match n.checked_mul(n) {
        Some(size) => size,
        None => return GOBLAPACK_INVALID_ARGUMENT
    };
    status(invert_with_options(n, from_raw_parts_mut(a,size), options))
}

#[no_mangle]
/// Invert the n*n matrix `a` in place.
/// Return 0 on success, j+1 if no usable pivot was found in column j,
/// or -1 on invalid input.  On failure, the contents of `a` are unspecified.
pub unsafe extern fn goblapack_invert(n: c_int, a: *mut f64) -> c_int {
    invert_raw(n, a, &InvertOptions::default())
}

#[no_mangle]
/// Like goblapack_invert, but with an explicit singularity tolerance,
/// relative to the infinity-norm of `a`.
pub unsafe extern fn goblapack_invert_with_tolerance(n: c_int, a: *mut f64, relative_tolerance: f64) -> c_int {
    invert_raw(n, a, &InvertOptions::with_tolerance(relative_tolerance))
}

#[no_mangle]
/// Compute c = a*b, where `a` is rows_a*k, `b` is k*cols_b and `c` is rows_a*cols_b.
/// The output is overwritten.  Does nothing if a dimension is negative, or if a
/// pointer it would need is null.
pub unsafe extern fn goblapack_mmult(
    rows_a: c_int, cols_b: c_int, k: c_int,
    a: *const f64, b: *const f64, c: *mut f64
) {
    if rows_a < 0 || cols_b < 0 || k < 0 { return; }
    let (rows_a, cols_b, k) = (rows_a as usize, cols_b as usize, k as usize);
    let out_len = rows_a * cols_b;
    if out_len == 0 { return; }
    if c.is_null() { return; }
    if k > 0 && (a.is_null() || b.is_null()) { return; }

    let (a, b) = if k == 0 {
        (&[][..], &[][..])
    } else {
        (from_raw_parts(a, rows_a*k), from_raw_parts(b, k*cols_b))
    };
    mmult(rows_a, cols_b, k, a, b, from_raw_parts_mut(c, out_len));
}

#[cfg(test)]
mod tests {
    use crate::cffi::{goblapack_invert,goblapack_invert_with_tolerance,goblapack_mmult};
    use core::ptr::{null,null_mut};

    #[test]
    fn test_invert_status() {
        let mut a = [4.0, 2.0, 7.0, 6.0];
        assert_eq!(unsafe { goblapack_invert(2, a.as_mut_ptr()) }, 0);
        let expected = [0.6, -0.2, -0.7, 0.4];
        for (e,x) in expected.iter().zip(&a) { assert!((e-x).abs() < 1e-9); }

        /* singular in the second column */
        let mut a = [0.0, 1.0, 0.0, 1.0];
        assert_eq!(unsafe { goblapack_invert(2, a.as_mut_ptr()) }, 2);

        assert_eq!(unsafe { goblapack_invert(0, a.as_mut_ptr()) }, -1);
        assert_eq!(unsafe { goblapack_invert(-3, a.as_mut_ptr()) }, -1);
        assert_eq!(unsafe { goblapack_invert(2, null_mut()) }, -1);
        assert_eq!(unsafe { goblapack_invert_with_tolerance(2, a.as_mut_ptr(), -1.0) }, -1);

        let mut a = [1.0, 2.0, 2.0, 4.0 + 1e-15];
        assert_eq!(unsafe { goblapack_invert_with_tolerance(2, a.as_mut_ptr(), 0.0) }, 0);
    }

    #[test]
    fn test_mmult() {
        let a = [1.0, 3.0, 2.0, 4.0];
        let b = [5.0, 7.0, 6.0, 8.0];
        let mut c = [0.0; 4];
        unsafe { goblapack_mmult(2, 2, 2, a.as_ptr(), b.as_ptr(), c.as_mut_ptr()); }
        assert_eq!(c, [19.0, 43.0, 22.0, 50.0]);

        /* zero-sized and k=0 calls */
        unsafe { goblapack_mmult(0, 2, 2, null(), null(), null_mut()); }
        let mut c = [5.0; 4];
        unsafe { goblapack_mmult(2, 2, 0, null(), null(), c.as_mut_ptr()); }
        assert_eq!(c, [0.0; 4]);

        /* invalid: left alone */
        let mut c = [5.0; 4];
        unsafe { goblapack_mmult(2, 2, -1, a.as_ptr(), b.as_ptr(), c.as_mut_ptr()); }
        unsafe { goblapack_mmult(2, 2, 2, null(), b.as_ptr(), c.as_mut_ptr()); }
        assert_eq!(c, [5.0; 4]);
    }
}
