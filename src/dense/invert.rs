/*
 * @file invert.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * In-place inversion of a square column-major matrix by Gauss-Jordan
 * elimination with partial pivoting.
 */

use crate::error::Error;

/**
 * Options for inversion.
 *
 * Use `InvertOptions::default()` unless you need to tune the
 * singularity test.
 */
#[derive(Copy,Clone,PartialEq,Debug)]
pub struct InvertOptions {
    /**
     * Singularity threshold, relative to the scale of the matrix.
     *
     * A pivot is accepted only if its magnitude is strictly greater than
     * `relative_tolerance * max_row_sum`, where `max_row_sum` is the infinity-norm
     * of the input.  Zero pivots are therefore always rejected, and so are NaNs.
     *
     * If `None`, use `n * f64::EPSILON` for an `n x n` matrix.
     *
     * Default: `None`.
     */
    pub relative_tolerance : Option<f64>,
}

impl Default for InvertOptions {
    fn default() -> Self {
        InvertOptions { relative_tolerance: None }
    }
}

impl InvertOptions {
    /** Options with a fixed relative tolerance. */
    pub fn with_tolerance(relative_tolerance:f64) -> Self {
        InvertOptions { relative_tolerance: Some(relative_tolerance) }
    }

    fn tolerance_for(&self, n:usize) -> f64 {
        self.relative_tolerance.unwrap_or(n as f64 * f64::EPSILON)
    }
}

/** Infinity-norm (maximum absolute row sum) of an n x n column-major matrix */
fn norm_inf(n:usize, a:&[f64]) -> f64 {
    let mut row_sums = vec![0.0f64; n];
    for col in a.chunks_exact(n) {
        for (sum,x) in row_sums.iter_mut().zip(col) {
            *sum += x.abs();
        }
    }
    row_sums.into_iter().fold(0.0, f64::max)
}

/** Swap rows r1 and r2 across every column */
#[inline(always)]
fn swap_rows(n:usize, a:&mut [f64], r1:usize, r2:usize) {
    for col in a.chunks_exact_mut(n) {
        col.swap(r1,r2);
    }
}

/** Swap columns c1 < c2 */
fn swap_cols(n:usize, a:&mut [f64], c1:usize, c2:usize) {
    debug_assert!(c1 < c2);
    let (lo,hi) = a.split_at_mut(c2*n);
    lo[c1*n .. (c1+1)*n].swap_with_slice(&mut hi[..n]);
}

/**
 * Invert the `n x n` column-major matrix `a` in place, with default options.
 *
 * On success `a` holds its own inverse.  On failure the contents of `a` are
 * unspecified.
 */
pub fn invert(n:usize, a:&mut [f64]) -> Result<(), Error> {
    invert_with_options(n, a, &InvertOptions::default())
}

/**
 * Invert the `n x n` column-major matrix `a` in place.
 *
 * This is Gauss-Jordan elimination without an explicit augmented matrix.
 * When column `j` is eliminated it is no longer needed, so the storage is reused
 * for column `j` of the would-be identity side.  Rows are only ever swapped,
 * never columns, so the result is the inverse of the row-permuted matrix `P*A`;
 * undoing the swaps on the columns, last first, turns it into the inverse of `A`.
 *
 * Returns `Error::InvalidArgument` if `n == 0`, `a` is shorter than `n*n` or the
 * tolerance is negative or NaN, and `Error::Singular` if some pivot is too small.
 */
pub fn invert_with_options(n:usize, a:&mut [f64], options:&InvertOptions) -> Result<(), Error> {
    let size = n.checked_mul(n).ok_or(Error::InvalidArgument)?;
    if n == 0 || a.len() < size { return Err(Error::InvalidArgument); }
    let tolerance = options.tolerance_for(n);
    if !(tolerance >= 0.0) { return Err(Error::InvalidArgument); }

    let a = &mut a[..size];
    let threshold = tolerance * norm_inf(n,a);
    let mut swaps : Vec<usize> = Vec::with_capacity(n);
    let mut factors = vec![0.0f64; n];

    for j in 0..n {
        /* Partial pivoting: largest magnitude in column j, rows j.. */
        let mut pivot_row = j;
        let mut pivot_mag = a[j + n*j].abs();
        for row in j+1..n {
            let mag = a[row + n*j].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }
        if !(pivot_mag > threshold) {
            return Err(Error::Singular { column: j });
        }
        swaps.push(pivot_row);
        if pivot_row != j { swap_rows(n, a, j, pivot_row); }

        /* Normalize the pivot row.  Column j becomes the identity-side column. */
        let pivot_inv = 1.0 / a[j + n*j];
        a[j + n*j] = 1.0;
        for col in a.chunks_exact_mut(n) {
            col[j] *= pivot_inv;
        }

        /* Eliminate column j from every other row */
        factors.copy_from_slice(&a[n*j .. n*(j+1)]);
        for (c,col) in a.chunks_exact_mut(n).enumerate() {
            let pivot_val = col[j];
            if pivot_val == 0.0 && c != j { continue; }
            for (row,x) in col.iter_mut().enumerate() {
                if row == j { continue; }
                if c == j {
                    /* this was column j: replace the eliminated entry */
                    *x = -factors[row] * pivot_val;
                } else {
                    *x -= factors[row] * pivot_val;
                }
            }
        }
    }

    /* Undo the row swaps */
    for (j,&p) in swaps.iter().enumerate().rev() {
        if p != j { swap_cols(n, a, j, p); }
    }
    Ok(())
}
