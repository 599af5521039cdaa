/*
 * @file matrix.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * Owned dense matrix, column-major, on top of the slice kernels.
 */

use crate::dense::invert::{invert_with_options,InvertOptions};
use crate::dense::mmult::mmult;
use crate::error::Error;
use std::cmp::min;
use std::ops::{Index,IndexMut};
use rand::{Rng,thread_rng};

/**
 * Dense f64 matrix.
 *
 * Element `(row,col)` is stored at `data[row + rows*col]`.  The length of
 * `data` must always be `rows*cols`.
 */
#[derive(Clone, PartialEq, Debug)]
pub struct Matrix {
    pub rows : usize,
    pub cols : usize,
    pub data : Vec<f64>
}

impl Matrix {
    /** Create a new all-zero matrix. */
    pub fn zeros(rows:usize, cols:usize) -> Matrix {
        Matrix { rows, cols, data: vec![0.0; rows.checked_mul(cols).unwrap()] }
    }

    /** Identity matrix of the given order. */
    pub fn eye(n:usize) -> Matrix {
        let mut eye = Matrix::zeros(n,n);
        for i in 0..n { eye[(i,i)] = 1.0; }
        eye
    }

    /**
     * Build a matrix from a list of rows.  Short rows are padded with zeros,
     * and there is always at least one column.  Mainly for tests.
     */
    pub fn from_rows<R:AsRef<[f64]>>(rows:&[R]) -> Matrix {
        let cols = rows.iter().map(|r| r.as_ref().len()).fold(1, usize::max);
        let mut ret = Matrix::zeros(rows.len(), cols);
        for (i,row) in rows.iter().enumerate() {
            for (j,&x) in row.as_ref().iter().enumerate() {
                ret[(i,j)] = x;
            }
        }
        ret
    }

    /** Wrap an existing column-major buffer.  Fails if the length is wrong. */
    pub fn from_col_major(rows:usize, cols:usize, data:Vec<f64>) -> Result<Matrix, Error> {
        match rows.checked_mul(cols) {
            Some(len) if len == data.len() => Ok(Matrix { rows, cols, data }),
            _ => Err(Error::InvalidArgument)
        }
    }

    #[inline(always)]
    fn offset(&self, row:usize, col:usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row + self.rows*col
    }

    /** Return the value at the given row and column. */
    #[inline(always)]
    pub fn get(&self, row:usize, col:usize) -> f64 { self.data[self.offset(row,col)] }

    /** Set the value at the given row and column. */
    #[inline(always)]
    pub fn set(&mut self, row:usize, col:usize, value:f64) {
        let i = self.offset(row,col);
        self.data[i] = value;
    }

    /** Mutable reference to the value at the given row and column. */
    #[inline(always)]
    pub fn get_mut(&mut self, row:usize, col:usize) -> &mut f64 {
        let i = self.offset(row,col);
        &mut self.data[i]
    }

    pub fn as_slice(&self) -> &[f64] { &self.data }
    pub fn as_mut_slice(&mut self) -> &mut [f64] { &mut self.data }

    pub fn is_square(&self) -> bool { self.rows == self.cols }

    /** Does the length of `data` match `rows*cols`?  The fields are public, so it might not. */
    pub fn is_well_formed(&self) -> bool {
        self.rows.checked_mul(self.cols) == Some(self.data.len())
    }

    /** Fill with uniform values in [-1,1), for testing purposes */
    pub fn randomize(&mut self) {
        let mut rng = thread_rng();
        for x in self.data.iter_mut() { *x = rng.gen_range(-1.0..1.0); }
    }

    /**
     * Invert self in place, with default options.
     * This is the no-copy path; on failure the contents of self are unspecified.
     */
    pub fn invert_in_place(&mut self) -> Result<(), Error> {
        self.invert_in_place_with_options(&InvertOptions::default())
    }

    /** Invert self in place. */
    pub fn invert_in_place_with_options(&mut self, options:&InvertOptions) -> Result<(), Error> {
        if !self.is_square() { return Err(Error::InvalidArgument); }
        invert_with_options(self.rows, &mut self.data, options)
    }

    /** Return the inverse of self, leaving self untouched. */
    pub fn inverse(&self) -> Result<Matrix, Error> {
        let mut ret = self.clone();
        ret.invert_in_place()?;
        Ok(ret)
    }

    /** Return self*b.  The inner dimensions must match. */
    pub fn mul(&self, b:&Matrix) -> Result<Matrix, Error> {
        if self.cols != b.rows || !self.is_well_formed() || !b.is_well_formed() {
            return Err(Error::InvalidArgument);
        }
        let mut ret = Matrix::zeros(self.rows, b.cols);
        mmult(self.rows, b.cols, self.cols, &self.data, &b.data, &mut ret.data);
        Ok(ret)
    }

    /**
     * Return self - b.  The matrix `b` may be smaller than self, in which
     * case it's subtracted from the top-left corner.
     */
    pub fn subtract(&self, b:&Matrix) -> Result<Matrix, Error> {
        if b.rows > self.rows || b.cols > self.cols || !self.is_well_formed() || !b.is_well_formed() {
            return Err(Error::InvalidArgument);
        }
        let mut ret = self.clone();
        for col in 0..b.cols {
            for row in 0..b.rows {
                ret[(row,col)] -= b[(row,col)];
            }
        }
        Ok(ret)
    }

    /**
     * Return a copy of self with column `i` scaled by `s[i]`.  If `s` is
     * short, the remaining columns are copied unchanged.
     */
    pub fn scale_columns(&self, s:&[f64]) -> Matrix {
        let mut ret = self.clone();
        if self.rows == 0 { return ret; }
        for (col,&factor) in ret.data.chunks_exact_mut(self.rows).zip(s) {
            for x in col { *x *= factor; }
        }
        ret
    }

    /**
     * For each row, the sum of its entries scaled by `s` (that is, `self * s`).
     * Only the first `min(cols, s.len())` columns contribute.
     */
    pub fn scaled_column_sums(&self, s:&[f64]) -> Vec<f64> {
        let k = min(self.cols, s.len());
        let mut ret = vec![0.0; self.rows];
        mmult(self.rows, 1, k, &self.data, &s[..k], &mut ret);
        ret
    }
}

impl Index<(usize,usize)> for Matrix {
    type Output = f64;
    fn index(&self, (row,col):(usize,usize)) -> &f64 {
        &self.data[self.offset(row,col)]
    }
}

impl IndexMut<(usize,usize)> for Matrix {
    fn index_mut(&mut self, (row,col):(usize,usize)) -> &mut f64 {
        let i = self.offset(row,col);
        &mut self.data[i]
    }
}
