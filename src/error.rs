/*
 * @file error.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * Failure modes of the numerical kernel and of matrix file i/o.
 */

use thiserror::Error;

/**
 * Why a kernel operation failed.
 *
 * Success is `Ok(())`; these are the only two ways to fail.
 */
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /** No pivot in `column` was large enough to trust, compared to the scale of the matrix. */
    #[error("matrix is singular: no usable pivot in column {column}")]
    Singular {
        /** Elimination column (zero-based) where the pivot search failed */
        column: usize
    },

    /** Dimensions are zero, inconsistent, or don't fit the buffer. */
    #[error("invalid argument")]
    InvalidArgument,
}

/** Why reading or writing a matrix file failed. */
#[derive(Error, Debug)]
pub enum FileError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode matrix: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("failed to decode matrix: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("column {column} is out of range for a matrix with {cols} columns")]
    ColumnOutOfRange { column: usize, cols: usize },
}
