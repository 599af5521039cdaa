/*
 * @file io.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * Matrix files.  The format is a u32 row count, a u32 column count, then
 * rows*cols f64 values in column-major order, all little-endian.
 */

use crate::dense::matrix::Matrix;
use crate::error::FileError;
use bincode::config::{self,Config};
use bincode::de::{Decode,Decoder};
use bincode::enc::{Encode,Encoder};
use bincode::error::{DecodeError,EncodeError};
use bincode::{decode_from_std_read,encode_into_std_write};
use std::cmp::min;
use std::fs::File;
use std::io::{BufReader,BufWriter,Read,Seek,SeekFrom,Write};
use std::path::Path;

/** Size of the (rows, cols) header, in bytes */
pub const HEADER_BYTES : u64 = 8;

/** Size of one stored value, in bytes */
const VALUE_BYTES : u64 = 8;

/** Don't trust the header's size for preallocation beyond this many values */
const MAX_PREALLOC : usize = 1<<20;

/**
 * The bincode configuration of matrix files: little-endian,
 * and fixed-width integers so that the header is exactly 8 bytes.
 */
pub fn file_config() -> impl Config {
    config::standard().with_little_endian().with_fixed_int_encoding()
}

impl Encode for Matrix {
    fn encode<E:Encoder>(&self, encoder:&mut E) -> Result<(), EncodeError> {
        if self.data.len() != self.rows*self.cols {
            return Err(EncodeError::Other("matrix data doesn't match its shape"));
        }
        let rows = u32::try_from(self.rows).map_err(|_| EncodeError::Other("too many rows"))?;
        let cols = u32::try_from(self.cols).map_err(|_| EncodeError::Other("too many columns"))?;
        rows.encode(encoder)?;
        cols.encode(encoder)?;
        for x in &self.data { x.encode(encoder)?; }
        Ok(())
    }
}

impl Decode for Matrix {
    fn decode<D:Decoder>(decoder:&mut D) -> Result<Self, DecodeError> {
        let rows = u32::decode(decoder)? as usize;
        let cols = u32::decode(decoder)? as usize;
        let len = rows.checked_mul(cols).ok_or(DecodeError::Other("matrix is too large"))?;
        let mut data = Vec::with_capacity(min(len, MAX_PREALLOC));
        for _ in 0..len { data.push(f64::decode(decoder)?); }
        Ok(Matrix { rows, cols, data })
    }
}

/** Write a matrix to any writer.  Returns the number of bytes written. */
pub fn write_matrix<W:Write>(writer:&mut W, m:&Matrix) -> Result<usize, FileError> {
    Ok(encode_into_std_write(m, writer, file_config())?)
}

/** Read a matrix from any reader. */
pub fn read_matrix<R:Read>(reader:&mut R) -> Result<Matrix, FileError> {
    Ok(decode_from_std_read(reader, file_config())?)
}

/** Write the matrix to the given file, replacing it. */
pub fn save<P:AsRef<Path>>(m:&Matrix, path:P) -> Result<(), FileError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let written = write_matrix(&mut writer, m)?;
    writer.flush()?;
    log::debug!("saved {}x{} matrix to {} ({} bytes)", m.rows, m.cols, path.display(), written);
    Ok(())
}

/** Read a matrix from the given file. */
pub fn load<P:AsRef<Path>>(path:P) -> Result<Matrix, FileError> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let m = read_matrix(&mut reader)?;
    log::debug!("loaded {}x{} matrix from {}", m.rows, m.cols, path.display());
    Ok(m)
}

/**
 * Read one (zero-based) column of a matrix file, without reading the
 * rest of the values.
 */
pub fn load_column<P:AsRef<Path>>(path:P, column:usize) -> Result<Vec<f64>, FileError> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let (rows, cols) : (u32, u32) = decode_from_std_read(&mut reader, file_config())?;
    let (rows, cols) = (rows as usize, cols as usize);
    if column >= cols {
        return Err(FileError::ColumnOutOfRange { column, cols });
    }

    let offset = HEADER_BYTES + (column as u64) * (rows as u64) * VALUE_BYTES;
    reader.seek(SeekFrom::Start(offset))?;
    let mut data = Vec::with_capacity(min(rows, MAX_PREALLOC));
    for _ in 0..rows {
        data.push(decode_from_std_read::<f64,_,_>(&mut reader, file_config())?);
    }
    log::debug!("loaded column {} of {}x{} matrix from {}", column, rows, cols, path.display());
    Ok(data)
}
