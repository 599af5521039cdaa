/**
 * @file mod.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * Dense double-precision matrices, stored column-major in flat buffers.
 * The two kernels (`invert`, `mmult`) work on raw slices; `Matrix` is an
 * owned convenience wrapper around them.
 */
pub mod invert;
pub mod mmult;
pub mod matrix;
