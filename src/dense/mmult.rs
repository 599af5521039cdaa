/*
 * @file mmult.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * General matrix product on column-major buffers.
 */

/** c[..] += factor * a[..], elementwise over the shorter of the two */
#[inline(always)]
fn axpy(c: &mut [f64], factor: f64, a: &[f64]) {
    for (ci,ai) in c.iter_mut().zip(a) {
        *ci += factor * *ai;
    }
}

/**
 * Compute `c = a*b`.
 *
 * All three buffers are column-major: `a` is `rows_a x k`, `b` is `k x cols_b`
 * and `c` is `rows_a x cols_b`.  The output is overwritten, not accumulated into.
 *
 * Each column of `c` is built as a sequence of scaled columns of `a`, so every
 * memory access is unit-stride.  For each output element the products are still
 * summed in order `p = 0, 1, ..., k-1`, starting from zero, so the result is the
 * same as the textbook dot-product loop.
 *
 * Any zero dimension is fine.  If `k == 0` the product is all zeros; if
 * `rows_a == 0` or `cols_b == 0` there is nothing to write.
 *
 * Panics if a buffer is shorter than its declared shape.
 */
pub fn mmult(rows_a:usize, cols_b:usize, k:usize, a:&[f64], b:&[f64], c:&mut [f64]) {
    if rows_a == 0 || cols_b == 0 { return; }
    debug_assert!(a.len() >= rows_a*k);
    debug_assert!(b.len() >= k*cols_b);
    debug_assert!(c.len() >= rows_a*cols_b);

    let c = &mut c[..rows_a*cols_b];
    for (j,c_col) in c.chunks_exact_mut(rows_a).enumerate() {
        c_col.fill(0.0);
        let b_col = &b[j*k .. (j+1)*k];
        for (p,&b_pj) in b_col.iter().enumerate() {
            axpy(c_col, b_pj, &a[p*rows_a .. (p+1)*rows_a]);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dense::mmult::mmult;
    use rand::{Rng,thread_rng};

    /** Reference product, one dot product per output element */
    fn naive(rows_a:usize, cols_b:usize, k:usize, a:&[f64], b:&[f64]) -> Vec<f64> {
        let mut c = vec![0.0; rows_a*cols_b];
        for i in 0..rows_a {
            for j in 0..cols_b {
                let mut acc = 0.0;
                for p in 0..k {
                    acc += a[i + rows_a*p] * b[p + k*j];
                }
                c[i + rows_a*j] = acc;
            }
        }
        c
    }

    fn random_vec(len:usize) -> Vec<f64> {
        let mut rng = thread_rng();
        (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
    }

    #[test]
    fn test_mmult_2x2() {
        /* [[1,2],[3,4]] * [[5,6],[7,8]], column-major */
        let a = [1.0, 3.0, 2.0, 4.0];
        let b = [5.0, 7.0, 6.0, 8.0];
        let mut c = [f64::NAN; 4];
        mmult(2,2,2,&a,&b,&mut c);
        assert_eq!(c, [19.0, 43.0, 22.0, 50.0]);
    }

    #[test]
    fn test_mmult_rectangular() {
        /* [[1,2,3],[4,5,6]] * [[1],[0],[-1]] = [[-2],[-2]] */
        let a = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let b = [1.0, 0.0, -1.0];
        let mut c = [0.0; 2];
        mmult(2,1,3,&a,&b,&mut c);
        assert_eq!(c, [-2.0, -2.0]);
    }

    /** Same summation order as the dot-product loop, so results are bit-identical */
    #[test]
    fn test_mmult_matches_naive() {
        let mut rng = thread_rng();
        for _ in 0..50 {
            let rows_a = rng.gen_range(1..20);
            let cols_b = rng.gen_range(1..20);
            let k      = rng.gen_range(1..20);
            let a = random_vec(rows_a*k);
            let b = random_vec(k*cols_b);
            let mut c = random_vec(rows_a*cols_b);
            mmult(rows_a,cols_b,k,&a,&b,&mut c);
            assert_eq!(c, naive(rows_a,cols_b,k,&a,&b));
        }
    }

    #[test]
    fn test_mmult_identity() {
        for n in 1..=12usize {
            let a = random_vec(n*n);
            let mut eye = vec![0.0; n*n];
            for i in 0..n { eye[i + n*i] = 1.0; }
            let mut c = vec![0.0; n*n];
            mmult(n,n,n,&a,&eye,&mut c);
            assert_eq!(c, a);
            mmult(n,n,n,&eye,&a,&mut c);
            assert_eq!(c, a);
        }
    }

    #[test]
    fn test_mmult_zero_dims() {
        /* Nothing to write: empty output buffers are fine */
        let mut empty : [f64; 0] = [];
        mmult(0,3,2,&[],&[1.0;6],&mut empty);
        mmult(3,0,2,&[1.0;6],&[],&mut empty);
        mmult(0,0,0,&[],&[],&mut empty);

        /* Inner dimension zero: empty sum */
        let mut c = [7.0; 6];
        mmult(2,3,0,&[],&[],&mut c);
        assert_eq!(c, [0.0; 6]);

        /* Oversized output: only the declared part is touched */
        let mut c = [7.0; 5];
        mmult(2,2,1,&[1.0,2.0],&[3.0,4.0],&mut c);
        assert_eq!(c, [3.0, 6.0, 4.0, 8.0, 7.0]);
    }
}
