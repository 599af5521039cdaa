use criterion::{criterion_group, criterion_main, Criterion};
use goblapack::{Matrix,mmult,invert};

fn criterion_benchmark(crit: &mut Criterion) {
    let sizes = vec![10usize,100,300];
    for size in sizes {
        let mut a = Matrix::zeros(size,size);
        let mut b = Matrix::zeros(size,size);
        a.randomize();
        b.randomize();
        for i in 0..size { a[(i,i)] += size as f64; }
        let mut c = Matrix::zeros(size,size);

        crit.bench_function(&format!("matrix mmult {}",size), |crit| crit.iter(|| {
            mmult(size, size, size, &a.data, &b.data, &mut c.data)
        }));

        crit.bench_function(&format!("matrix invert {}",size), |crit| crit.iter(|| {
            c.data.copy_from_slice(&a.data);
            invert(size, &mut c.data).unwrap();
        }));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
