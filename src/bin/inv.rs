use std::env;
use std::time::Instant;

use anyhow::{Context, Result};
use lup::Matrix;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let n = match args.next() {
        Some(s) => s
            .parse::<usize>()
            .with_context(|| format!("invalid matrix size: {}", s))?,
        None => {
            println!("Enter matrix size n as argument");
            return Ok(());
        }
    };
    let threads = match args.next() {
        Some(s) => Some(
            s.parse::<usize>()
                .with_context(|| format!("invalid thread count: {}", s))?,
        ),
        None => None,
    };

    let clock = Instant::now();

    let mut a = Matrix::<f32>::tridiagonal(n)?;

    let _ai = run(threads, move || -> lup::Result<Matrix<f32>> {
        #[cfg(feature = "rayon")]
        let ai = lup::par_invert(&mut a);
        #[cfg(not(feature = "rayon"))]
        let ai = lup::invert(&mut a);
        ai
    })??;

    let secs = clock.elapsed().as_secs_f64();

    println!("s {}: {:.6} seconds", n, secs);

    Ok(())
}

#[cfg(feature = "rayon")]
fn run<R: Send>(threads: Option<usize>, f: impl FnOnce() -> R + Send) -> Result<R> {
    match threads {
        Some(num_threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()?;
            Ok(pool.install(f))
        }
        None => Ok(f()),
    }
}

#[cfg(not(feature = "rayon"))]
fn run<R>(threads: Option<usize>, f: impl FnOnce() -> R) -> Result<R> {
    if threads.is_some() {
        eprintln!("built without rayon, ignoring thread count");
    }
    Ok(f())
}
