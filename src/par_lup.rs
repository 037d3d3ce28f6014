use std::mem;

use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

use crate::debug::debug;
use crate::error::{Error, Result};
use crate::lup::{check_len, eliminate_row, lup_solve, pivot_row, Lup};
use crate::matrix::{try_vector, Matrix};
use crate::traits::Scalar;

// Below this many elements a row swap is not split across threads.
const SWAP_MIN_LEN: usize = 1024;

/// Parallel [`decompose_lup`](crate::decompose_lup).
///
/// Each pivot column runs three phases: a sequential pivot scan, a
/// parallel row swap and a parallel elimination over the rows below the
/// pivot. Every phase joins before the next starts, since each reads rows
/// the previous one wrote. Produces the same factors as the sequential
/// version: every entry sees the same operations in the same order.
pub fn par_decompose_lup<S: Scalar + Send + Sync>(
    a: &mut Matrix<S>,
    p: &mut [usize],
) -> Result<()> {
    let n = a.dim();
    check_len(n, p.len())?;

    p.par_iter_mut().enumerate().for_each(|(i, pi)| *pi = i);

    for k in 0..n - 1 {
        let row = pivot_row(a, k)?;

        p.swap(k, row);
        par_swap_rows(a, k, row);

        let (head, tail) = a.as_mut_slice().split_at_mut((k + 1) * n);
        let pivot = &head[k * n..];
        tail.par_chunks_exact_mut(n)
            .for_each(|r| eliminate_row(k, pivot, r));
    }

    pivot_row(a, n - 1)?;

    debug!("p = {:?}", p);
    Ok(())
}

fn par_swap_rows<S: Send>(a: &mut Matrix<S>, k: usize, row: usize) {
    if k == row {
        return;
    }
    let n = a.dim();
    let (lo, hi) = if k < row { (k, row) } else { (row, k) };
    let (head, tail) = a.as_mut_slice().split_at_mut(hi * n);
    head[lo * n..(lo + 1) * n]
        .par_iter_mut()
        .zip(tail[..n].par_iter_mut())
        .with_min_len(SWAP_MIN_LEN)
        .for_each(|(x, y)| mem::swap(x, y));
}

/// Solve `Ax=b` for one or more right-hand-sides, stored one after the
/// other in `rhs`. Each right-hand-side is overwritten with its solution.
/// `a` is left holding the LU factors.
pub fn par_solve<S: Scalar + Send + Sync>(a: &mut Matrix<S>, rhs: &mut [S]) -> Result<()> {
    let n = a.dim();
    if rhs.len() % n != 0 {
        return Err(Error::DimensionMismatch {
            expected: n * (rhs.len() / n + 1),
            got: rhs.len(),
        });
    }

    let mut p = try_vector(n, 0)?;
    par_decompose_lup(a, &mut p)?;

    let lu = &*a;
    let p = &p;
    let scratch = try_vector(n, S::zero())?;
    rhs.par_chunks_exact_mut(n)
        .try_for_each_with(scratch, |b, x| -> Result<()> {
            b.copy_from_slice(x);
            lup_solve(lu, p, x, b)
        })
}

/// Inverts `a`, factoring in parallel and running the n independent
/// substitutions concurrently. `a` is left holding the LU factors.
pub fn par_invert<S: Scalar + Send + Sync>(a: &mut Matrix<S>) -> Result<Matrix<S>> {
    let mut p = try_vector(a.dim(), 0)?;
    par_decompose_lup(a, &mut p)?;
    par_invert_factors(a, &p)
}

fn par_invert_factors<S: Scalar + Send + Sync>(
    lu: &Matrix<S>,
    p: &[usize],
) -> Result<Matrix<S>> {
    let n = lu.dim();
    let mut ai = Matrix::try_zeros(n)?;
    let scratch = try_vector(n, S::zero())?;

    ai.as_mut_slice()
        .par_chunks_exact_mut(n)
        .enumerate()
        .try_for_each_with(scratch, |e, (i, row)| -> Result<()> {
            e.fill(S::zero());
            e[i] = S::one();
            lup_solve(lu, p, row, e)
        })?;

    ai.transpose();
    Ok(ai)
}

impl<S: Scalar + Send + Sync> Lup<S> {
    /// Factors `a` with [`par_decompose_lup`].
    pub fn par_new(mut a: Matrix<S>) -> Result<Self> {
        let mut perm = try_vector(a.dim(), 0)?;
        par_decompose_lup(&mut a, &mut perm)?;
        Ok(Self { lu: a, perm })
    }

    pub fn par_inverse(&self) -> Result<Matrix<S>> {
        par_invert_factors(&self.lu, &self.perm)
    }
}
