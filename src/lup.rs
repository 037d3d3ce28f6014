use num_traits::Zero;

use crate::debug::debug;
use crate::error::{Error, Result};
use crate::matrix::{try_vector, Matrix};
use crate::traits::Scalar;

// 1. for k := 0 to n-2 do
// 2.   Pivot: row := argmax |a_ik| for i >= k (first maximum wins);
// 3.   Swap p_k with p_row and row k of A with row row (whole rows);
// 4.   for i := k+1 to n-1 do
// 5.     a_ik := a_ik / a_kk;
// 6.     a_ij := a_ij - a_ik * a_kj  for j > k;
// 7. od
//
// On return A holds U on and above the diagonal and the multipliers of the
// unit lower triangular L below it, with PA = LU.

/// Factors `a` in place so that PA = LU, filling `p` with the row permutation.
///
/// `p[k]` is the row of the original matrix that ends up at position `k`.
/// Fails with [`Error::Singular`] if partial pivoting finds a column without
/// a nonzero candidate, in which case `a` and `p` hold a partial factorization.
pub fn decompose_lup<S: Scalar>(a: &mut Matrix<S>, p: &mut [usize]) -> Result<()> {
    let n = a.dim();
    check_len(n, p.len())?;

    for (i, pi) in p.iter_mut().enumerate() {
        *pi = i;
    }

    for k in 0..n - 1 {
        let row = pivot_row(a, k)?;

        p.swap(k, row);
        a.swap_rows(k, row);

        let (head, tail) = a.as_mut_slice().split_at_mut((k + 1) * n);
        let pivot = &head[k * n..];
        for r in tail.chunks_exact_mut(n) {
            eliminate_row(k, pivot, r);
        }

        #[cfg(feature = "debug")]
        {
            if n <= crate::debug::MAX_TABLE_DIM {
                print!("A =\n{}", crate::matrix_table(a));
            }
        }
    }

    // The loop never pivots on the last column; a zero there is just as singular.
    pivot_row(a, n - 1)?;

    debug!("p = {:?}", p);
    Ok(())
}

/// Row in `k..n` with the largest magnitude in column `k`.
///
/// Ties keep the earliest row. An all-zero candidate set is singular.
pub(crate) fn pivot_row<S: Scalar>(a: &Matrix<S>, k: usize) -> Result<usize> {
    let mut row = None;
    let mut maxabs = S::Norm::zero();

    for i in k..a.dim() {
        let absval = a[(i, k)].norm();
        if absval > maxabs {
            maxabs = absval;
            row = Some(i);
        }
    }

    match row {
        Some(row) => {
            debug!("k = {}, pivrow = {}, maxpiv = {}", k, row, maxabs);
            Ok(row)
        }
        None => {
            debug!("k = {}: no nonzero pivot", k);
            Err(Error::Singular { column: k })
        }
    }
}

/// Outer-product update of one row below pivot row `k`.
///
/// Reads only the pivot row and writes only `row`, so rows are independent.
pub(crate) fn eliminate_row<S: Scalar>(k: usize, pivot: &[S], row: &mut [S]) {
    row[k] /= pivot[k];
    let l = row[k];
    for (x, u) in row[k + 1..].iter_mut().zip(&pivot[k + 1..]) {
        *x -= l * *u;
    }
}

/// Solves Ax = b by forward and backward substitution, given the factors
/// `lu` and permutation `p` from [`decompose_lup`].
pub fn lup_solve<S: Scalar>(lu: &Matrix<S>, p: &[usize], x: &mut [S], b: &[S]) -> Result<()> {
    let n = lu.dim();
    check_len(n, p.len())?;
    check_len(n, x.len())?;
    check_len(n, b.len())?;

    // Solve Ly = Pb. y lives in x: y[i] is written only after every
    // y[j], j < i, has been read for it.
    for i in 0..n {
        let row = lu.row(i);
        let mut yi = b[p[i]];
        for (l, yj) in row[..i].iter().zip(&x[..i]) {
            yi -= *l * *yj;
        }
        x[i] = yi;
    }

    // Solve Ux = y. x[i] replaces y[i] once nothing else needs it.
    for i in (0..n).rev() {
        let row = lu.row(i);
        let mut xi = x[i];
        for (u, xj) in row[i + 1..].iter().zip(&x[i + 1..]) {
            xi -= *u * *xj;
        }
        x[i] = xi / row[i];
    }

    Ok(())
}

/// Solves Ax = b, destroying `a` (it is left holding the LU factors).
pub fn solve<S: Scalar>(a: &mut Matrix<S>, x: &mut [S], b: &[S]) -> Result<()> {
    let mut p = try_vector(a.dim(), 0)?;
    decompose_lup(a, &mut p)?;
    lup_solve(a, &p, x, b)
}

/// Inverts `a` with one factorization and n substitutions, one per unit
/// basis vector. `a` is left holding the LU factors.
pub fn invert<S: Scalar>(a: &mut Matrix<S>) -> Result<Matrix<S>> {
    let mut p = try_vector(a.dim(), 0)?;
    decompose_lup(a, &mut p)?;
    invert_factors(a, &p)
}

// Row i of the result is the solution of Ax = e_i, so the rows are the
// columns of the inverse until the final transpose.
pub(crate) fn invert_factors<S: Scalar>(lu: &Matrix<S>, p: &[usize]) -> Result<Matrix<S>> {
    let n = lu.dim();
    let mut ai = Matrix::try_zeros(n)?;
    let mut e = try_vector(n, S::zero())?;

    for i in 0..n {
        e[i] = S::one();
        lup_solve(lu, p, ai.row_mut(i), &e)?;
        e[i] = S::zero();
    }

    ai.transpose();
    Ok(ai)
}

pub(crate) fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::DimensionMismatch { expected, got });
    }
    Ok(())
}

/// A matrix together with its LUP factorization.
///
/// Constructing one consumes the matrix: its storage is reused for the
/// combined L/U factors.
#[derive(Clone, Debug)]
pub struct Lup<S> {
    pub(crate) lu: Matrix<S>,
    pub(crate) perm: Vec<usize>,
}

impl<S: Scalar> Lup<S> {
    pub fn new(mut a: Matrix<S>) -> Result<Self> {
        let mut perm = try_vector(a.dim(), 0)?;
        decompose_lup(&mut a, &mut perm)?;
        Ok(Self { lu: a, perm })
    }

    pub fn dim(&self) -> usize {
        self.lu.dim()
    }

    /// Combined factors: U on and above the diagonal, L's multipliers below.
    pub fn factors(&self) -> &Matrix<S> {
        &self.lu
    }

    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    pub fn into_parts(self) -> (Matrix<S>, Vec<usize>) {
        (self.lu, self.perm)
    }

    /// Unit lower triangular factor L.
    pub fn lower(&self) -> Result<Matrix<S>> {
        let n = self.dim();
        let mut l = Matrix::identity(n)?;
        for i in 1..n {
            l.row_mut(i)[..i].copy_from_slice(&self.lu.row(i)[..i]);
        }
        Ok(l)
    }

    /// Upper triangular factor U.
    pub fn upper(&self) -> Result<Matrix<S>> {
        let n = self.dim();
        let mut u = Matrix::try_zeros(n)?;
        for i in 0..n {
            u.row_mut(i)[i..].copy_from_slice(&self.lu.row(i)[i..]);
        }
        Ok(u)
    }

    pub fn solve(&self, b: &[S]) -> Result<Vec<S>> {
        let mut x = try_vector(self.dim(), S::zero())?;
        self.solve_into(&mut x, b)?;
        Ok(x)
    }

    pub fn solve_into(&self, x: &mut [S], b: &[S]) -> Result<()> {
        lup_solve(&self.lu, &self.perm, x, b)
    }

    pub fn inverse(&self) -> Result<Matrix<S>> {
        invert_factors(&self.lu, &self.perm)
    }
}
