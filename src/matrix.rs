use std::{fmt, mem};

use crate::error::{Error, Result};
use crate::traits::Scalar;

/// Allocates a vector of `len` copies of `value`, reporting allocation
/// failure instead of aborting.
pub fn try_vector<S: Clone>(len: usize, value: S) -> Result<Vec<S>> {
    let bytes = len.saturating_mul(mem::size_of::<S>());
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| Error::Alloc { bytes })?;
    v.resize(len, value);
    Ok(v)
}

/// Right-hand side of all ones.
pub fn ones<S: Scalar>(n: usize) -> Result<Vec<S>> {
    try_vector(n, S::one())
}

/// Formats a vector as space separated values.
pub fn show_vector<S: Scalar>(v: &[S]) -> String {
    let mut s = String::new();
    for x in v {
        s.push_str(&format!("{:.6} ", x));
    }
    s
}

// Dense square matrix in one row-major allocation.
//
// Row i occupies data[i*n .. i*n + n], so swapping rows and sweeping the
// trailing block only ever touch contiguous memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<S> {
    n: usize,
    data: Vec<S>,
}

impl<S: Scalar> Matrix<S> {
    pub fn try_zeros(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyMatrix);
        }
        let len = n.checked_mul(n).ok_or(Error::Alloc { bytes: usize::MAX })?;
        Ok(Self {
            n,
            data: try_vector(len, S::zero())?,
        })
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::try_zeros(n)?;
        for i in 0..n {
            m[(i, i)] = S::one();
        }
        Ok(m)
    }

    /// The discrete Laplacian pattern: -2 on the diagonal, 1 on both
    /// neighbouring diagonals, 0 elsewhere.
    pub fn tridiagonal(n: usize) -> Result<Self> {
        let mut m = Self::try_zeros(n)?;
        let one = S::one();
        let two = one + one;
        for i in 0..n {
            m[(i, i)] = -two;
            if i > 0 {
                m[(i, i - 1)] = one;
            }
            if i + 1 < n {
                m[(i, i + 1)] = one;
            }
        }
        Ok(m)
    }

    pub fn from_rows(rows: &[Vec<S>]) -> Result<Self> {
        let n = rows.len();
        let mut m = Self::try_zeros(n)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::DimensionMismatch {
                    expected: n,
                    got: row.len(),
                });
            }
            m.row_mut(i).copy_from_slice(row);
        }
        Ok(m)
    }

    pub fn from_vec(n: usize, data: Vec<S>) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyMatrix);
        }
        if data.len() != n * n {
            return Err(Error::DimensionMismatch {
                expected: n * n,
                got: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.n;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[lo * n..lo * n + n].swap_with_slice(&mut tail[..n]);
    }

    /// Transposes in place by swapping entries across the diagonal.
    pub fn transpose(&mut self) {
        let n = self.n;
        for i in 0..n {
            for j in i + 1..n {
                self.data.swap(i * n + j, j * n + i);
            }
        }
    }

    pub fn mul(&self, other: &Matrix<S>) -> Result<Matrix<S>> {
        if other.n != self.n {
            return Err(Error::DimensionMismatch {
                expected: self.n,
                got: other.n,
            });
        }
        let n = self.n;
        let mut c = Self::try_zeros(n)?;
        for i in 0..n {
            for k in 0..n {
                let a_ik = self[(i, k)];
                let row_k = other.row(k);
                for (c_ij, b_kj) in c.row_mut(i).iter_mut().zip(row_k) {
                    *c_ij = *c_ij + a_ik * *b_kj;
                }
            }
        }
        Ok(c)
    }

    pub fn mul_vec(&self, x: &[S]) -> Result<Vec<S>> {
        if x.len() != self.n {
            return Err(Error::DimensionMismatch {
                expected: self.n,
                got: x.len(),
            });
        }
        let mut y = try_vector(self.n, S::zero())?;
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = self
                .row(i)
                .iter()
                .zip(x)
                .fold(S::zero(), |acc, (a, b)| acc + *a * *b);
        }
        Ok(y)
    }
}

impl<S> Matrix<S> {
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn row(&self, i: usize) -> &[S] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [S] {
        let n = self.n;
        &mut self.data[i * n..(i + 1) * n]
    }

    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<S> {
        self.data
    }
}

impl<S> std::ops::Index<(usize, usize)> for Matrix<S> {
    type Output = S;

    fn index(&self, (i, j): (usize, usize)) -> &S {
        &self.data[i * self.n + j]
    }
}

impl<S> std::ops::IndexMut<(usize, usize)> for Matrix<S> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut S {
        &mut self.data[i * self.n + j]
    }
}

impl<S: Scalar> fmt::Display for Matrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            writeln!(f, "{}", show_vector(self.row(i)))?;
        }
        Ok(())
    }
}
