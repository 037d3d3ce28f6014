use approx::assert_abs_diff_eq;
use rstest::rstest;

use lup::{decompose_lup, invert, lup_solve, solve, Error, Lup, Matrix};

// Dense matrix with entries in [-1, 1) from a 64-bit LCG.
fn lcg_matrix(n: usize, seed: u64) -> Matrix<f64> {
    let mut state = seed;
    let mut data = Vec::with_capacity(n * n);
    for _ in 0..n * n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        data.push((state >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0);
    }
    Matrix::from_vec(n, data).unwrap()
}

fn is_permutation(p: &[usize]) -> bool {
    let mut seen = vec![false; p.len()];
    for &i in p {
        if i >= p.len() || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

#[rstest]
#[case(1, 7)]
#[case(2, 11)]
#[case(3, 42)]
#[case(8, 1234)]
#[case(25, 99)]
fn reconstructs_permuted_matrix(#[case] n: usize, #[case] seed: u64) {
    let a = lcg_matrix(n, seed);
    let lup = Lup::new(a.clone()).unwrap();
    let p = lup.permutation();
    assert!(is_permutation(p));

    let lu = lup.lower().unwrap().mul(&lup.upper().unwrap()).unwrap();
    for i in 0..n {
        for j in 0..n {
            assert_abs_diff_eq!(lu[(i, j)], a[(p[i], j)], epsilon = 1e-10);
        }
    }
}

#[rstest]
#[case(1, 3)]
#[case(4, 5)]
#[case(16, 8)]
#[case(40, 13)]
fn solution_satisfies_system(#[case] n: usize, #[case] seed: u64) {
    let a = lcg_matrix(n, seed);
    let b: Vec<f64> = (0..n).map(|i| i as f64 - 1.5).collect();

    let mut x = vec![0.0; n];
    solve(&mut a.clone(), &mut x, &b).unwrap();

    let ax = a.mul_vec(&x).unwrap();
    for (lhs, rhs) in ax.iter().zip(&b) {
        assert_abs_diff_eq!(*lhs, *rhs, epsilon = 1e-8);
    }
}

#[rstest]
#[case(5)]
#[case(30)]
fn decomposition_is_deterministic(#[case] n: usize) {
    let a = lcg_matrix(n, 2024);
    let mut a1 = a.clone();
    let mut a2 = a;
    let mut p1 = vec![0; n];
    let mut p2 = vec![0; n];

    decompose_lup(&mut a1, &mut p1).unwrap();
    decompose_lup(&mut a2, &mut p2).unwrap();

    assert_eq!(p1, p2);
    assert_eq!(a1, a2);
}

#[rstest]
#[case(2, 17)]
#[case(9, 23)]
#[case(20, 31)]
fn inverse_round_trip(#[case] n: usize, #[case] seed: u64) {
    let a = lcg_matrix(n, seed);
    let ai = invert(&mut a.clone()).unwrap();
    let id = a.mul(&ai).unwrap();
    for i in 0..n {
        for j in 0..n {
            let e = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(id[(i, j)], e, epsilon = 1e-8);
        }
    }
}

#[rstest]
#[case(3)]
#[case(10)]
fn laplacian_inverse_single_precision(#[case] n: usize) {
    let a = Matrix::<f32>::tridiagonal(n).unwrap();
    let ai = invert(&mut a.clone()).unwrap();
    let id = a.mul(&ai).unwrap();
    for i in 0..n {
        for j in 0..n {
            let e = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(id[(i, j)], e, epsilon = 1e-4);
        }
    }
}

#[test]
fn laplacian_matches_closed_form() {
    // -A is the discrete Laplacian, so A x = 1 has x_i = -i(n+1-i)/2.
    let n = 12;
    let mut a = Matrix::<f64>::tridiagonal(n).unwrap();
    let b = vec![1.0; n];
    let mut x = vec![0.0; n];
    solve(&mut a, &mut x, &b).unwrap();

    for (i, xi) in x.iter().enumerate() {
        let k = (i + 1) as f64;
        assert_abs_diff_eq!(*xi, -k * (n as f64 + 1.0 - k) / 2.0, epsilon = 1e-9);
    }
}

#[test]
fn factors_are_reusable() {
    let a = lcg_matrix(6, 5);
    let mut lu = a.clone();
    let mut p = vec![0; 6];
    decompose_lup(&mut lu, &mut p).unwrap();

    for k in 0..6 {
        let mut b = vec![0.0; 6];
        b[k] = 1.0;
        let mut x = vec![0.0; 6];
        lup_solve(&lu, &p, &mut x, &b).unwrap();

        let ax = a.mul_vec(&x).unwrap();
        for (lhs, rhs) in ax.iter().zip(&b) {
            assert_abs_diff_eq!(*lhs, *rhs, epsilon = 1e-10);
        }
    }
}

#[test]
fn singular_matrix_is_an_error() {
    let mut a = Matrix::from_rows(&[
        vec![2.0, 1.0, 3.0],
        vec![4.0, 2.0, 6.0],
        vec![1.0, 5.0, 1.0],
    ])
    .unwrap();
    assert!(matches!(invert(&mut a), Err(Error::Singular { .. })));
}

#[cfg(feature = "rayon")]
#[rstest]
#[case(1, 77)]
#[case(7, 78)]
#[case(64, 79)]
fn parallel_matches_sequential(#[case] n: usize, #[case] seed: u64) {
    let a = lcg_matrix(n, seed);

    let seq = Lup::new(a.clone()).unwrap();
    let par = Lup::par_new(a.clone()).unwrap();

    assert_eq!(seq.permutation(), par.permutation());
    for (s, p) in seq.factors().as_slice().iter().zip(par.factors().as_slice()) {
        assert_abs_diff_eq!(*s, *p, epsilon = 1e-12);
    }

    let b: Vec<f64> = (0..n).map(|i| (i % 3) as f64).collect();
    let mut rhs = b.clone();
    lup::par_solve(&mut a.clone(), &mut rhs).unwrap();
    let x = seq.solve(&b).unwrap();
    for (r, s) in rhs.iter().zip(&x) {
        assert_abs_diff_eq!(*r, *s, epsilon = 1e-12);
    }
}
