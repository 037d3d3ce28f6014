fn main() {
    let n = 3;

    let mut a = lup::Matrix::tridiagonal(n).unwrap();

    let b = vec![1.0f32, 1.0, 1.0];
    let mut rhs = [b.clone(), b.clone()].concat();

    lup::par_solve(&mut a, &mut rhs).unwrap();

    rhs.chunks_exact(n).for_each(|x| {
        println!("{:?}", x);
    })
}
