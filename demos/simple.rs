use lup::{solve, Matrix};

fn main() {
    let mut a = Matrix::from_rows(&[
        vec![4.0, 1.0, 0.0],
        vec![1.0, 3.0, 1.0],
        vec![0.0, 1.0, 2.0],
    ])
    .unwrap();
    let b = vec![6.0, 7.0, 8.0];
    let mut x = vec![0.0; 3];

    solve(&mut a, &mut x, &b).unwrap();

    println!("{:?}", x);
}
