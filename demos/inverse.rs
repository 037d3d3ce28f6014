use lup::{Lup, Matrix};

fn main() {
    let a = Matrix::<f64>::tridiagonal(5).unwrap();
    println!("A =\n{}", a);

    let lup = Lup::new(a.clone()).unwrap();
    println!("P = {:?}", lup.permutation());
    println!("L =\n{}", lup.lower().unwrap());
    println!("U =\n{}", lup.upper().unwrap());

    let ai = lup.inverse().unwrap();
    println!("inv(A) =\n{}", ai);

    // Should print the identity matrix, up to rounding.
    println!("A * inv(A) =\n{}", a.mul(&ai).unwrap());
}
