#[cfg(feature = "debug")]
use std::io::Write;

#[cfg(feature = "debug")]
const MIN_WIDTH: usize = 5;

#[cfg(feature = "debug")]
const PADDING: usize = 1;

#[cfg(feature = "debug")]
const FLOAT_CONFIG: pretty_dtoa::FmtFloatConfig = pretty_dtoa::FmtFloatConfig::default()
    .add_point_zero(false)
    .max_significant_digits(6);

// Matrices larger than this are not dumped while tracing.
#[cfg(feature = "debug")]
pub(crate) const MAX_TABLE_DIM: usize = 12;

/// Right-aligned table of the matrix entries, zeros shown as `-`.
#[cfg(feature = "debug")]
pub fn matrix_table<S: crate::Scalar>(m: &crate::Matrix<S>) -> String {
    let mut tw = tabwriter::TabWriter::new(vec![])
        .minwidth(MIN_WIDTH)
        .padding(PADDING)
        .alignment(tabwriter::Alignment::Right);

    let n = m.dim();

    for r in 0..n {
        for c in 0..n {
            let x = m[(r, c)];
            if x == S::zero() {
                tw.write_all(b"-").unwrap();
            } else {
                let s = x.pretty_string(FLOAT_CONFIG);
                tw.write_all(s.as_bytes()).unwrap();
            }
            if c == n - 1 {
                tw.write_all(b"\t\n").unwrap();
            } else {
                tw.write_all(b"\t").unwrap();
            }
        }
    }
    String::from_utf8(tw.into_inner().unwrap()).unwrap()
}

#[cfg(feature = "debug")]
macro_rules! debug {
    ($( $args:expr ),*) => { println!( $( $args ),* ); }
}

#[cfg(not(feature = "debug"))]
macro_rules! debug {
    ($( $args:expr ),*) => {};
}

pub(crate) use debug;

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::*;

    #[test]
    fn zeros_render_as_dash() {
        let m = crate::Matrix::from_vec(2, vec![1.0f64, 0.0, 0.0, -2.5]).unwrap();
        let table = matrix_table(&m);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains('1') && lines[0].contains('-'));
        assert!(lines[1].contains("-2.5"));
    }
}
