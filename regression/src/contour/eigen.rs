/// Off-diagonal magnitude, relative to the diagonal, under which the matrix is treated as
/// already diagonal.
const OFF_DIAGONAL_EPS: f64 = 1e-12;

/// Eigendecomposition of a 2×2 symmetric matrix.
///
/// `values[0] >= values[1]` and `vectors[k]` is the unit eigenvector of `values[k]`. The two
/// vectors are orthogonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricEigen {
    pub values: [f64; 2],
    pub vectors: [[f64; 2]; 2],
}

impl SymmetricEigen {
    /// Decomposes `[[a, b], [b, c]]` through its trace and determinant.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        let half_trace = (a + c) / 2.0;
        let half_gap = (a - c) / 2.0;
        let radius = half_gap.hypot(b);
        let values = [half_trace + radius, half_trace - radius];

        let scale = a.abs().max(c.abs()).max(1.0);
        if b.abs() <= OFF_DIAGONAL_EPS * scale {
            let vectors = if a >= c {
                [[1.0, 0.0], [0.0, 1.0]]
            } else {
                [[0.0, 1.0], [-1.0, 0.0]]
            };
            return Self { values, vectors };
        }

        // (b, λ1 - a) solves the first row; it can't vanish since b != 0.
        let (vx, vy) = (b, values[0] - a);
        let norm = vx.hypot(vy);
        let v1 = [vx / norm, vy / norm];
        let v2 = [-v1[1], v1[0]];

        Self {
            values,
            vectors: [v1, v2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_eigenpair(a: f64, b: f64, c: f64, value: f64, v: [f64; 2]) {
        let av = [a * v[0] + b * v[1], b * v[0] + c * v[1]];
        assert!((av[0] - value * v[0]).abs() < 1e-9, "{av:?} vs {value} * {v:?}");
        assert!((av[1] - value * v[1]).abs() < 1e-9, "{av:?} vs {value} * {v:?}");
        assert!((v[0].hypot(v[1]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn decomposes_a_full_matrix() {
        let (a, b, c) = (2.0, 2.075, 2.4175);
        let eigen = SymmetricEigen::new(a, b, c);

        assert!(eigen.values[0] >= eigen.values[1]);
        assert_eigenpair(a, b, c, eigen.values[0], eigen.vectors[0]);
        assert_eigenpair(a, b, c, eigen.values[1], eigen.vectors[1]);

        let dot = eigen.vectors[0][0] * eigen.vectors[1][0]
            + eigen.vectors[0][1] * eigen.vectors[1][1];
        assert!(dot.abs() < 1e-12);
    }

    #[test]
    fn diagonal_matrix_falls_back_to_axes() {
        let eigen = SymmetricEigen::new(2.0, 0.0, 5.0);
        assert_eq!(eigen.values, [5.0, 2.0]);
        assert_eq!(eigen.vectors[0], [0.0, 1.0]);
        assert_eigenpair(2.0, 0.0, 5.0, 2.0, eigen.vectors[1]);

        let eigen = SymmetricEigen::new(3.0, 0.0, 1.0);
        assert_eq!(eigen.values, [3.0, 1.0]);
        assert_eq!(eigen.vectors, [[1.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn singular_matrix_has_a_zero_eigenvalue() {
        let eigen = SymmetricEigen::new(2.0, 4.0, 8.0);
        assert!((eigen.values[0] - 10.0).abs() < 1e-12);
        assert!(eigen.values[1].abs() < 1e-12);
    }
}
