use nalgebra::Vector4;

/// Cubic Hermite basis `(h00, h10, h01, h11)` at local parameter `u` in `[0, 1]`.
pub fn basis(u: f64) -> Vector4<f64> {
    let u2 = u * u;
    let u3 = u2 * u;
    Vector4::new(
        2.0 * u3 - 3.0 * u2 + 1.0,
        u3 - 2.0 * u2 + u,
        -2.0 * u3 + 3.0 * u2,
        u3 - u2,
    )
}

/// Evaluates a single Hermite segment of width `step` with endpoint values `v0`, `v1`
/// and endpoint tangents `m0`, `m1`.
pub fn evaluate(v0: f64, m0: f64, v1: f64, m1: f64, step: f64, u: f64) -> f64 {
    let weights = Vector4::new(v0, step * m0, v1, step * m1);
    basis(u).dot(&weights)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn basis_on_segment_ends() {
        assert_eq!(Vector4::new(1.0, 0.0, 0.0, 0.0), basis(0.0));
        assert_eq!(Vector4::new(0.0, 0.0, 1.0, 0.0), basis(1.0));
    }

    #[test]
    fn basis_partition_of_unity() {
        let eps = 1e-12;
        for i in 0..=20 {
            let h = basis(i as f64 / 20.0);
            assert_approx_eq!(h[0] + h[2], 1.0, eps);
        }
    }

    #[test]
    fn basis_in_the_middle() {
        let eps = 1e-12;
        let h = basis(0.5);

        assert_approx_eq!(h[0], 0.5, eps);
        assert_approx_eq!(h[1], 0.125, eps);
        assert_approx_eq!(h[2], 0.5, eps);
        assert_approx_eq!(h[3], -0.125, eps);
    }

    #[test]
    fn evaluate_reproduces_line() {
        // y = 2x + 1 over [1, 3] has tangent 2 on both ends
        let eps = 1e-12;
        let step = 2.0;

        for i in 0..=10 {
            let u = i as f64 / 10.0;
            let x = 1.0 + u * step;
            assert_approx_eq!(evaluate(3.0, 2.0, 7.0, 2.0, step, u), 2.0 * x + 1.0, eps);
        }
    }

    #[test]
    fn evaluate_reproduces_cubic() {
        // y = x^3 over [0, 1]: values 0, 1 and tangents 0, 3
        let eps = 1e-12;

        assert_approx_eq!(evaluate(0.0, 0.0, 1.0, 3.0, 1.0, 0.3), 0.027, eps);
        assert_approx_eq!(evaluate(0.0, 0.0, 1.0, 3.0, 1.0, 0.8), 0.512, eps);
    }

    #[test]
    fn evaluate_flat_segment() {
        assert_eq!(evaluate(5.0, 0.0, 5.0, 0.0, 0.5, 0.5), 5.0);
    }
}
