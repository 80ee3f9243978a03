/// Comparison policy for degeneracy checks (parallel sides, equal edge lengths).
///
/// The default is exact floating-point equality. A positive `eps` accepts
/// values whose absolute difference is at most `eps`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Tolerance {
    /// Bit-exact comparison.
    pub const EXACT: Self = Self { eps: 0.0 };

    /// Creates a tolerance. Negative and NaN values become exact comparison.
    #[must_use]
    pub fn new(eps: f64) -> Self {
        if eps > 0.0 {
            Self { eps }
        } else {
            Self::EXACT
        }
    }

    /// Returns `true` if `a` and `b` compare equal under this policy.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() <= self.eps
    }

    /// Returns `true` if `v` compares equal to zero under this policy.
    #[must_use]
    pub fn is_zero(&self, v: f64) -> bool {
        self.approx_eq(v, 0.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::EXACT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_exact() {
        let tol = Tolerance::default();
        assert_eq!(tol, Tolerance::EXACT);
        assert!(tol.approx_eq(1.0, 1.0));
        assert!(!tol.approx_eq(0.1 + 0.2, 0.3));
        assert!(!tol.is_zero(1e-300));
    }

    #[test]
    fn loose_accepts_close_values() {
        let tol = Tolerance::new(1e-9);
        assert!(tol.approx_eq(0.1 + 0.2, 0.3));
        assert!(tol.is_zero(-5e-10));
        assert!(!tol.approx_eq(1.0, 1.001));
    }

    #[test]
    fn invalid_eps_falls_back_to_exact() {
        assert_eq!(Tolerance::new(-1.0), Tolerance::EXACT);
        assert_eq!(Tolerance::new(f64::NAN), Tolerance::EXACT);
    }
}
