/// Outcome of running the escape-time loop for one point.
///
/// `iterations == max_iterations` means the orbit never left the escape
/// radius. `escaped_modulus_squared` is |z|² of the state matching
/// `iterations`, which the smooth colouring needs.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct IterationResult {
    pub iterations: i32,
    pub escaped_modulus_squared: f64,
}

impl IterationResult {
    #[must_use]
    pub fn escaped(&self, max_iterations: i32) -> bool {
        self.iterations < max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped_below_cap() {
        let result = IterationResult {
            iterations: 4,
            escaped_modulus_squared: 9.0,
        };

        assert!(result.escaped(5));
        assert!(!result.escaped(4));
    }

    #[test]
    fn test_default_is_an_unstarted_orbit() {
        let result = IterationResult::default();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.escaped_modulus_squared, 0.0);
    }
}
