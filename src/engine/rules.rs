//! Conway's Game of Life transition rule (B3/S23)

/// The B3/S23 rule set
pub struct LifeRules;

impl LifeRules {
    /// Next state of a cell given its current state and live neighbor count.
    ///
    /// A live cell with 2 or 3 live neighbors survives; a dead cell with
    /// exactly 3 live neighbors is born; every other cell is dead.
    #[inline]
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_counts() -> &'static [u8] {
        &[2, 3]
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_counts() -> &'static [u8] {
        &[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survival_truth_table() {
        for neighbors in 0..=8 {
            let expected = neighbors == 2 || neighbors == 3;
            assert_eq!(
                LifeRules::next_state(true, neighbors),
                expected,
                "live cell with {} neighbors",
                neighbors
            );
        }
    }

    #[test]
    fn test_birth_truth_table() {
        for neighbors in 0..=8 {
            let expected = neighbors == 3;
            assert_eq!(
                LifeRules::next_state(false, neighbors),
                expected,
                "dead cell with {} neighbors",
                neighbors
            );
        }
    }

    #[test]
    fn test_rule_constants() {
        assert_eq!(LifeRules::survival_counts(), &[2, 3]);
        assert_eq!(LifeRules::birth_counts(), &[3]);
    }
}
