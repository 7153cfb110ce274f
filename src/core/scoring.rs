//! Scoring: quadratic bonus for clearing multiple lines in one lock.

/// Points awarded for clearing `cleared` rows in a single locking event.
///
/// `cleared^2 * 100`: single = 100, double = 400, triple = 900,
/// quadruple = 1600. Clearing the same total across several locks pays less,
/// which is the point.
pub fn line_clear_score(cleared: u32) -> u32 {
    cleared * cleared * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 400);
        assert_eq!(line_clear_score(3), 900);
        assert_eq!(line_clear_score(4), 1600);
    }

    #[test]
    fn test_one_lock_beats_split_locks() {
        assert!(line_clear_score(4) > 4 * line_clear_score(1));
        assert!(line_clear_score(2) > 2 * line_clear_score(1));
    }
}
