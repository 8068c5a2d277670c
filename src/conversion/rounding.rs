//! Rounding rules for displayed quantities
//!
//! Metric amounts round up so measures come out slightly generous; pounds
//! round to the nearest quarter.

/// Round to the nearest 0.25
pub fn round_to_nearest_quarter(n: f64) -> f64 {
    (n * 4.0).round() / 4.0
}

/// Round up to the next multiple of 5
pub fn round_to_nearest_five(n: f64) -> f64 {
    (n / 5.0).ceil() * 5.0
}

/// Round up to the next multiple of 10
pub fn round_to_nearest_ten(n: f64) -> f64 {
    (n / 10.0).ceil() * 10.0
}

/// Rounding rule attached to a conversion table edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Raw result, left to display formatting
    #[default]
    None,
    NearestQuarter,
    UpToFive,
    UpToTen,
}

impl Rounding {
    pub fn apply(&self, n: f64) -> f64 {
        match self {
            Rounding::None => n,
            Rounding::NearestQuarter => round_to_nearest_quarter(n),
            Rounding::UpToFive => round_to_nearest_five(n),
            Rounding::UpToTen => round_to_nearest_ten(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_rounds_both_ways() {
        assert_eq!(round_to_nearest_quarter(2.0), 2.0);
        assert_eq!(round_to_nearest_quarter(2.1), 2.0);
        assert_eq!(round_to_nearest_quarter(2.2), 2.25);
        assert_eq!(round_to_nearest_quarter(0.6), 0.5);
        assert_eq!(round_to_nearest_quarter(0.63), 0.75);
        // 0.125 * 4 = 0.5 rounds away from zero
        assert_eq!(round_to_nearest_quarter(0.125), 0.25);
    }

    #[test]
    fn test_quarter_is_closest_multiple() {
        for i in 0..400 {
            let n = i as f64 * 0.0137;
            let rounded = round_to_nearest_quarter(n);
            assert!((rounded - n).abs() <= 0.125 + 1e-9, "{n} -> {rounded}");
            assert_eq!((rounded * 4.0).fract(), 0.0);
        }
    }

    #[test]
    fn test_five_never_rounds_down() {
        assert_eq!(round_to_nearest_five(907.184), 910.0);
        assert_eq!(round_to_nearest_five(905.0), 905.0);
        assert_eq!(round_to_nearest_five(0.1), 5.0);
        assert_eq!(round_to_nearest_five(0.0), 0.0);
        for i in 0..500 {
            let n = i as f64 * 0.731;
            assert!(round_to_nearest_five(n) >= n);
            assert!(round_to_nearest_five(n) - n < 5.0);
        }
    }

    #[test]
    fn test_ten_never_rounds_down() {
        assert_eq!(round_to_nearest_ten(236.588), 240.0);
        assert_eq!(round_to_nearest_ten(230.0), 230.0);
        assert_eq!(round_to_nearest_ten(14.787), 20.0);
        for i in 0..500 {
            let n = i as f64 * 1.377;
            assert!(round_to_nearest_ten(n) >= n);
            assert!(round_to_nearest_ten(n) - n < 10.0);
        }
    }

    #[test]
    fn test_rounding_apply() {
        assert_eq!(Rounding::None.apply(1.234), 1.234);
        assert_eq!(Rounding::NearestQuarter.apply(1.3), 1.25);
        assert_eq!(Rounding::UpToFive.apply(11.0), 15.0);
        assert_eq!(Rounding::UpToTen.apply(11.0), 20.0);
    }
}
