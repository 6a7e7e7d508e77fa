//! Trait definitions for external interactions
//!
//! The interval arithmetic engine is an external collaborator. This crate never
//! builds or rounds intervals; it only reads the bounds an engine hands over.

/// An interval value supplied by the underlying interval engine
///
/// Implemented by whatever engine the host uses (or by [`crate::Bounds`] when
/// the host already holds plain bounds). Implementations must honour the
/// enclosure guarantee: every real in `[lo, hi]` is a possible value.
pub trait IntervalEngine {
    /// Lower bound
    fn lo(&self) -> f64;

    /// Upper bound
    fn hi(&self) -> f64;

    /// Whether this is the engine's empty/undefined sentinel
    ///
    /// The default treats NaN bounds or reversed bounds as empty.
    fn is_empty(&self) -> bool {
        let (lo, hi) = (self.lo(), self.hi());
        lo.is_nan() || hi.is_nan() || lo > hi
    }
}

impl<T: IntervalEngine + ?Sized> IntervalEngine for &T {
    fn lo(&self) -> f64 {
        (**self).lo()
    }

    fn hi(&self) -> f64 {
        (**self).hi()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(f64, f64);

    impl IntervalEngine for Pair {
        fn lo(&self) -> f64 {
            self.0
        }

        fn hi(&self) -> f64 {
            self.1
        }
    }

    #[test]
    fn test_default_empty_detection() {
        assert!(!Pair(0.0, 1.0).is_empty());
        assert!(Pair(f64::NAN, 1.0).is_empty());
        assert!(Pair(0.0, f64::NAN).is_empty());
        assert!(Pair(2.0, 1.0).is_empty());
    }

    #[test]
    fn test_reference_forwarding() {
        let pair = Pair(-1.0, 3.0);
        let by_ref = &pair;
        assert_eq!(by_ref.lo(), -1.0);
        assert_eq!(by_ref.hi(), 3.0);
        assert!(!by_ref.is_empty());
    }
}
