use std::fmt;

/// Numeric type usable as an edge or path cost.
///
/// Costs are totally ordered and must never be negative once they reach the
/// search; signed types are accepted so that domains built from signed input
/// can be searched, but a negative edge is reported as an error.
pub trait Cost: Copy + Ord + fmt::Debug {
    const ZERO: Self;
    const ONE: Self;

    /// Addition that reports overflow instead of wrapping.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Convert a geometric distance, saturating at the type's maximum.
    ///
    /// Saturation can only lower an estimate, which keeps heuristics built on
    /// it admissible.
    fn from_distance(d: u64) -> Self;
}

macro_rules! impl_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn from_distance(d: u64) -> Self {
                    <$t>::try_from(d).unwrap_or(<$t>::MAX)
                }
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, usize, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_reports_overflow() {
        assert_eq!(Cost::checked_add(250u8, 5), Some(255));
        assert_eq!(Cost::checked_add(250u8, 6), None);
        assert_eq!(Cost::checked_add(i32::MAX, 1), None);
    }

    #[test]
    fn from_distance_saturates() {
        assert_eq!(u8::from_distance(300), u8::MAX);
        assert_eq!(i32::from_distance(7), 7);
        assert_eq!(u64::from_distance(u64::MAX), u64::MAX);
    }
}
