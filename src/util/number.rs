//! A set of utilities for working with currency amounts.

use rust_decimal::prelude::*;

/// Create a number.
///
/// This is mostly a wrapper around `dec!` that makes it easier to swap out the
/// number type project-wide without having to change each instance by hand,
/// but can also be used by callers to create amounts more seamlessly.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}

/// How many decimal places a per-day benefit is kept to.
pub const CURRENCY_DP: u32 = 2;

/// Round an amount to currency precision, halves going away from zero (so
/// 0.125 becomes 0.13).
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Add two amounts, keeping the larger of the two scales even when one side is
/// zero (so `3000 + 0.00` is `3000.00`, not `3000`). Returns `None` if the
/// total doesn't fit in a `Decimal`.
pub fn sum(a: Decimal, b: Decimal) -> Option<Decimal> {
    let mut total = a.checked_add(b)?;
    total.rescale(a.scale().max(b.scale()));
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(num!(0.125)), num!(0.13));
        assert_eq!(round_half_up(num!(0.124999)), num!(0.12));
        assert_eq!(round_half_up(num!(1.005)), num!(1.01));
        assert_eq!(round_half_up(num!(-1.005)), num!(-1.01));
        assert_eq!(round_half_up(num!(7)), num!(7));
    }

    #[test]
    fn sums_keep_scale() {
        assert_eq!(sum(num!(3000), num!(0.00)).unwrap().to_string(), "3000.00");
        assert_eq!(sum(num!(3000), num!(0)).unwrap().to_string(), "3000");
        assert_eq!(sum(num!(2000), num!(9.30)).unwrap().to_string(), "2009.30");
        assert_eq!(sum(num!(0.1), num!(0.2)), Some(num!(0.3)));
    }

    #[test]
    fn sums_that_dont_fit() {
        assert_eq!(sum(Decimal::MAX, Decimal::MAX), None);
        assert_eq!(sum(Decimal::MAX, num!(1)), None);
        assert_eq!(sum(Decimal::MAX, num!(0)), Some(Decimal::MAX));
    }
}
