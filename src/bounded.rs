//! Values held inside a closed interval `[min, max]`.
//!
//! [`Bound`] clamps to the nearest edge after every mutation. [`Cyclic`]
//! wraps around instead, with a period of `range + 1` so that stepping
//! past `max` by one lands on `min`:
//!
//! ```rust
//! use sciunits::{Bound, Cyclic};
//!
//! let mut level = Bound::new(5.0, 1.0, 10.0);
//! level += 10.0;
//! assert_eq!(level.value(), 10.0);
//!
//! let mut hour = Cyclic::new(22, 0, 23);
//! hour += 3;
//! assert_eq!(hour.value(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::Num;

/// How a [`Bounded`] value is brought back into `[min, max]`.
///
/// Out-of-range values arrive as the distance past an edge, so a policy never
/// forms a value outside `T`'s range (`Cyclic<u32>` at `0` can step down).
pub trait BoundPolicy<T> {
    /// Resolve the value `max + overshoot`, with `overshoot > 0`.
    fn above(overshoot: T, min: T, max: T) -> T;

    /// Resolve the value `min - overshoot`, with `overshoot > 0`.
    fn below(overshoot: T, min: T, max: T) -> T;

    fn enforce(value: T, min: T, max: T) -> T
    where
        T: Num + PartialOrd + Copy,
    {
        if value > max {
            Self::above(value - max, min, max)
        } else if value < min {
            Self::below(min - value, min, max)
        } else {
            value
        }
    }
}

/// Saturate at the nearest edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Clamp;

/// Wrap around with period `max - min + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wrap;

impl<T: Num + PartialOrd + Copy> BoundPolicy<T> for Clamp {
    fn above(_overshoot: T, _min: T, max: T) -> T {
        max
    }

    fn below(_overshoot: T, min: T, _max: T) -> T {
        min
    }
}

impl<T: Num + PartialOrd + Copy> BoundPolicy<T> for Wrap {
    fn above(overshoot: T, min: T, max: T) -> T {
        let rest = overshoot % (max - min + T::one());
        if rest >= T::one() {
            min + (rest - T::one())
        } else {
            max + rest
        }
    }

    fn below(overshoot: T, min: T, max: T) -> T {
        let rest = overshoot % (max - min + T::one());
        if rest >= T::one() {
            max - (rest - T::one())
        } else {
            min - rest
        }
    }
}

/// A value kept inside `[min, max]` by the policy `P`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded<T, P> {
    min: T,
    value: T,
    max: T,
    policy: PhantomData<P>,
}

/// A value clamped to `[min, max]`.
pub type Bound<T> = Bounded<T, Clamp>;

/// A value that wraps around inside `[min, max]`.
pub type Cyclic<T> = Bounded<T, Wrap>;

impl<T, P> Bounded<T, P>
where
    T: Num + PartialOrd + Copy,
    P: BoundPolicy<T>,
{
    pub fn new(value: T, min: T, max: T) -> Self {
        Bounded {
            min,
            value: P::enforce(value, min, max),
            max,
            policy: PhantomData,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn range(&self) -> T {
        self.max - self.min
    }

    /// Position of the value within the interval, `0` at `min` and `1` at `max`.
    pub fn ratio(&self) -> T {
        (self.value - self.min) / self.range()
    }

    pub fn set(&mut self, value: T) {
        self.value = P::enforce(value, self.min, self.max);
    }

    pub fn set_min(&mut self, min: T) {
        self.min = min;
        self.set(self.value);
    }

    pub fn set_max(&mut self, max: T) {
        self.max = max;
        self.set(self.value);
    }

    pub fn set_all(&mut self, value: T, min: T, max: T) {
        *self = Bounded::new(value, min, max);
    }

    pub fn increment(&mut self) -> &mut Self {
        self.shift_up(T::one());
        self
    }

    pub fn decrement(&mut self) -> &mut Self {
        self.shift_down(T::one());
        self
    }

    fn shift_up(&mut self, step: T) {
        if step > T::zero() && self.value <= self.max {
            let headroom = self.max - self.value;
            if step > headroom {
                self.value = P::above(step - headroom, self.min, self.max);
                return;
            }
        }
        self.set(self.value + step);
    }

    fn shift_down(&mut self, step: T) {
        if step > T::zero() && self.value >= self.min {
            let room = self.value - self.min;
            if step > room {
                self.value = P::below(step - room, self.min, self.max);
                return;
            }
        }
        self.set(self.value - step);
    }
}

impl<T: fmt::Display, P> fmt::Display for Bounded<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <= {} <= {}", self.min, self.value, self.max)
    }
}

impl<T, P> AddAssign<T> for Bounded<T, P>
where
    T: Num + PartialOrd + Copy,
    P: BoundPolicy<T>,
{
    fn add_assign(&mut self, rhs: T) {
        self.shift_up(rhs);
    }
}

impl<T, P> SubAssign<T> for Bounded<T, P>
where
    T: Num + PartialOrd + Copy,
    P: BoundPolicy<T>,
{
    fn sub_assign(&mut self, rhs: T) {
        self.shift_down(rhs);
    }
}

impl<T, P> MulAssign<T> for Bounded<T, P>
where
    T: Num + PartialOrd + Copy,
    P: BoundPolicy<T>,
{
    fn mul_assign(&mut self, rhs: T) {
        self.set(self.value * rhs);
    }
}

impl<T, P> DivAssign<T> for Bounded<T, P>
where
    T: Num + PartialOrd + Copy,
    P: BoundPolicy<T>,
{
    fn div_assign(&mut self, rhs: T) {
        self.set(self.value / rhs);
    }
}

macro_rules! bounded_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl<T, P> $imp<T> for Bounded<T, P>
        where
            T: Num + PartialOrd + Copy,
            P: BoundPolicy<T>,
        {
            type Output = Bounded<T, P>;

            fn $method(mut self, rhs: T) -> Bounded<T, P> {
                $assign_imp::$assign_method(&mut self, rhs);
                self
            }
        }
    };
}

bounded_binop!(Add, add, AddAssign, add_assign);
bounded_binop!(Sub, sub, SubAssign, sub_assign);
bounded_binop!(Mul, mul, MulAssign, mul_assign);
bounded_binop!(Div, div, DivAssign, div_assign);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_float_eq;

    #[test]
    fn test_bound_clamps_on_construction() {
        assert_eq!(Bound::new(15, 0, 10).value(), 10);
        assert_eq!(Bound::new(-3, 0, 10).value(), 0);
        assert_eq!(Bound::new(4, 0, 10).value(), 4);
    }

    #[test]
    fn test_bound_clamps_after_arithmetic() {
        let mut b = Bound::new(5.0, 1.0, 10.0);
        b += 10.0;
        assert_eq!(b.value(), 10.0);
        b -= 20.0;
        assert_eq!(b.value(), 1.0);
        b *= 4.0;
        assert_eq!(b.value(), 4.0);
        b /= 8.0;
        assert_eq!(b.value(), 1.0);
        assert_eq!((b + 2.5).value(), 3.5);
    }

    #[test]
    fn test_bound_increment_saturates() {
        let mut b = Bound::new(9, 0, 10);
        b.increment().increment();
        assert_eq!(b.value(), 10);
        let mut b = Bound::new(1, 0, 10);
        b.decrement().decrement();
        assert_eq!(b.value(), 0);
    }

    #[test]
    fn test_cyclic_steps_through_period() {
        let mut c = Cyclic::new(1.0, 0.0, 3.0);
        let mut seen = Vec::new();
        for _ in 0..4 {
            c += 1.0;
            seen.push(c.value());
        }
        assert_eq!(seen, vec![2.0, 3.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cyclic_wraps_below_min() {
        let mut c = Cyclic::new(0, 0, 3);
        c.decrement();
        assert_eq!(c.value(), 3);
        c -= 3;
        assert_eq!(c.value(), 0);
        c -= 6;
        assert_eq!(c.value(), 2);
    }

    #[test]
    fn test_cyclic_wraps_large_offsets() {
        let c = Cyclic::new(0, 0, 23) + 50;
        assert_eq!(c.value(), 2);
        let c = Cyclic::new(10, 5, 9);
        assert_eq!(c.value(), 5);
    }

    #[test]
    fn test_bounds_changes_reapply_policy() {
        let mut b = Bound::new(8, 0, 10);
        b.set_max(5);
        assert_eq!(b.value(), 5);
        b.set_min(7);
        assert_eq!(b.value(), 7);
        b.set_all(100, 0, 50);
        assert_eq!((b.min(), b.value(), b.max()), (0, 50, 50));
    }

    #[test]
    fn test_range_ratio_and_display() {
        let b = Bound::new(2.5, 0.0, 10.0);
        assert_eq!(b.range(), 10.0);
        assert_float_eq(b.ratio(), 0.25, 1e-12);
        assert_eq!(b.to_string(), "0 <= 2.5 <= 10");
        assert_eq!(Cyclic::new(3, 1, 5).to_string(), "1 <= 3 <= 5");
    }

    #[test]
    fn test_unsigned_values_wrap_and_clamp_below_zero() {
        let mut hour = Cyclic::<u32>::new(0, 0, 23);
        hour.decrement();
        assert_eq!(hour.value(), 23);
        hour -= 48;
        assert_eq!(hour.value(), 23);
        hour -= 25;
        assert_eq!(hour.value(), 22);

        let mut level = Bound::<u32>::new(0, 0, 10);
        level -= 1;
        assert_eq!(level.value(), 0);
        level.decrement();
        assert_eq!(level.value(), 0);
        assert_eq!((Bound::<u32>::new(3, 2, 10) - 5).value(), 2);
    }

    #[test]
    fn test_unsigned_values_stay_below_type_max() {
        let mut level = Bound::<u8>::new(250, 0, 255);
        level += 10;
        assert_eq!(level.value(), 255);

        let mut tick = Cyclic::<u8>::new(250, 0, 253);
        tick += 10;
        assert_eq!(tick.value(), 6);
    }
}
