//! Operator boilerplate shared by [`BaseUnit`](crate::BaseUnit) and [`Unit`](crate::Unit).
//!
//! Both types implement the compound-assignment traits by reference
//! (`impl MulAssign<&T> for T`); this macro derives the by-value assignment
//! and the binary operators from those.

macro_rules! forward_binops {
    ($t:ty => $($imp:ident $method:ident $assign_imp:ident $assign_method:ident),+ $(,)?) => {
        $(
            impl ::std::ops::$assign_imp<$t> for $t {
                fn $assign_method(&mut self, rhs: $t) {
                    ::std::ops::$assign_imp::$assign_method(self, &rhs);
                }
            }

            impl ::std::ops::$imp<&$t> for $t {
                type Output = $t;

                fn $method(mut self, rhs: &$t) -> $t {
                    ::std::ops::$assign_imp::$assign_method(&mut self, rhs);
                    self
                }
            }

            impl ::std::ops::$imp<$t> for $t {
                type Output = $t;

                fn $method(mut self, rhs: $t) -> $t {
                    ::std::ops::$assign_imp::$assign_method(&mut self, &rhs);
                    self
                }
            }

            impl ::std::ops::$imp<&$t> for &$t {
                type Output = $t;

                fn $method(self, rhs: &$t) -> $t {
                    let mut out = self.clone();
                    ::std::ops::$assign_imp::$assign_method(&mut out, rhs);
                    out
                }
            }
        )+
    };
}

pub(crate) use forward_binops;
