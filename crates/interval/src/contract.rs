//! Backward (contractor) operators.
//!
//! Given the range `y` of an operator's output, each function narrows its
//! inputs in place to the values consistent with that range. Inputs are
//! always intersected with their prior range, so they can only shrink, and
//! they may shrink to empty.
//!
//! These operators are the building blocks of HC4-style constraint
//! propagation; see `Expr::project` in `braid-core`.
//!
//! # Example
//!
//! ```
//! use braid_interval::{Interval, contract};
//!
//! // x^2 = [4, 9] with x in [-10, 2.5] leaves x in [-3, 2.5].
//! let y = Interval::of(4.0, 9.0).unwrap();
//! let mut x = Interval::of(-10.0, 2.5).unwrap();
//! contract::sqr_bwd(y, &mut x);
//! assert_eq!(x, Interval::of(-3.0, 2.5).unwrap());
//! ```

use crate::Interval;

/// Contracts `x` with respect to `y = -x`.
pub fn neg_bwd(y: Interval, x: &mut Interval) {
    x.set_to_inter(-y);
}

/// Contracts `x1` and `x2` with respect to `y = x1 + x2`.
pub fn add_bwd(y: Interval, x1: &mut Interval, x2: &mut Interval) {
    x1.set_to_inter(y - *x2);
    x2.set_to_inter(y - *x1);
}

/// Contracts `x1` and `x2` with respect to `y = x1 - x2`.
pub fn sub_bwd(y: Interval, x1: &mut Interval, x2: &mut Interval) {
    x1.set_to_inter(y + *x2);
    x2.set_to_inter(*x1 - y);
}

/// Contracts `x` with respect to `y = a * x`.
///
/// With `a = 0` the output is always `[0, 0]`, so `x` is kept when `y`
/// contains zero and emptied otherwise. A non-finite `a` empties `x`.
pub fn scale_bwd(a: f64, y: Interval, x: &mut Interval) {
    if !a.is_finite() {
        x.set_to_empty();
    } else if a == 0.0 {
        if !y.contains(0.0) {
            x.set_to_empty();
        }
    } else {
        x.set_to_inter(y.div_scalar(a));
    }
}

/// Contracts `x` with respect to `y = x^2`.
pub fn sqr_bwd(y: Interval, x: &mut Interval) {
    let root = y.sqrt();
    let negative = Interval::inter(*x, -root);
    let positive = Interval::inter(*x, root);
    x.assign(Interval::hull(negative, positive));
}

/// Contracts `x` with respect to `y = sqrt(x)`.
pub fn sqrt_bwd(y: Interval, x: &mut Interval) {
    x.set_to_inter(y.sqr());
}
