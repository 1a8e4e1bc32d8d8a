//! Directed rounding for interval bounds.
//!
//! Each helper computes the round-to-nearest result, then uses an error-free
//! transformation to learn on which side of the exact value it landed. The
//! result steps one ulp outward only when it landed on the wrong side, so
//! exact operations stay exact.
//!
//! Callers never pass operand pairs whose IEEE result is NaN (such as
//! `inf - inf` or `0 * inf`); the interval operators saturate those cases
//! before reaching this module.

/// Returns the least `f64` greater than `x`.
pub(crate) fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Returns the greatest `f64` less than `x`.
pub(crate) fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

/// Rounding error of `a + b` given the rounded sum `s` (Knuth's two-sum).
fn two_sum_err(a: f64, b: f64, s: f64) -> f64 {
    let bb = s - a;
    (a - (s - bb)) + (b - bb)
}

pub(crate) fn add_down(a: f64, b: f64) -> f64 {
    let s = a + b;
    if s.is_infinite() {
        return if s > 0.0 && a.is_finite() && b.is_finite() {
            f64::MAX
        } else {
            s
        };
    }
    if two_sum_err(a, b, s) < 0.0 {
        next_down(s)
    } else {
        s
    }
}

pub(crate) fn add_up(a: f64, b: f64) -> f64 {
    let s = a + b;
    if s.is_infinite() {
        return if s < 0.0 && a.is_finite() && b.is_finite() {
            -f64::MAX
        } else {
            s
        };
    }
    if two_sum_err(a, b, s) > 0.0 {
        next_up(s)
    } else {
        s
    }
}

pub(crate) fn sub_down(a: f64, b: f64) -> f64 {
    add_down(a, -b)
}

pub(crate) fn sub_up(a: f64, b: f64) -> f64 {
    add_up(a, -b)
}

/// Classifies a rounded product or quotient `r` that may have overflowed or
/// underflowed. Returns `Some(bound)` when the result is settled.
fn settle(r: f64, finite_operands: bool, nonzero_exact: bool, upward: bool) -> Option<f64> {
    if r.is_nan() {
        return Some(r);
    }
    if r.is_infinite() {
        if !finite_operands {
            return Some(r);
        }
        // Finite operands overflowed: the inner bound is the largest finite value.
        return Some(match (upward, r > 0.0) {
            (false, true) => f64::MAX,
            (true, false) => -f64::MAX,
            _ => r,
        });
    }
    // Gradual underflow loses the error-free residual.
    if nonzero_exact && r.abs() < f64::MIN_POSITIVE {
        return Some(if upward { next_up(r) } else { next_down(r) });
    }
    None
}

pub(crate) fn mul_down(a: f64, b: f64) -> f64 {
    let p = a * b;
    let finite = a.is_finite() && b.is_finite();
    if let Some(bound) = settle(p, finite, a != 0.0 && b != 0.0, false) {
        return bound;
    }
    if a.mul_add(b, -p) < 0.0 {
        next_down(p)
    } else {
        p
    }
}

pub(crate) fn mul_up(a: f64, b: f64) -> f64 {
    let p = a * b;
    let finite = a.is_finite() && b.is_finite();
    if let Some(bound) = settle(p, finite, a != 0.0 && b != 0.0, true) {
        return bound;
    }
    if a.mul_add(b, -p) > 0.0 {
        next_up(p)
    } else {
        p
    }
}

/// Sign of `a / b - q`, computed exactly from the fused residual `a - q * b`.
fn div_err(a: f64, b: f64, q: f64) -> f64 {
    let residual = -q.mul_add(b, -a);
    if b > 0.0 { residual } else { -residual }
}

pub(crate) fn div_down(a: f64, b: f64) -> f64 {
    let q = a / b;
    let finite = a.is_finite() && b.is_finite();
    if let Some(bound) = settle(q, finite, a != 0.0, false) {
        return bound;
    }
    if !finite || div_err(a, b, q) >= 0.0 {
        q
    } else {
        next_down(q)
    }
}

pub(crate) fn div_up(a: f64, b: f64) -> f64 {
    let q = a / b;
    let finite = a.is_finite() && b.is_finite();
    if let Some(bound) = settle(q, finite, a != 0.0, true) {
        return bound;
    }
    if !finite || div_err(a, b, q) <= 0.0 {
        q
    } else {
        next_up(q)
    }
}

pub(crate) fn sqrt_down(x: f64) -> f64 {
    let r = x.sqrt();
    if !r.is_finite() || r == 0.0 {
        return r;
    }
    if r.mul_add(r, -x) > 0.0 {
        next_down(r)
    } else {
        r
    }
}

pub(crate) fn sqrt_up(x: f64) -> f64 {
    let r = x.sqrt();
    if !r.is_finite() {
        return r;
    }
    if r == 0.0 {
        return if x > 0.0 { next_up(r) } else { r };
    }
    if r.mul_add(r, -x) < 0.0 { next_up(r) } else { r }
}
