use std::ops::Index;

use crate::{BoxError, Interval};

/// An axis-aligned box: the Cartesian product of `n >= 1` intervals.
///
/// A box is either non-empty in every component or empty in every
/// component. Any update that empties one component empties them all, and
/// once empty a box stays empty. Because of this, components are read-only
/// through [`IntervalBox::get`] and indexing; updates go through
/// [`IntervalBox::set`] and [`IntervalBox::set_to_inter`].
///
/// `Clone` is a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalBox {
    components: Vec<Interval>,
}

impl IntervalBox {
    /// Creates a box of dimension `dim` with every component `(-oo, +oo)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::Dimension`] if `dim` is zero.
    pub fn new(dim: usize) -> Result<Self, BoxError> {
        Self::filled(dim, Interval::all_reals())
    }

    /// Creates a box of dimension `dim` with every component a copy of `x`.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::Dimension`] if `dim` is zero.
    pub fn filled(dim: usize, x: Interval) -> Result<Self, BoxError> {
        if dim == 0 {
            return Err(BoxError::Dimension);
        }
        Ok(Self {
            components: vec![x; dim],
        })
    }

    /// Creates a box from its components.
    ///
    /// If any component is empty the whole box is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::Dimension`] if `components` is empty.
    pub fn from_intervals(components: Vec<Interval>) -> Result<Self, BoxError> {
        if components.is_empty() {
            return Err(BoxError::Dimension);
        }
        let mut bx = Self { components };
        if bx.components.iter().any(Interval::is_empty) {
            bx.set_to_empty();
        }
        Ok(bx)
    }

    /// Creates the box `[lb_0, ub_0] x ... x [lb_n-1, ub_n-1]`.
    ///
    /// # Errors
    ///
    /// Fails if `bounds` is empty or any pair is not a valid interval.
    pub fn from_bounds(bounds: &[(f64, f64)]) -> Result<Self, BoxError> {
        let components = bounds
            .iter()
            .map(|&(lb, ub)| Interval::of(lb, ub))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_intervals(components)
    }

    /// Returns the number of components.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// Returns the `i`th component.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.dim()`.
    #[must_use]
    pub fn get(&self, i: usize) -> &Interval {
        &self.components[i]
    }

    /// Returns an iterator over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.components.iter()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.components
    }

    /// Copies the bounds of `x` into component `i`.
    ///
    /// Does nothing if the box is already empty. If `x` is empty the whole
    /// box becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.dim()`.
    pub fn set(&mut self, i: usize, x: Interval) {
        if self.is_empty() {
            return;
        }
        self.components[i].assign(x);
        if self.components[i].is_empty() {
            self.set_to_empty();
        }
    }

    /// Intersects component `i` with `x`.
    ///
    /// Returns true if the box is non-empty afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.dim()`.
    pub fn set_to_inter(&mut self, i: usize, x: Interval) -> bool {
        if self.is_empty() {
            return false;
        }
        self.components[i].set_to_inter(x);
        if self.components[i].is_empty() {
            self.set_to_empty();
            return false;
        }
        true
    }

    /// Intersects this box with `other`, component by component.
    ///
    /// Returns true if the box is non-empty afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::DimensionMismatch`] if the dimensions differ.
    pub fn set_to_inter_box(&mut self, other: &IntervalBox) -> Result<bool, BoxError> {
        self.check_dim(other.dim())?;
        if other.is_empty() {
            self.set_to_empty();
            return Ok(false);
        }
        for (i, x) in other.iter().enumerate() {
            if !self.set_to_inter(i, *x) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the smallest box containing both `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::DimensionMismatch`] if the dimensions differ.
    pub fn hull(a: &IntervalBox, b: &IntervalBox) -> Result<IntervalBox, BoxError> {
        a.check_dim(b.dim())?;
        if a.is_empty() {
            return Ok(b.clone());
        }
        if b.is_empty() {
            return Ok(a.clone());
        }
        let components = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| Interval::hull(*x, *y))
            .collect();
        Ok(Self { components })
    }

    /// Returns true if `point` lies in this box.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::DimensionMismatch`] if `point` has the wrong length.
    pub fn contains_point(&self, point: &[f64]) -> Result<bool, BoxError> {
        self.check_dim(point.len())?;
        Ok(!self.is_empty() && self.iter().zip(point).all(|(x, &v)| x.contains(v)))
    }

    /// Returns true if this box is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components[0].is_empty()
    }

    /// Makes every component empty.
    pub fn set_to_empty(&mut self) {
        for x in &mut self.components {
            x.set_to_empty();
        }
    }

    /// Returns the degenerate box at the midpoint of each component.
    ///
    /// # Errors
    ///
    /// Fails if any component has no midpoint (see [`Interval::mid`]).
    pub fn mid(&self) -> Result<IntervalBox, BoxError> {
        let components = self
            .iter()
            .map(|x| x.mid().and_then(Interval::point))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }

    /// Returns the index of the widest component, preferring the lowest
    /// index on ties.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::Empty`] for an empty box, or an interval error if a
    /// component is unbounded.
    pub fn widest(&self) -> Result<usize, BoxError> {
        self.extreme_diam_index(|candidate, best| candidate > best)
    }

    /// Returns the index of the narrowest component, preferring the lowest
    /// index on ties.
    ///
    /// # Errors
    ///
    /// Same as [`IntervalBox::widest`].
    pub fn narrowest(&self) -> Result<usize, BoxError> {
        self.extreme_diam_index(|candidate, best| candidate < best)
    }

    /// Returns the largest component diameter.
    ///
    /// # Errors
    ///
    /// Same as [`IntervalBox::widest`].
    pub fn max_diam(&self) -> Result<f64, BoxError> {
        Ok(self.components[self.widest()?].diam()?)
    }

    /// Returns the smallest component diameter.
    ///
    /// # Errors
    ///
    /// Same as [`IntervalBox::widest`].
    pub fn min_diam(&self) -> Result<f64, BoxError> {
        Ok(self.components[self.narrowest()?].diam()?)
    }

    /// Splits the widest component at its midpoint.
    ///
    /// Returns the lower and upper halves as independent boxes.
    ///
    /// # Errors
    ///
    /// Fails if the widest component cannot be determined or bisected.
    pub fn bisect(&self) -> Result<(IntervalBox, IntervalBox), BoxError> {
        self.bisect_axis(self.widest()?)
    }

    /// Splits component `axis` at its midpoint.
    ///
    /// # Errors
    ///
    /// Fails if the component cannot be bisected (see [`Interval::bisect`]).
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.dim()`.
    pub fn bisect_axis(&self, axis: usize) -> Result<(IntervalBox, IntervalBox), BoxError> {
        let point = self.components[axis].mid()?;
        self.bisect_at(axis, point)
    }

    /// Splits component `axis` at `point`.
    ///
    /// # Errors
    ///
    /// Fails if `point` is not strictly inside the component (see
    /// [`Interval::bisect_at`]).
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.dim()`.
    pub fn bisect_at(
        &self,
        axis: usize,
        point: f64,
    ) -> Result<(IntervalBox, IntervalBox), BoxError> {
        let (lower_half, upper_half) = self.components[axis].bisect_at(point)?;

        let mut lower = self.clone();
        lower.set(axis, lower_half);
        let mut upper = self.clone();
        upper.set(axis, upper_half);

        Ok((lower, upper))
    }

    fn extreme_diam_index<F>(&self, better: F) -> Result<usize, BoxError>
    where
        F: Fn(f64, f64) -> bool,
    {
        if self.is_empty() {
            return Err(BoxError::Empty);
        }
        let mut selected = 0;
        let mut best = self.components[0].diam()?;
        for (i, x) in self.components.iter().enumerate().skip(1) {
            let d = x.diam()?;
            if better(d, best) {
                selected = i;
                best = d;
            }
        }
        Ok(selected)
    }

    fn check_dim(&self, found: usize) -> Result<(), BoxError> {
        if found == self.dim() {
            Ok(())
        } else {
            Err(BoxError::DimensionMismatch {
                expected: self.dim(),
                found,
            })
        }
    }
}

impl Index<usize> for IntervalBox {
    type Output = Interval;

    fn index(&self, i: usize) -> &Interval {
        &self.components[i]
    }
}

impl<'a> IntoIterator for &'a IntervalBox {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
