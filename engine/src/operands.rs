use nncalc_types::Natural;

/// The operand pair. Both slots start at zero.
///
/// Outside this crate the operands are read-only; every mutation goes through
/// [`Calculator`](crate::Calculator) so legality is always recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operands {
    top: Natural,
    bottom: Natural,
}

impl Operands {
    #[must_use]
    pub fn new(top: Natural, bottom: Natural) -> Self {
        Self { top, bottom }
    }

    #[inline]
    #[must_use]
    pub fn top(&self) -> &Natural {
        &self.top
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> &Natural {
        &self.bottom
    }

    #[inline]
    pub(crate) fn bottom_mut(&mut self) -> &mut Natural {
        &mut self.bottom
    }

    /// Disjoint mutable borrows of `(top, bottom)`.
    #[inline]
    pub(crate) fn split_mut(&mut self) -> (&mut Natural, &mut Natural) {
        (&mut self.top, &mut self.bottom)
    }
}
