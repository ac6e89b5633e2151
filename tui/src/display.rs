//! Display state pushed by the calculator.

use nncalc_engine::{CalcView, Legality, Natural, Operation};

/// Rendered operands and legality flags, with a monotonic revision counter.
///
/// The calculator writes here through [`CalcView`] after every event; the
/// renderer only reads. The revision is bumped on every update so callers can
/// cheaply tell whether anything changed since the last frame.
#[derive(Debug, Clone)]
pub struct DisplayState {
    top: String,
    bottom: String,
    legality: Legality,
    revision: usize,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            top: "0".to_string(),
            bottom: "0".to_string(),
            legality: Legality {
                subtract_allowed: false,
                divide_allowed: false,
                power_allowed: false,
                root_allowed: false,
            },
            revision: 0,
        }
    }
}

impl DisplayState {
    #[inline]
    #[must_use]
    pub fn top(&self) -> &str {
        &self.top
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    #[inline]
    #[must_use]
    pub fn legality(&self) -> Legality {
        self.legality
    }

    #[must_use]
    pub fn allows(&self, op: Operation) -> bool {
        self.legality.allows(op)
    }

    #[inline]
    #[must_use]
    pub fn revision(&self) -> usize {
        self.revision
    }

    #[inline]
    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl CalcView for DisplayState {
    fn update_top_display(&mut self, top: &Natural) {
        self.top = top.to_string();
        self.bump();
    }

    fn update_bottom_display(&mut self, bottom: &Natural) {
        self.bottom = bottom.to_string();
        self.bump();
    }

    fn update_subtract_allowed(&mut self, allowed: bool) {
        self.legality.subtract_allowed = allowed;
        self.bump();
    }

    fn update_divide_allowed(&mut self, allowed: bool) {
        self.legality.divide_allowed = allowed;
        self.bump();
    }

    fn update_power_allowed(&mut self, allowed: bool) {
        self.legality.power_allowed = allowed;
        self.bump();
    }

    fn update_root_allowed(&mut self, allowed: bool) {
        self.legality.root_allowed = allowed;
        self.bump();
    }
}
