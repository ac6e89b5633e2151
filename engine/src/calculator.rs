//! The operation engine.
//!
//! Every event follows the same shape: check the gate (for gated events),
//! transform the operands, then publish the new operands and legality to the
//! view. A rejected event returns before the transform, so the operands are
//! never left half-updated.

use nncalc_types::{CalcError, Digit, Natural, Operation};

use crate::{CalcView, Event, Legality, NullView, Operands};

#[derive(Debug)]
pub struct Calculator<V: CalcView = NullView> {
    operands: Operands,
    view: V,
}

impl Default for Calculator<NullView> {
    fn default() -> Self {
        Self::new(NullView)
    }
}

impl<V: CalcView> Calculator<V> {
    /// Start a session with both operands at zero and sync the view once.
    pub fn new(view: V) -> Self {
        Self::with_operands(Operands::default(), view)
    }

    /// Start from explicit operands (restored sessions, tests).
    pub fn with_operands(operands: Operands, view: V) -> Self {
        let mut calculator = Self { operands, view };
        calculator.refresh_view();
        calculator
    }

    #[inline]
    #[must_use]
    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    #[inline]
    #[must_use]
    pub fn top(&self) -> &Natural {
        self.operands.top()
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> &Natural {
        self.operands.bottom()
    }

    #[must_use]
    pub fn legality(&self) -> Legality {
        Legality::of(&self.operands)
    }

    #[inline]
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Dispatch a single event to its handler.
    pub fn apply(&mut self, event: Event) -> Result<(), CalcError> {
        match event {
            Event::Clear => self.clear(),
            Event::Swap => self.swap(),
            Event::Enter => self.enter(),
            Event::Add => self.add(),
            Event::Subtract => self.subtract()?,
            Event::Multiply => self.multiply(),
            Event::Divide => self.divide()?,
            Event::Power => self.power()?,
            Event::Root => self.root()?,
            Event::AppendDigit(digit) => self.append_digit(digit),
        }
        Ok(())
    }

    /// `bottom = 0`. Top is untouched.
    pub fn clear(&mut self) {
        self.operands.bottom_mut().clear();
        self.finish(Operation::Clear);
    }

    /// `(top, bottom) = (bottom, top)`.
    pub fn swap(&mut self) {
        let (top, bottom) = self.operands.split_mut();
        std::mem::swap(top, bottom);
        self.finish(Operation::Swap);
    }

    /// `top = bottom`. Bottom keeps its value.
    pub fn enter(&mut self) {
        let (top, bottom) = self.operands.split_mut();
        top.clone_from(bottom);
        self.finish(Operation::Enter);
    }

    /// `bottom = bottom + top; top = 0`.
    pub fn add(&mut self) {
        let (top, bottom) = self.operands.split_mut();
        bottom.add(top);
        top.clear();
        self.finish(Operation::Add);
    }

    /// `bottom = top - bottom; top = 0`. Requires `bottom <= top`.
    pub fn subtract(&mut self) -> Result<(), CalcError> {
        self.legality().ensure(Operation::Subtract)?;
        let (top, bottom) = self.operands.split_mut();
        top.subtract(bottom)?;
        bottom.transfer_from(top);
        self.finish(Operation::Subtract);
        Ok(())
    }

    /// `bottom = top * bottom; top = 0`.
    pub fn multiply(&mut self) {
        let (top, bottom) = self.operands.split_mut();
        top.multiply(bottom);
        bottom.transfer_from(top);
        self.finish(Operation::Multiply);
    }

    /// `bottom = top / bottom; top = top % bottom`. Requires `bottom > 0`.
    ///
    /// The remainder stays in `top` so a following Enter or operation can
    /// reuse it.
    pub fn divide(&mut self) -> Result<(), CalcError> {
        self.legality().ensure(Operation::Divide)?;
        let (top, bottom) = self.operands.split_mut();
        let mut remainder = top.divide(bottom)?;
        bottom.transfer_from(top);
        top.transfer_from(&mut remainder);
        self.finish(Operation::Divide);
        Ok(())
    }

    /// `bottom = top ^ bottom; top = 0`. Requires `bottom <= INT_LIMIT`.
    pub fn power(&mut self) -> Result<(), CalcError> {
        self.legality().ensure(Operation::Power)?;
        let (top, bottom) = self.operands.split_mut();
        let exponent = bottom.to_machine_int()?;
        top.power(exponent);
        bottom.transfer_from(top);
        self.finish(Operation::Power);
        Ok(())
    }

    /// `bottom = floor(top ^ (1 / bottom)); top = 0`. Requires
    /// `2 <= bottom <= INT_LIMIT`.
    pub fn root(&mut self) -> Result<(), CalcError> {
        self.legality().ensure(Operation::Root)?;
        let (top, bottom) = self.operands.split_mut();
        let index = bottom.to_machine_int()?;
        top.root(index)?;
        bottom.transfer_from(top);
        self.finish(Operation::Root);
        Ok(())
    }

    /// `bottom = bottom * 10 + digit`.
    pub fn append_digit(&mut self, digit: Digit) {
        self.operands.bottom_mut().append_digit(digit);
        self.finish(Operation::AppendDigit);
    }

    fn finish(&mut self, op: Operation) {
        tracing::debug!(
            op = %op,
            top_digits = self.operands.top().decimal_len(),
            bottom_digits = self.operands.bottom().decimal_len(),
            "Applied calculator event"
        );
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        let legality = Legality::of(&self.operands);
        self.view.update_top_display(self.operands.top());
        self.view.update_bottom_display(self.operands.bottom());
        self.view.update_subtract_allowed(legality.subtract_allowed);
        self.view.update_divide_allowed(legality.divide_allowed);
        self.view.update_power_allowed(legality.power_allowed);
        self.view.update_root_allowed(legality.root_allowed);
    }
}
