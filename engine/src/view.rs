use nncalc_types::Natural;

/// Presentation surface the calculator pushes to after every event.
///
/// Implementations only ever receive shared references; they cannot mutate
/// the operands they display.
pub trait CalcView {
    fn update_top_display(&mut self, top: &Natural);
    fn update_bottom_display(&mut self, bottom: &Natural);
    fn update_subtract_allowed(&mut self, allowed: bool);
    fn update_divide_allowed(&mut self, allowed: bool);
    fn update_power_allowed(&mut self, allowed: bool);
    fn update_root_allowed(&mut self, allowed: bool);
}

/// A view that discards every update. For headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl CalcView for NullView {
    fn update_top_display(&mut self, _top: &Natural) {}
    fn update_bottom_display(&mut self, _bottom: &Natural) {}
    fn update_subtract_allowed(&mut self, _allowed: bool) {}
    fn update_divide_allowed(&mut self, _allowed: bool) {}
    fn update_power_allowed(&mut self, _allowed: bool) {}
    fn update_root_allowed(&mut self, _allowed: bool) {}
}

impl<V: CalcView + ?Sized> CalcView for &mut V {
    fn update_top_display(&mut self, top: &Natural) {
        (**self).update_top_display(top);
    }

    fn update_bottom_display(&mut self, bottom: &Natural) {
        (**self).update_bottom_display(bottom);
    }

    fn update_subtract_allowed(&mut self, allowed: bool) {
        (**self).update_subtract_allowed(allowed);
    }

    fn update_divide_allowed(&mut self, allowed: bool) {
        (**self).update_divide_allowed(allowed);
    }

    fn update_power_allowed(&mut self, allowed: bool) {
        (**self).update_power_allowed(allowed);
    }

    fn update_root_allowed(&mut self, allowed: bool) {
        (**self).update_root_allowed(allowed);
    }
}
