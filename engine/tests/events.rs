//! Event-level behavior of the calculator, observed through a recording view.

use nncalc_engine::{
    CalcError, CalcView, Calculator, Digit, Event, INT_LIMIT, Legality, Natural, Operands,
    Operation,
};

/// Captures everything the calculator pushes, in order.
#[derive(Debug, Default)]
struct RecordingView {
    top: Option<String>,
    bottom: Option<String>,
    subtract: Option<bool>,
    divide: Option<bool>,
    power: Option<bool>,
    root: Option<bool>,
    updates: usize,
}

impl RecordingView {
    fn flags(&self) -> Legality {
        Legality {
            subtract_allowed: self.subtract.expect("subtract flag pushed"),
            divide_allowed: self.divide.expect("divide flag pushed"),
            power_allowed: self.power.expect("power flag pushed"),
            root_allowed: self.root.expect("root flag pushed"),
        }
    }

    fn shown(&self) -> (&str, &str) {
        (
            self.top.as_deref().expect("top pushed"),
            self.bottom.as_deref().expect("bottom pushed"),
        )
    }
}

impl CalcView for RecordingView {
    fn update_top_display(&mut self, top: &Natural) {
        self.top = Some(top.to_string());
        self.updates += 1;
    }

    fn update_bottom_display(&mut self, bottom: &Natural) {
        self.bottom = Some(bottom.to_string());
        self.updates += 1;
    }

    fn update_subtract_allowed(&mut self, allowed: bool) {
        self.subtract = Some(allowed);
        self.updates += 1;
    }

    fn update_divide_allowed(&mut self, allowed: bool) {
        self.divide = Some(allowed);
        self.updates += 1;
    }

    fn update_power_allowed(&mut self, allowed: bool) {
        self.power = Some(allowed);
        self.updates += 1;
    }

    fn update_root_allowed(&mut self, allowed: bool) {
        self.root = Some(allowed);
        self.updates += 1;
    }
}

fn nat(value: u32) -> Natural {
    Natural::from(value)
}

fn calc(top: u32, bottom: u32) -> Calculator<RecordingView> {
    Calculator::with_operands(
        Operands::new(nat(top), nat(bottom)),
        RecordingView::default(),
    )
}

fn digit(value: u8) -> Digit {
    Digit::new(value).expect("valid digit")
}

const SAMPLES: [u32; 7] = [0, 1, 2, 5, 7, 12, 1000];

#[test]
fn construction_syncs_view() {
    let calculator = Calculator::new(RecordingView::default());
    assert_eq!(calculator.view().shown(), ("0", "0"));
    assert_eq!(calculator.view().updates, 6);
    assert_eq!(calculator.view().flags(), calculator.legality());
}

#[test]
fn every_event_pushes_all_six_updates() {
    let mut calculator = calc(20, 4);
    let before = calculator.view().updates;
    calculator.apply(Event::Divide).expect("divide allowed");
    assert_eq!(calculator.view().updates, before + 6);
}

#[test]
fn add_sums_into_bottom_and_zeroes_top() {
    for top in SAMPLES {
        for bottom in SAMPLES {
            let mut c = calc(top, bottom);
            c.add();
            assert_eq!(c.bottom(), &nat(bottom + top));
            assert!(c.top().is_zero());
        }
    }
}

#[test]
fn subtract_when_allowed() {
    for top in SAMPLES {
        for bottom in SAMPLES.iter().copied().filter(|b| *b <= top) {
            let mut c = calc(top, bottom);
            c.subtract().expect("bottom <= top");
            assert_eq!(c.bottom(), &nat(top - bottom));
            assert!(c.top().is_zero());
        }
    }
}

#[test]
fn multiply_promotes_product() {
    let mut c = calc(12, 1000);
    c.multiply();
    assert_eq!(c.view().shown(), ("0", "12000"));
}

#[test]
fn divide_satisfies_quotient_remainder_identity() {
    for top in SAMPLES {
        for bottom in SAMPLES.iter().copied().filter(|b| *b > 0) {
            let mut c = calc(top, bottom);
            c.divide().expect("bottom > 0");

            let mut rebuilt = c.bottom().clone();
            rebuilt.multiply(&nat(bottom));
            rebuilt.add(c.top());
            assert_eq!(rebuilt, nat(top), "{top} / {bottom}");
            assert!(c.top() < &nat(bottom));

            // Flags describe the new state, not the old one.
            assert_eq!(c.view().flags(), Legality::of(c.operands()));
        }
    }
}

#[test]
fn divide_flags_follow_new_bottom() {
    // 3 / 5 = 0 rem 3: the quotient in bottom is zero, so divide turns off.
    let mut c = calc(3, 5);
    assert!(c.view().flags().divide_allowed);
    c.divide().expect("bottom > 0");
    assert_eq!(c.view().shown(), ("3", "0"));
    assert!(!c.view().flags().divide_allowed);
    assert!(c.view().flags().subtract_allowed);
}

#[test]
fn swap_twice_is_identity() {
    for top in SAMPLES {
        for bottom in SAMPLES {
            let mut c = calc(top, bottom);
            c.swap();
            assert_eq!((c.top(), c.bottom()), (&nat(bottom), &nat(top)));
            c.swap();
            assert_eq!((c.top(), c.bottom()), (&nat(top), &nat(bottom)));
        }
    }
}

#[test]
fn clear_never_touches_top() {
    for top in SAMPLES {
        let mut c = calc(top, 77);
        c.clear();
        assert_eq!(c.top(), &nat(top));
        assert!(c.bottom().is_zero());
    }
}

#[test]
fn digits_accumulate_positionally() {
    let mut c = Calculator::new(RecordingView::default());
    let digits = [9u8, 0, 0, 7, 1, 9, 9, 2, 5, 4, 7, 4, 0, 9, 9, 3, 1, 2, 3, 4, 5];
    let mut expected = String::new();
    for d in digits {
        c.append_digit(digit(d));
        expected.push(char::from(b'0' + d));
    }
    assert_eq!(c.bottom().to_string(), expected);
    assert_eq!(c.view().shown().1, expected);
}

#[test]
fn leading_zero_digits_collapse() {
    let mut c = Calculator::default();
    for d in [0u8, 0, 4, 2] {
        c.append_digit(digit(d));
    }
    assert_eq!(c.bottom(), &nat(42));
}

#[test]
fn documented_legality_examples() {
    let c = calc(5, 7);
    assert_eq!(
        c.view().flags(),
        Legality {
            subtract_allowed: false,
            divide_allowed: true,
            power_allowed: true,
            root_allowed: true,
        }
    );

    let c = calc(5, 0);
    assert_eq!(
        c.view().flags(),
        Legality {
            subtract_allowed: true,
            divide_allowed: false,
            power_allowed: true,
            root_allowed: false,
        }
    );
}

#[test]
fn entry_scenario() {
    let mut c = Calculator::new(RecordingView::default());
    c.apply(Event::AppendDigit(digit(5))).expect("digit");
    assert_eq!(c.view().shown(), ("0", "5"));
    c.apply(Event::Enter).expect("enter");
    assert_eq!(c.view().shown(), ("5", "5"));
    c.apply(Event::Clear).expect("clear");
    assert_eq!(c.view().shown(), ("5", "0"));
    c.apply(Event::AppendDigit(digit(3))).expect("digit");
    assert_eq!(c.view().shown(), ("5", "3"));
    c.apply(Event::Add).expect("add");
    assert_eq!(c.view().shown(), ("0", "8"));
}

#[test]
fn gated_events_reject_without_mutation() {
    let cases = [
        (calc(2, 3), Event::Subtract, Operation::Subtract),
        (calc(2, 0), Event::Divide, Operation::Divide),
        (calc(2, 1), Event::Root, Operation::Root),
        (calc(2, 0), Event::Root, Operation::Root),
    ];
    for (mut c, event, op) in cases {
        let before = c.operands().clone();
        let updates = c.view().updates;
        assert_eq!(c.apply(event), Err(CalcError::PreconditionViolation { op }));
        assert_eq!(c.operands(), &before);
        assert_eq!(c.view().updates, updates, "rejected events do not repaint");
    }
}

#[test]
fn power_and_root_reject_oversized_bottom() {
    let big = Natural::from(u64::from(INT_LIMIT) + 1);
    for event in [Event::Power, Event::Root] {
        let mut c = Calculator::with_operands(
            Operands::new(nat(2), big.clone()),
            RecordingView::default(),
        );
        assert_eq!(
            c.apply(event),
            Err(CalcError::PreconditionViolation {
                op: event.operation()
            })
        );
        assert_eq!(c.bottom(), &big);
    }
}

#[test]
fn power_of_zero_exponent_is_one() {
    let mut c = calc(0, 0);
    c.power().expect("exponent 0 fits");
    assert_eq!(c.view().shown(), ("0", "1"));
}

#[test]
fn large_values_flow_through() {
    // 2^200, then its 8th root is 2^25.
    let mut c = calc(2, 200);
    c.power().expect("small exponent");
    assert_eq!(c.bottom().decimal_len(), 61);
    c.swap();
    c.append_digit(digit(8));
    c.root().expect("index 8");
    assert_eq!(c.bottom(), &nat(1 << 25));
}
