mod common;
use crate::common::init_tracing;

use std::time::Duration;

use proptest::prelude::*;

use automgr::lifetime::Lifetime;

#[test]
fn literal_seconds_resolve_exactly() {
    init_tracing();

    let lifetime: Lifetime = "90".parse().unwrap();
    assert_eq!(lifetime, Lifetime::Seconds(90.0));
    assert_eq!(lifetime.remaining().unwrap(), Duration::from_secs(90));

    let fractional: Lifetime = "1.5".parse().unwrap();
    assert_eq!(fractional.remaining().unwrap(), Duration::from_secs_f64(1.5));
}

#[test]
fn span_components_resolve_to_seconds() {
    let cases = [
        ("2h30m", 9_000),
        ("45s", 45),
        ("1h", 3_600),
        ("90m10s", 5_410),
    ];
    for (expr, expected) in cases {
        let lifetime: Lifetime = expr.parse().unwrap();
        assert_eq!(
            lifetime.remaining().unwrap(),
            Duration::from_secs(expected),
            "expression {expr}"
        );
    }
}

#[test]
fn negative_budget_clamps_to_zero() {
    let lifetime = Lifetime::Seconds(-5.0);
    assert_eq!(lifetime.remaining().unwrap(), Duration::ZERO);

    let parsed: Lifetime = "-5".parse().unwrap();
    assert_eq!(parsed.remaining().unwrap(), Duration::ZERO);
}

#[test]
fn midnight_is_at_most_a_day_away() {
    for expr in ["midnight", "next midnight", "Next Midnight"] {
        let lifetime: Lifetime = expr.parse().unwrap();
        assert_eq!(lifetime, Lifetime::NextMidnight);

        let remaining = lifetime.remaining().unwrap();
        assert!(remaining > Duration::ZERO);
        assert!(remaining <= Duration::from_secs(86_401), "expression {expr}");
    }
}

#[test]
fn clock_target_is_at_most_a_day_away() {
    let lifetime: Lifetime = "06:30".parse().unwrap();

    let remaining = lifetime.remaining().unwrap();
    assert!(remaining > Duration::ZERO);
    assert!(remaining <= Duration::from_secs(86_401));
}

#[test]
fn garbage_expressions_are_rejected() {
    for expr in ["", "soon", "2x", "h", "12:5", "25:00", "inf", "nan"] {
        assert!(
            expr.parse::<Lifetime>().is_err(),
            "expression {expr:?} should not parse"
        );
    }
}

proptest! {
    /// Any h/m/s combination resolves to exactly its arithmetic total.
    #[test]
    fn span_arithmetic_holds(h in 0u64..48, m in 0u64..60, s in 0u64..60) {
        prop_assume!(h + m + s > 0);

        let expr = format!("{h}h{m}m{s}s");
        let lifetime: Lifetime = expr.parse().unwrap();
        let expected = h * 3_600 + m * 60 + s;
        prop_assert_eq!(lifetime.remaining().unwrap(), Duration::from_secs(expected));
    }
}
