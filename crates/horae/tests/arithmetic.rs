//! Cross-type arithmetic properties: durations against dates and
//! instants, normalization behavior, range edges.

use horae::{Date, DateTimeError, Duration, Instant, Normalized, SpanError};

#[test]
fn duration_canonicalizes_negative_seconds() {
    let d = Duration::new(0, -1, 0).unwrap();
    assert_eq!((d.days(), d.seconds(), d.microseconds()), (-1, 86_399, 0));
}

#[test]
fn duration_day_count_is_bounded() {
    assert_eq!(
        Duration::from_days(1_000_000_000).unwrap_err(),
        SpanError::Overflow {
            days: 1_000_000_000
        }
    );
}

#[test]
fn date_plus_one_day_respects_leap_years() {
    let one_day = Duration::from_days(1).unwrap();
    assert_eq!(
        Date::new(2024, 2, 28).unwrap().checked_add(one_day).unwrap(),
        Date::new(2024, 2, 29).unwrap()
    );
    assert_eq!(
        Date::new(2023, 2, 28).unwrap().checked_add(one_day).unwrap(),
        Date::new(2023, 3, 1).unwrap()
    );
}

#[test]
fn instant_add_then_sub_is_identity() {
    let start = Instant::new(2024, 3, 15, 13, 45, 30, 123_456, None).unwrap();
    let spans = [
        Duration::RESOLUTION,
        Duration::from_seconds(1).unwrap(),
        Duration::from_hours(36).unwrap(),
        Duration::new(400, 7_200, 123).unwrap(),
        Duration::from_days(-1000).unwrap(),
    ];
    for span in spans {
        let there = start.checked_add(span).unwrap();
        let back = there.checked_sub(span).unwrap();
        assert_eq!(back, start, "not inverse for {span}");
        assert_eq!(there.since(&start).unwrap(), span);
    }
}

#[test]
fn since_is_antisymmetric() {
    let a = Instant::new(2024, 1, 1, 0, 0, 0, 0, None).unwrap();
    let b = Instant::new(2024, 3, 1, 6, 30, 0, 500_000, None).unwrap();
    let forward = b.since(&a).unwrap();
    let backward = a.since(&b).unwrap();
    assert_eq!(forward.checked_neg().unwrap(), backward);
    assert_eq!(a.checked_add(forward).unwrap(), b);
}

#[test]
fn normalization_is_idempotent_over_instant_arithmetic() {
    // Wildly overflowed tuples settle in one pass.
    let n = Normalized::new(2023, 26, -40, 100, -500, 3_661, 2_500_000);
    let again = Normalized::new(
        n.year(),
        i64::from(n.month()),
        i64::from(n.day()),
        i64::from(n.hour()),
        i64::from(n.minute()),
        i64::from(n.second()),
        i64::from(n.microsecond()),
    );
    assert_eq!(n, again);
}

#[test]
fn year_range_is_enforced_at_both_ends() {
    let one_day = Duration::from_days(1).unwrap();
    assert_eq!(
        Date::MAX.checked_add(one_day).unwrap_err(),
        DateTimeError::YearOverflow { year: 10000 }
    );
    assert_eq!(
        Instant::MIN.checked_sub(Duration::RESOLUTION).unwrap_err(),
        DateTimeError::YearOverflow { year: 0 }
    );
    // The full range is reachable without overflow.
    let span = Instant::MAX.since(&Instant::MIN).unwrap();
    assert_eq!(Instant::MIN.checked_add(span).unwrap(), Instant::MAX);
}

#[test]
fn date_difference_roundtrips_through_ordinals() {
    let a = Date::new(9999, 12, 31).unwrap();
    let b = Date::new(1, 1, 1).unwrap();
    let span = a - b;
    assert_eq!(b.checked_add(span).unwrap(), a);
    assert_eq!(span.days(), a.to_ordinal() - b.to_ordinal());
}

#[test]
fn duration_floor_division_matches_floored_semantics() {
    let d = Duration::from_seconds(7).unwrap();
    assert_eq!(d.div_floor(2).unwrap(), Duration::new(0, 3, 500_000).unwrap());
    assert_eq!(
        d.div_floor(-2).unwrap(),
        Duration::new(0, -4, 500_000).unwrap()
    );
    assert_eq!(d.div_floor(0).unwrap_err(), SpanError::DivisionByZero);
}

#[test]
fn instant_sub_day_fields_all_carry() {
    let start = Instant::new(2024, 1, 1, 0, 0, 0, 0, None).unwrap();
    let back = start
        .checked_sub(Duration::new(0, 1, 1).unwrap())
        .unwrap();
    assert_eq!(
        back,
        Instant::new(2023, 12, 31, 23, 59, 58, 999_999, None).unwrap()
    );
}
