use proptest::prelude::*;
use toolrank_core::models::Period;

proptest! {
    #[test]
    fn month_periods_round_trip_through_display(year in 1990i32..2100, month in 1u32..=12) {
        let period = Period::month(year, month).unwrap();
        prop_assert_eq!(Period::parse(&period.to_string()).unwrap(), period);
    }

    #[test]
    fn previous_and_next_are_inverse(year in 1990i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let month_period = Period::month(year, month).unwrap();
        prop_assert_eq!(month_period.previous().next(), month_period);
        let day_period = Period::day(year, month, day).unwrap();
        prop_assert_eq!(day_period.next().previous(), day_period);
    }

    #[test]
    fn end_instant_precedes_next_period(year in 1990i32..2100, month in 1u32..=12) {
        let period = Period::month(year, month).unwrap();
        let next_start = period.next().start_date().and_hms_opt(0, 0, 0).unwrap().and_utc();
        prop_assert!(period.end_instant() < next_start);
        prop_assert_eq!(period.end_instant().date_naive(), period.reference_date());
    }
}
