use chrono::Duration;
use proptest::prelude::*;
use test_fixtures::{instant, press_release};
use toolrank_core::traits::IDecayModel;
use toolrank_news::{decay_for_age, NewsDecayModel};

proptest! {
    #[test]
    fn decay_is_positive_and_at_most_one(age in 0.0f64..1e7) {
        let d = decay_for_age(age, 365.0, 1.5);
        prop_assert!(d > 0.0);
        prop_assert!(d <= 1.0);
    }

    #[test]
    fn decay_is_non_increasing(a in 0.0f64..1e5, b in 0.0f64..1e5) {
        let (young, old) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(decay_for_age(old, 365.0, 1.5) <= decay_for_age(young, 365.0, 1.5));
    }

    #[test]
    fn pr_without_credibility_is_decay_times_discount(days in 0i64..3650, base in -10.0f64..10.0) {
        let model = NewsDecayModel::default();
        let reference = instant(2025, 6, 30);
        let published = reference - Duration::days(days);
        let pr = press_release("p", "tool", published);
        let expected = base * model.decay_factor(published, reference) * 0.7;
        let impact = model.adjusted_impact(&pr, base, reference);
        prop_assert!((impact - expected).abs() <= 1e-12 * (1.0 + expected.abs()));
    }
}
