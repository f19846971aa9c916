use mortality_story::core::LinearScale;
use mortality_story::core::ticks::nice_ticks;
use proptest::prelude::*;

proptest! {
    #[test]
    fn year_scale_round_trip_property(
        year_start in 1800.0f64..2000.0,
        year_span in 1.0f64..300.0,
        value_factor in 0.0f64..1.0,
        width in 100.0f64..4000.0
    ) {
        let year_end = year_start + year_span;
        let value = year_start + value_factor * year_span;

        let scale = LinearScale::new(year_start, year_end)
            .expect("valid scale")
            .with_range(0.0, width)
            .expect("valid range");

        let px = scale.map(value).expect("to pixel");
        let recovered = scale.invert(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7);
        prop_assert!((-1e-9..=width + 1e-9).contains(&px));
    }

    #[test]
    fn rate_scale_grows_upward(
        max_rate in 1.0f64..2000.0,
        low_factor in 0.0f64..0.5,
        high_factor in 0.5f64..1.0,
        height in 50.0f64..1000.0
    ) {
        let scale = LinearScale::new(0.0, max_rate * 1.05)
            .expect("valid scale")
            .with_range(height, 0.0)
            .expect("valid range");

        let low = scale.map(max_rate * low_factor).expect("low");
        let high = scale.map(max_rate * high_factor).expect("high");
        prop_assert!(high <= low);
    }

    #[test]
    fn nice_ticks_stay_inside_domain_and_ascend(
        start in -10_000.0f64..10_000.0,
        span in 0.01f64..100_000.0,
        count in 1usize..20
    ) {
        let stop = start + span;
        let ticks = nice_ticks(start, stop, count);
        prop_assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        let tolerance = span * 1e-9;
        prop_assert!(
            ticks
                .iter()
                .all(|tick| *tick >= start - tolerance && *tick <= stop + tolerance)
        );
    }
}
