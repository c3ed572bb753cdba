use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use recur_core::*;

/// Any date between 2000-01-01 and roughly 2040.
pub fn arb_date() -> impl Strategy<Value = NaiveDate> + Clone {
    (0u64..15_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

/// An anchor date and an end date no more than `max_span` days after it.
pub fn arb_range(max_span: u64) -> impl Strategy<Value = (NaiveDate, NaiveDate)> + Clone {
    (arb_date(), 0..=max_span).prop_map(|(anchor, span)| {
        (anchor, anchor.checked_add_days(Days::new(span)).unwrap())
    })
}

pub fn arb_frequency() -> impl Strategy<Value = Frequency> + Clone {
    prop_oneof![
        Just(Frequency::Daily),
        Just(Frequency::Weekly),
        Just(Frequency::Monthly),
        Just(Frequency::Yearly),
    ]
}

pub fn definition(anchor: NaiveDate, repeat: Repeat) -> EventDefinition {
    EventDefinition::new(
        "Generated",
        anchor,
        parse_time("08:00").unwrap(),
        parse_time("08:30").unwrap(),
    )
    .with_location("Somewhere")
    .with_repeat(repeat)
}
