use chrono::{Duration, NaiveDate};
use kakeibo_core::{project, ProjectionError};
use kakeibo_domain::{Direction, RecurringTransaction, WhatIfEvent};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Credit), Just(Direction::Debit)]
}

fn recurring_defs() -> impl Strategy<Value = Vec<RecurringTransaction>> {
    prop::collection::vec((1i64..100_000, direction(), 1u32..=31), 0..8).prop_map(|defs| {
        defs.into_iter()
            .enumerate()
            .map(|(idx, (amount, direction, day))| {
                RecurringTransaction::new(
                    format!("r{idx}"),
                    Decimal::new(amount, 2),
                    direction,
                    day,
                    None,
                )
                .unwrap()
            })
            .collect()
    })
}

fn what_if_defs() -> impl Strategy<Value = Vec<WhatIfEvent>> {
    prop::collection::vec((0i64..400, 1i64..100_000, direction()), 0..8).prop_map(|events| {
        events
            .into_iter()
            .enumerate()
            .map(|(idx, (offset, amount, direction))| {
                WhatIfEvent::new(
                    format!("w{idx}"),
                    base_date() + Duration::days(offset),
                    Decimal::new(amount, 2),
                    direction,
                    None,
                )
                .unwrap()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn output_is_dense_and_balance_is_continuous(
        start_offset in 0i64..60,
        span in 1i64..370,
        initial in 0i64..10_000_000,
        recurring in recurring_defs(),
        what_if in what_if_defs(),
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(span);
        let initial = Decimal::new(initial, 2);

        let trajectory = project(Some(start), Some(end), initial, &recurring, &what_if).unwrap();

        prop_assert_eq!(trajectory.len() as i64, span + 1);
        prop_assert_eq!(trajectory[0].date, start);
        prop_assert_eq!(trajectory.last().unwrap().date, end);

        let mut previous = initial;
        for (idx, day) in trajectory.iter().enumerate() {
            if idx > 0 {
                prop_assert_eq!(day.date, trajectory[idx - 1].date + Duration::days(1));
            }
            prop_assert_eq!(day.balance, previous + day.credits() - day.debits());
            previous = day.balance;
        }
    }

    #[test]
    fn repeated_runs_are_identical(
        span in 1i64..120,
        recurring in recurring_defs(),
        what_if in what_if_defs(),
    ) {
        let start = base_date();
        let end = start + Duration::days(span);
        let first = project(Some(start), Some(end), Decimal::ONE_HUNDRED, &recurring, &what_if).unwrap();
        let second = project(Some(start), Some(end), Decimal::ONE_HUNDRED, &recurring, &what_if).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn non_increasing_ranges_are_rejected(back in 0i64..365) {
        let start = base_date();
        let end = start - Duration::days(back);

        let result = project(Some(start), Some(end), Decimal::ZERO, &[], &[]);

        prop_assert_eq!(result, Err(ProjectionError::InvalidRange { start, end }));
    }
}
