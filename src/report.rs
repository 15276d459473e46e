//! Plain-text rendering of projected trajectories.

use std::fmt::Write;

use kakeibo_core::SummaryService;
use kakeibo_domain::DailyBalance;

/// Renders the summary block followed by up to `highlight_limit` event days.
pub fn render_summary(
    trajectory: &[DailyBalance],
    currency: &str,
    highlight_limit: usize,
) -> String {
    let Some(summary) = SummaryService::summarize(trajectory) else {
        return "No projected days.\n".to_string();
    };

    let mut out = String::new();
    let first = trajectory.first().map(|day| day.date);
    let last = trajectory.last().map(|day| day.date);
    if let (Some(first), Some(last)) = (first, last) {
        let _ = writeln!(out, "Projection {} to {} ({} days)", first, last, trajectory.len());
    }
    let _ = writeln!(out, "Opening balance: {} {}", summary.opening, currency);
    let _ = writeln!(out, "Closing balance: {} {}", summary.closing, currency);
    let _ = writeln!(
        out,
        "Highest balance: {} {} on {}",
        summary.highest, currency, summary.highest_on
    );
    let _ = writeln!(
        out,
        "Lowest balance: {} {} on {}",
        summary.lowest, currency, summary.lowest_on
    );
    let _ = writeln!(out, "Total credits: {} {}", summary.total_credits, currency);
    let _ = writeln!(out, "Total debits: {} {}", summary.total_debits, currency);
    let _ = writeln!(out, "Event days: {}", summary.event_days);

    let highlights = SummaryService::highlights(trajectory, highlight_limit);
    if !highlights.is_empty() {
        let _ = writeln!(out, "Highlights:");
        for day in highlights {
            let _ = writeln!(out, "  {} (balance {} {})", day.date, day.balance, currency);
            for event in &day.events {
                let _ = writeln!(
                    out,
                    "    - {} {} {}",
                    event.direction, event.amount, event.description
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kakeibo_domain::{DayEvent, Direction, EventSource};
    use rust_decimal_macros::dec;

    #[test]
    fn renders_extremes_and_highlights() {
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let trajectory = vec![
            DailyBalance {
                date: day(1),
                balance: dec!(1000),
                events: vec![],
            },
            DailyBalance {
                date: day(2),
                balance: dec!(800),
                events: vec![DayEvent {
                    source: EventSource::Recurring,
                    description: "Rent".into(),
                    amount: dec!(200),
                    direction: Direction::Debit,
                }],
            },
        ];

        let text = render_summary(&trajectory, "JPY", 5);

        assert!(text.contains("Projection 2024-01-01 to 2024-01-02 (2 days)"));
        assert!(text.contains("Lowest balance: 800 JPY on 2024-01-02"));
        assert!(text.contains("    - debit 200 Rent"));
    }

    #[test]
    fn empty_trajectory_has_placeholder() {
        assert_eq!(render_summary(&[], "JPY", 5), "No projected days.\n");
    }
}
