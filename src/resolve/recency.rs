//! Pick the most recent reference period among a country's indicators.

use chrono::NaiveDate;

use crate::parse::parse_period;

/// Winning period token plus its parsed date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recency {
    /// Original token, as shown on the page ("" when nothing parsed).
    pub period: String,
    pub date: Option<NaiveDate>,
}

/// Most recent of `periods`. Unparseable tokens are ignored; on equal dates
/// the earlier token in `periods` is kept.
pub fn most_recent_period<S: AsRef<str>>(periods: &[S]) -> Recency {
    let mut best = Recency::default();
    for raw in periods {
        let raw = raw.as_ref();
        let Some(date) = parse_period(raw) else {
            continue;
        };
        if best.date.is_none_or(|d| date > d) {
            best = Recency {
                period: raw.to_string(),
                date: Some(date),
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_latest_month() {
        let r = most_recent_period(&["Dec/25", "Sep/25", "Q3/25"]);
        assert_eq!(r.period, "Dec/25");
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2025, 12, 1));
    }

    #[test]
    fn order_does_not_matter_for_distinct_dates() {
        assert_eq!(most_recent_period(&["Q3/25", "Sep/25", "Dec/25"]).period, "Dec/25");
        assert_eq!(most_recent_period(&["Q4/25", "Nov/25"]).period, "Nov/25");
    }

    #[test]
    fn nothing_parseable_gives_empty() {
        let r = most_recent_period(&["", "n/a", ""]);
        assert_eq!(r, Recency::default());
        assert_eq!(r.period, "");
    }

    #[test]
    fn short_year_month_tokens_do_not_win() {
        let r = most_recent_period(&["Dec 25", "", "n/a"]);
        assert_eq!(r, Recency::default());
        assert_eq!(most_recent_period(&["Dec 25", "Jan/24"]).period, "Jan/24");
    }

    #[test]
    fn unparseable_entries_are_skipped() {
        assert_eq!(most_recent_period(&["Xyz/99", "", "Jan/24"]).period, "Jan/24");
    }

    #[test]
    fn ties_keep_first_token() {
        // Jul 2025 either way; first token wins.
        assert_eq!(most_recent_period(&["Q3/25", "Jul/25"]).period, "Q3/25");
        assert_eq!(most_recent_period(&["jul/25", "Jul/25"]).period, "jul/25");
    }
}
