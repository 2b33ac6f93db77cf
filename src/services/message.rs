use crate::domain::{ClassifiedRanking, RawRow};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const NO_DATA_NOTICE: &str = "⚠️ No military data found, or the MD/ML ranking could not be parsed.";
pub const FAILURE_NOTICE: &str = "❌ Error while fetching the MD/ML ranking.";

/// Renders the hourly post. `now` is shown as `HH:MM` in its own zone.
pub fn format_ranking<Tz>(ranking: &ClassifiedRanking, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut message = format!("🛡️ **Update at {}**\n\n", now.format("%H:%M"));

    message.push_str("📈 **Top** :\n");
    push_section(&mut message, &ranking.top);

    message.push_str("\n📉 **Flop** :\n");
    push_section(&mut message, &ranking.flop);

    message
}

fn push_section(message: &mut String, rows: &[RawRow]) {
    for (i, row) in rows.iter().enumerate() {
        message.push_str(&format_row(i + 1, row));
        message.push('\n');
    }
}

fn format_row(rank: usize, row: &RawRow) -> String {
    if row.alliance.is_empty() {
        format!("{}. {} : {}", rank, row.pseudo, row.points)
    } else {
        format!("{}. {} {} : {}", rank, row.pseudo, row.alliance, row.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(rfc3339: &str) -> DateTime<chrono_tz::Tz> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
            .with_timezone(&chrono_tz::Europe::Paris)
    }

    #[test]
    fn renders_sections_with_ranks() {
        let ranking = ClassifiedRanking {
            top: vec![RawRow::new("Alice", "[XYZ]", "+120")],
            flop: vec![],
        };

        let message = format_ranking(&ranking, &at("2024-01-15T13:00:00Z"));
        let lines: Vec<&str> = message.lines().collect();

        assert_eq!(
            lines,
            [
                "🛡️ **Update at 14:00**",
                "",
                "📈 **Top** :",
                "1. Alice [XYZ] : +120",
                "",
                "📉 **Flop** :",
            ]
        );
    }

    #[test]
    fn ranks_restart_per_section() {
        let ranking = ClassifiedRanking {
            top: vec![RawRow::new("a", "", "+2"), RawRow::new("b", "", "+1")],
            flop: vec![RawRow::new("c", "[C]", "-1"), RawRow::new("d", "", "-9")],
        };

        let message = format_ranking(&ranking, &at("2024-01-15T08:05:00Z"));

        let flop = message.split("📉 **Flop** :\n").nth(1).unwrap();
        assert_eq!(flop, "1. c [C] : -1\n2. d : -9\n");
        assert!(message.contains("1. a : +2\n2. b : +1\n"));
    }

    #[test]
    fn timestamp_follows_summer_time() {
        let message = format_ranking(&ClassifiedRanking::default(), &at("2024-07-01T21:30:00Z"));

        assert!(message.starts_with("🛡️ **Update at 23:30**"));
    }

    #[test]
    fn empty_alliance_leaves_no_gap() {
        assert_eq!(format_row(3, &RawRow::new("Bob", "", "-5")), "3. Bob : -5");
    }
}
