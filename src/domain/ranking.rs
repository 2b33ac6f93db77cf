use serde::{Deserialize, Serialize};

/// Name used when no name element follows a score marker.
pub const UNKNOWN_PSEUDO: &str = "unknown";

/// Rows kept per section of the posted ranking.
pub const SECTION_SIZE: usize = 10;

/// One leaderboard entry as read from the page.
///
/// `points` is kept as the page renders it (sign, thousands separators and
/// all) so the posted message matches what players see in game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub pseudo: String,
    pub alliance: String,
    pub points: String,
}

impl RawRow {
    pub fn new(
        pseudo: impl Into<String>,
        alliance: impl Into<String>,
        points: impl Into<String>,
    ) -> Self {
        Self {
            pseudo: pseudo.into(),
            alliance: alliance.into(),
            points: points.into(),
        }
    }

    pub fn is_gain(&self) -> bool {
        self.points.starts_with('+')
    }

    pub fn is_loss(&self) -> bool {
        self.points.starts_with('-')
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedRanking {
    pub top: Vec<RawRow>,
    pub flop: Vec<RawRow>,
}

impl ClassifiedRanking {
    /// Splits rows by the sign of their delta, keeping page order and the
    /// first [`SECTION_SIZE`] of each. Unsigned rows are dropped.
    pub fn classify(rows: &[RawRow]) -> Self {
        let top = rows
            .iter()
            .filter(|row| row.is_gain())
            .take(SECTION_SIZE)
            .cloned()
            .collect();
        let flop = rows
            .iter()
            .filter(|row| row.is_loss())
            .take(SECTION_SIZE)
            .cloned()
            .collect();

        Self { top, flop }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.flop.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_by_sign_and_drops_unsigned() {
        let rows = vec![
            RawRow::new("a", "", "+5"),
            RawRow::new("b", "", "-3"),
            RawRow::new("c", "", "12"),
            RawRow::new("d", "", "+1 204"),
            RawRow::new("e", "", ""),
        ];

        let ranking = ClassifiedRanking::classify(&rows);

        let top: Vec<_> = ranking.top.iter().map(|r| r.pseudo.as_str()).collect();
        let flop: Vec<_> = ranking.flop.iter().map(|r| r.pseudo.as_str()).collect();
        assert_eq!(top, ["a", "d"]);
        assert_eq!(flop, ["b"]);
    }

    #[test]
    fn keeps_first_ten_in_page_order() {
        let mut rows: Vec<RawRow> = (0..15)
            .map(|i| RawRow::new(format!("gain{i}"), "", format!("+{i}")))
            .collect();
        rows.insert(3, RawRow::new("loss", "", "-7"));

        let ranking = ClassifiedRanking::classify(&rows);

        assert_eq!(ranking.top.len(), SECTION_SIZE);
        for (i, row) in ranking.top.iter().enumerate() {
            assert_eq!(row.pseudo, format!("gain{i}"));
        }
        assert_eq!(ranking.flop, vec![RawRow::new("loss", "", "-7")]);
    }

    #[test]
    fn empty_input_gives_empty_ranking() {
        assert!(ClassifiedRanking::classify(&[]).is_empty());
    }
}
