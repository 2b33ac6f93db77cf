mod ranking;

pub use ranking::{ClassifiedRanking, RawRow, UNKNOWN_PSEUDO};
