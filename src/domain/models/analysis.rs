use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommendation produced by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    /// A long run of low rounds; a high multiplier is expected soon
    HighExpected,
    /// A high round happened a few minutes ago; wait before playing
    WaitAfterHigh,
    /// Default conservative advice
    PlaySafe,
}

impl Advice {
    /// User-facing text of the recommendation
    pub const fn text(self) -> &'static str {
        match self {
            Self::HighExpected => "Ожидается высокий коэффициент! Можно рискнуть.",
            Self::WaitAfterHigh => "Недавно был x10+, подожди немного.",
            Self::PlaySafe => "Играй осторожно на x1.5.",
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// How long ago the most recent high round (x10+) was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastHigh {
    /// Whole minutes elapsed, floored
    MinutesAgo(i64),
    /// No high round anywhere in the history
    NotFound,
}

impl LastHigh {
    pub const fn minutes(self) -> Option<i64> {
        match self {
            Self::MinutesAgo(minutes) => Some(minutes),
            Self::NotFound => None,
        }
    }
}

impl fmt::Display for LastHigh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinutesAgo(minutes) => write!(f, "{minutes} мин назад"),
            Self::NotFound => f.write_str("—"),
        }
    }
}

/// Derived view over a user's history. Computed on every request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub advice: Advice,

    /// Contiguous run of low rounds ending at the most recent one
    pub low_streak: usize,

    /// Maximum multiplier among the last ten rounds
    pub recent_max: f64,

    pub last_high: LastHigh,
}
