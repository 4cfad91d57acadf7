//! How often epoch-end messages are sent.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Epoch-end reporting cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FrequencyRepr", into = "FrequencyRepr")]
pub enum Frequency {
    /// Send at every epoch divisible by the interval.
    Every(NonZeroU64),
    /// Send nothing at epoch end; only the final message at train end.
    FinalOnly,
}

impl Frequency {
    /// Report every `epochs` epochs. Zero is rejected.
    pub fn every(epochs: u64) -> Result<Self, ConfigError> {
        NonZeroU64::new(epochs)
            .map(Self::Every)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "frequency",
                reason: "must be at least 1".into(),
            })
    }

    /// Whether an epoch-end message is due for `epoch`.
    #[must_use]
    pub fn is_due(&self, epoch: u64) -> bool {
        match self {
            Self::Every(interval) => epoch % interval.get() == 0,
            Self::FinalOnly => false,
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::Every(NonZeroU64::MIN)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Every(interval) => write!(f, "every {interval} epochs"),
            Self::FinalOnly => f.write_str("final only"),
        }
    }
}

/// Wire form: an integer interval or the word `"final"`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FrequencyRepr {
    Interval(u64),
    Word(String),
}

impl TryFrom<FrequencyRepr> for Frequency {
    type Error = ConfigError;

    fn try_from(repr: FrequencyRepr) -> Result<Self, Self::Error> {
        match repr {
            FrequencyRepr::Interval(epochs) => Self::every(epochs),
            FrequencyRepr::Word(word) if word.eq_ignore_ascii_case("final") => Ok(Self::FinalOnly),
            FrequencyRepr::Word(word) => Err(ConfigError::InvalidValue {
                field: "frequency",
                reason: format!("expected an integer or \"final\", got \"{word}\""),
            }),
        }
    }
}

impl From<Frequency> for FrequencyRepr {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Every(interval) => Self::Interval(interval.get()),
            Frequency::FinalOnly => Self::Word("final".into()),
        }
    }
}
