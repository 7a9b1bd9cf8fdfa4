//! Timing tokens for animations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Three animation speeds. Stored as milliseconds in theme files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Motion {
    #[serde(with = "millis")]
    pub fast: Duration,
    #[serde(with = "millis")]
    pub normal: Duration,
    #[serde(with = "millis")]
    pub slow: Duration,
}

impl Default for Motion {
    /// Snappy terminal defaults: 140 / 180 / 240 ms.
    fn default() -> Self {
        Motion {
            fast: Duration::from_millis(140),
            normal: Duration::from_millis(180),
            slow: Duration::from_millis(240),
        }
    }
}

/// `Duration` <-> integer milliseconds.
pub(crate) mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
