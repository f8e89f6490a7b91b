//! Vehicle identity types shared across the facility.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Licence plate. Opaque identifier; uniqueness among vehicles currently
/// parked or waiting is enforced at admission, not here, so a plate may
/// legitimately reappear after its vehicle has left.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plate(String);

impl Plate {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mint a random `ABC-1234` style plate from the given RNG.
    pub fn random(rng: &mut impl Rng) -> Self {
        let letters: String = (0..3)
            .map(|_| rng.gen_range(b'A'..=b'Z') as char)
            .collect();
        let digits: u32 = rng.gen_range(0..10_000);
        Self(format!("{}-{:04}", letters, digits))
    }
}

/// Which layout a vehicle was assigned to. Stored in occupancy entries and
/// stamped onto history records, so billing logs can say how the vehicle
/// was parked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    /// The reversible single lane: last in, first out.
    SingleLane,
    /// The drive-through lot: first in, first out.
    Fifo,
}

impl LayoutMode {
    /// Human-readable label for log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::SingleLane => "single-lane",
            Self::Fifo => "fifo",
        }
    }
}
