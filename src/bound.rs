#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Whether a range endpoint is included in the range.
///
/// A `Closed` bound includes its endpoint value, an `Open` bound
/// excludes it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum BoundType {
    Open,
    Closed,
}

impl BoundType {
    /// The other bound type.
    ///
    /// Two ranges sharing an endpoint cover it exactly once when their
    /// bound types at that endpoint are complementary. This is what the
    /// map's split step relies on when it carves coverage out around an
    /// inserted range.
    pub fn flip(self) -> BoundType {
        match self {
            BoundType::Open => BoundType::Closed,
            BoundType::Closed => BoundType::Open,
        }
    }
}
