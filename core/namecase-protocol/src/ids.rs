use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use core::fmt;

/// Diagnostic number of the declension rule that produced a word's case forms.
///
/// Numbers are only unique within one gender's rule set: the masculine and
/// feminine catalogues both start at 101.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct RuleId(pub u32);

impl RuleId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl From<u32> for RuleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<RuleId> for u32 {
    fn from(id: RuleId) -> u32 {
        id.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
