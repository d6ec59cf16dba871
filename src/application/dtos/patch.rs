//! Tri-state field for partial updates

use serde::{Serialize, Serializer};

/// A field of an update payload.
///
/// `Unset` means the field was not sent and must be left alone, `Null` means
/// it was sent as `null`, `Value` carries the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// Apply to a non-nullable target; `Null` leaves it unchanged.
    pub fn apply_to_required(self, target: &mut T) -> bool {
        match self {
            Patch::Value(v) => {
                *target = v;
                true
            }
            Patch::Unset | Patch::Null => false,
        }
    }
}

// Unset fields are expected to be skipped with `skip_serializing_if = "Patch::is_unset"`.
impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(v) => v.serialize(serializer),
            Patch::Unset | Patch::Null => serializer.serialize_none(),
        }
    }
}
