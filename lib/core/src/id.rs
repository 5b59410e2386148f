//! Strongly-typed ID types.
//!
//! IDs wrap a ULID and display as `<prefix>_<ulid>`. They are minted from a
//! local counter, since the browser build has no wall clock to seed a
//! time-based ULID from.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Generates a ULID-backed ID type rendered as `<prefix>_<ulid>`.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Ulid);

        impl $name {
            /// Builds an ID from a counter value, with a zero timestamp.
            #[must_use]
            pub fn from_sequence(sequence: u64) -> Self {
                Self(Ulid::from_parts(0, u128::from(sequence)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", $prefix, self.0)
            }
        }
    };
}

define_id!(
    /// Identifies one toast in the notification stack.
    NotificationId,
    "ntf"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_ids_are_stable_and_distinct() {
        assert_eq!(
            NotificationId::from_sequence(1),
            NotificationId::from_sequence(1)
        );
        assert_ne!(
            NotificationId::from_sequence(1),
            NotificationId::from_sequence(2)
        );
    }

    #[test]
    fn display_uses_prefix() {
        let id = NotificationId::from_sequence(42);
        assert_eq!(id.to_string(), format!("ntf_{}", Ulid::from_parts(0, 42)));
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = NotificationId::from_sequence(7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", Ulid::from_parts(0, 7)));
    }
}
