//! Platform account identifiers.

use serde::{Deserialize, Serialize};

/// Stable numeric account id on the game platform.
///
/// # Examples
///
/// ```
/// use cuslige_core::UserId;
///
/// assert_eq!(UserId::from_numeric("156"), Some(UserId::new(156)));
/// assert_eq!(UserId::from_numeric("builderman"), None);
/// assert_eq!(UserId::from_numeric("0"), None);
/// assert_eq!(UserId::new(156).to_string(), "156");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Whether `input` is non-empty and made only of ASCII digits.
    ///
    /// Such input is never a username, even when it is not a valid id.
    pub fn is_numeric(input: &str) -> bool {
        !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
    }

    /// Interpret a purely numeric username as an id without any lookup.
    ///
    /// Returns `None` for empty input, any non-digit character, overflow,
    /// or zero (no account has id zero).
    pub fn from_numeric(input: &str) -> Option<Self> {
        if !Self::is_numeric(input) {
            return None;
        }
        match input.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(Self(id)),
        }
    }

    /// Key under which this id is stored in the shared blob document.
    pub fn blob_key(self) -> String {
        self.0.to_string()
    }
}
