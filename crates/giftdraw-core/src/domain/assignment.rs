//! Giver/receiver assignments and their reveal tokens.

use std::borrow::Borrow;
use std::fmt;

/// Opaque single-use token granting one reveal of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// One giver paired with one receiver, by display name.
///
/// `accessed` starts false and flips to true exactly once, when the token
/// is first redeemed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub giver: String,
    pub receiver: String,
    pub token: Token,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accessed: bool,
}

impl Assignment {
    /// Creates an assignment that has not been accessed yet.
    pub fn new(giver: impl Into<String>, receiver: impl Into<String>, token: Token) -> Self {
        Self {
            giver: giver.into(),
            receiver: receiver.into(),
            token,
            accessed: false,
        }
    }
}
