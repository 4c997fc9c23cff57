//! Draw results.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Assignment;

/// Identifier of a stored draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct DrawId(String);

impl DrawId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh `draw-<uuid>` identifier.
    pub fn generate() -> Self {
        Self(format!("draw-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DrawId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The complete outcome of one successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DrawResult {
    pub id: DrawId,
    /// One entry per participant as giver, in the order the search committed them.
    pub assignments: Vec<Assignment>,
    pub created_at: DateTime<Utc>,
    /// Optional label such as "Christmas 2025".
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
}

impl DrawResult {
    /// Wraps freshly materialized assignments in a new draw stamped now.
    pub fn new(assignments: Vec<Assignment>, name: Option<String>) -> Self {
        Self {
            id: DrawId::generate(),
            assignments,
            created_at: Utc::now(),
            name,
        }
    }

    pub fn assignment_by_token(&self, token: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.token.as_str() == token)
    }

    pub fn assignment_by_token_mut(&mut self, token: &str) -> Option<&mut Assignment> {
        self.assignments
            .iter_mut()
            .find(|a| a.token.as_str() == token)
    }

    /// Number of assignments whose token has already been redeemed.
    pub fn accessed_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.accessed).count()
    }

    /// Builds the share link for every giver.
    ///
    /// # Examples
    ///
    /// ```
    /// use giftdraw_core::{Assignment, DrawResult, Token};
    ///
    /// let draw = DrawResult::new(
    ///     vec![Assignment::new("Ana", "Luis", Token::new("t1"))],
    ///     None,
    /// );
    /// let links = draw.links("https://example.org/");
    /// assert_eq!(links[0].url, "https://example.org/result/t1");
    /// ```
    pub fn links(&self, base_url: &str) -> Vec<ShareLink> {
        let base = base_url.trim_end_matches('/');
        self.assignments
            .iter()
            .map(|a| ShareLink {
                giver: a.giver.clone(),
                url: format!("{}/result/{}", base, a.token),
                accessed: a.accessed,
            })
            .collect()
    }
}

/// A link a giver opens to reveal their receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub giver: String,
    pub url: String,
    pub accessed: bool,
}
