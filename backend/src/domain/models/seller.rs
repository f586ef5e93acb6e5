use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::SalesError;

/// Longest display name a seller may have, counted in characters
pub const MAX_NAME_CHARS: usize = 60;

/// Store-assigned seller identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(pub i64);

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
}

impl Seller {
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Replace the mutable fields with those of `draft`; the id is kept.
    pub fn update_from(&mut self, draft: SellerDraft) {
        self.name = draft.name;
    }
}

/// Validated seller fields that have not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerDraft {
    name: String,
}

impl SellerDraft {
    /// Trim `raw_name` and check that it is usable as a display name
    pub fn new(raw_name: &str) -> Result<Self, SalesError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(SalesError::InvalidName("name cannot be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(SalesError::InvalidName(format!(
                "name cannot exceed {} characters",
                MAX_NAME_CHARS
            )));
        }
        Ok(Self { name: name.to_string() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Comparison key for seller names: surrounding whitespace trimmed, case folded.
/// Never stored as the display name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name(" Bob "), "bob");
        assert_eq!(normalize_name("bob"), "bob");
        assert_eq!(normalize_name("\tJOÃO Mendes\n"), "joão mendes");
    }

    #[test]
    fn test_draft_trims_but_keeps_casing() {
        let draft = SellerDraft::new("  Bob Smith ").unwrap();
        assert_eq!(draft.name(), "Bob Smith");
        assert_eq!(draft.normalized_name(), "bob smith");
    }

    #[test]
    fn test_draft_rejects_blank_and_long_names() {
        assert!(matches!(SellerDraft::new(""), Err(SalesError::InvalidName(_))));
        assert!(matches!(SellerDraft::new("   "), Err(SalesError::InvalidName(_))));

        let exactly_max = "a".repeat(MAX_NAME_CHARS);
        assert!(SellerDraft::new(&exactly_max).is_ok());

        let too_long = "a".repeat(MAX_NAME_CHARS + 1);
        assert!(matches!(SellerDraft::new(&too_long), Err(SalesError::InvalidName(_))));
    }

    #[test]
    fn test_update_from_keeps_identity() {
        let mut seller = Seller { id: SellerId(1), name: "Bob".to_string() };
        seller.update_from(SellerDraft::new("Robert").unwrap());

        assert_eq!(seller.id, SellerId(1));
        assert_eq!(seller.name, "Robert");
        assert_eq!(seller.normalized_name(), "robert");
    }
}
