use tracing::{debug, warn};

use crate::domain::models::seller::normalize_name;
use crate::domain::models::SellerId;
use crate::domain::SalesError;
use crate::storage::SellerStorage;

/// The one place where seller-name uniqueness is decided.
///
/// The check reads before the caller writes, so two concurrent creates can
/// both pass it; the unique index on `name_normalized` then rejects the loser
/// with a constraint violation.
#[derive(Clone)]
pub struct SellerNameGuard<S> {
    sellers: S,
}

impl<S: SellerStorage> SellerNameGuard<S> {
    pub fn new(sellers: S) -> Self {
        Self { sellers }
    }

    /// Fail with `DuplicateName` if another seller already uses `candidate`
    /// once trimmed and case folded. `exclude_id` is the seller being
    /// updated, whose own name never counts as a duplicate.
    pub async fn validate_unique_name(
        &self,
        candidate: &str,
        exclude_id: Option<SellerId>,
    ) -> Result<(), SalesError> {
        let normalized = normalize_name(candidate);
        debug!("Checking seller name uniqueness for {:?}", normalized);

        match self.sellers.find_by_normalized_name(&normalized).await? {
            Some(existing) if Some(existing.id) != exclude_id => {
                warn!(
                    "Seller name {:?} already used by seller {}",
                    candidate.trim(),
                    existing.id
                );
                Err(SalesError::DuplicateName(candidate.trim().to_string()))
            }
            _ => Ok(()),
        }
    }
}
