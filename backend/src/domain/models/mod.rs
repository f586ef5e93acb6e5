pub mod money;
pub mod period;
pub mod sale;
pub mod seller;
pub mod summary;

pub use period::Period;
pub use sale::{Sale, SaleDetails, SaleDraft, SaleId};
pub use seller::{Seller, SellerDraft, SellerId};
pub use summary::PeriodSummary;
