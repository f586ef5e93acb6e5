pub mod sale_mapper;
pub mod seller_mapper;
pub mod summary_mapper;

pub use sale_mapper::SaleMapper;
pub use seller_mapper::SellerMapper;
pub use summary_mapper::SummaryMapper;
