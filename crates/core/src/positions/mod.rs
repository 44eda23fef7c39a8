//! Canonical position model and per-source normalizers.

mod normalizer;
mod positions_model;

pub use normalizer::{from_mutual_fund, from_stock, from_us_position};
pub use positions_model::{AssetClass, Currency, PerformanceMetrics, Position};
