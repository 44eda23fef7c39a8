use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default INR-per-USD rate applied when none is configured
pub const DEFAULT_FX_RATE_INR_USD: Decimal = dec!(83);

/// Number of entries in each top-holdings ranking
pub const TOP_HOLDINGS_LIMIT: usize = 5;

/// Header label that marks the start of mutual-fund data rows
pub const MUTUAL_FUND_HEADER_LABEL: &str = "Scheme Name";

/// Header label that marks the start of stock data rows
pub const STOCK_HEADER_LABEL: &str = "Stock Name";

/// Display name for the mutual-fund slice in allocation views
pub const MUTUAL_FUNDS_ALLOCATION_NAME: &str = "Mutual Funds";

/// Display name for the stock slice in allocation views
pub const STOCKS_ALLOCATION_NAME: &str = "Stocks";

/// Display name for the US slice in USD allocation views
pub const US_HOLDINGS_ALLOCATION_NAME: &str = "US Holdings";
