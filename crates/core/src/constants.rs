use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Home currency used when no override is configured
pub const DEFAULT_HOME_CURRENCY: &str = "BRL";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Weeks in a year, used by the recurrence table
pub const WEEKS_PER_YEAR: Decimal = dec!(52);

/// Months in a year, used by the recurrence table
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Number of months covered by the dashboard projection
pub const PROJECTION_MONTHS: u32 = 12;
