/// Safety cap on simulated months (100 years)
pub const DEFAULT_MAX_SIMULATION_MONTHS: u32 = 1200;

/// Decimal precision for monetary amounts
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Compounding periods per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Upper bound on one-cent adjustments when solving for a contribution
pub const MAX_CONTRIBUTION_ADJUSTMENTS: u32 = 100;
