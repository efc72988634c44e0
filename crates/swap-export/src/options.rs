//! Row formatting configuration.

/// Time zone used when formatting execution timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowZone {
    /// The process-local zone. Matches what a user watching their own
    /// terminal expects, at the cost of machine-dependent output.
    #[default]
    Local,
    /// UTC, for deterministic output across machines.
    Utc,
}

/// Options controlling amount normalization and row formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Base-unit exponent of token amounts (18 is wei-style precision).
    pub base_unit_decimals: i32,
    /// Significant digits kept in the first rounding stage.
    pub significant_digits: i32,
    /// Zone used to render execution timestamps.
    pub zone: RowZone,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            base_unit_decimals: 18,
            significant_digits: 6,
            zone: RowZone::Local,
        }
    }
}

impl ExportOptions {
    /// Set the timestamp zone.
    #[must_use]
    pub fn with_zone(mut self, zone: RowZone) -> Self {
        self.zone = zone;
        self
    }

    /// Set the base-unit exponent.
    #[must_use]
    pub fn with_base_unit_decimals(mut self, decimals: i32) -> Self {
        self.base_unit_decimals = decimals;
        self
    }

    /// Set the significant digits kept when rounding.
    #[must_use]
    pub fn with_significant_digits(mut self, digits: i32) -> Self {
        self.significant_digits = digits;
        self
    }
}
