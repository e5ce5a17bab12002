// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for native currency amounts
//!
//! This module provides a newtype wrapper for native currency (ETH, MATIC,
//! etc.) in wei. Conversion to the base display unit is exact fixed-point
//! arithmetic over [`BigDecimal`]: transaction values routinely exceed what
//! an `f64` mantissa can represent, so the money path never touches
//! floating point.

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Wei per unit of native currency (10^18).
const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// An amount of native currency (ETH, MATIC, etc.) in wei.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use holdscan::WeiAmount;
///
/// let value = WeiAmount::new(U256::from(1_500_000_000_000_000_000u128)); // 1.5 ETH
/// assert_eq!(value.to_ether(), BigDecimal::from_str("1.5").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WeiAmount(U256);

impl WeiAmount {
    /// Zero wei.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new wei amount.
    pub const fn new(wei: U256) -> Self {
        Self(wei)
    }

    /// Get the inner U256 value (in wei).
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Convert to the base display unit (1 ETH = 10^18 wei), exactly.
    ///
    /// The division is performed in U256 space first (whole and fractional
    /// parts), then recombined as `BigDecimal`, so no precision is lost even
    /// for amounts near `U256::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use bigdecimal::BigDecimal;
    /// use std::str::FromStr;
    /// use holdscan::WeiAmount;
    ///
    /// let one_wei = WeiAmount::new(U256::from(1u64));
    /// assert_eq!(
    ///     one_wei.to_ether(),
    ///     BigDecimal::from_str("0.000000000000000001").unwrap()
    /// );
    /// ```
    pub fn to_ether(&self) -> BigDecimal {
        let divisor = U256::from(WEI_PER_ETHER);

        let whole = self.0 / divisor;
        let fractional = self.0 % divisor;

        let whole_decimal =
            BigDecimal::from_str(&whole.to_string()).unwrap_or_else(|_| BigDecimal::from(0));
        let fractional_decimal =
            BigDecimal::from_str(&fractional.to_string()).unwrap_or_else(|_| BigDecimal::from(0));
        let divisor_decimal =
            BigDecimal::from_str(&divisor.to_string()).unwrap_or_else(|_| BigDecimal::from(1));

        whole_decimal + (fractional_decimal / divisor_decimal)
    }
}

impl From<u64> for WeiAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for WeiAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_ether().normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ether(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_wei_amount_creation() {
        let amount = WeiAmount::new(U256::from(1000));
        assert_eq!(amount.as_u256(), U256::from(1000));
    }

    #[test]
    fn test_wei_amount_zero() {
        assert!(WeiAmount::ZERO.is_zero());
        assert_eq!(WeiAmount::ZERO.to_ether(), ether("0"));
    }

    #[test]
    fn test_to_ether_whole() {
        let amount = WeiAmount::new(U256::from(1_000_000_000_000_000_000u128));
        assert_eq!(amount.to_ether(), ether("1"));
    }

    #[test]
    fn test_to_ether_fractional() {
        let amount = WeiAmount::new(U256::from(1_500_000_000_000_000_000u128));
        assert_eq!(amount.to_ether(), ether("1.5"));
    }

    #[test]
    fn test_to_ether_single_wei_is_exact() {
        let amount = WeiAmount::new(U256::from(1u64));
        assert_eq!(amount.to_ether(), ether("0.000000000000000001"));
    }

    #[test]
    fn test_to_ether_beyond_f64_mantissa() {
        // 1000000000.000000001 ETH cannot round-trip through f64
        let wei = U256::from(1_000_000_000_000_000_000_000_000_001u128);
        let amount = WeiAmount::new(wei);
        assert_eq!(amount.to_ether(), ether("1000000000.000000001"));
    }

    #[test]
    fn test_to_ether_round_trips_at_max() {
        let amount = WeiAmount::new(U256::MAX);
        let scaled = amount.to_ether() * ether("1000000000000000000");
        assert_eq!(scaled, ether(&U256::MAX.to_string()));
    }

    #[test]
    fn test_display_normalizes() {
        let amount = WeiAmount::new(U256::from(10_000_000_000_000_000u64)); // 0.01 ETH
        assert_eq!(amount.to_string(), "0.01");
    }

    #[test]
    fn test_conversions() {
        let u256_val = U256::from(12345u64);
        let amount: WeiAmount = u256_val.into();
        assert_eq!(amount.as_u256(), u256_val);

        let amount: WeiAmount = 12345u64.into();
        assert_eq!(amount.as_u256(), U256::from(12345u64));
    }

    #[test]
    fn test_ordering() {
        let small = WeiAmount::new(U256::from(100u64));
        let large = WeiAmount::new(U256::from(1000u64));
        assert!(small < large);
    }

    #[test]
    fn test_serialization() {
        let amount = WeiAmount::new(U256::from(1000));
        let json = serde_json::to_string(&amount).unwrap();
        let deserialized: WeiAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, deserialized);
    }
}
