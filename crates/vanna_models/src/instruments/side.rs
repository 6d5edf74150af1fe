//! Option side definitions.
//!
//! This module provides the `OptionSide` enum distinguishing calls from
//! puts, with case-insensitive string parsing for external inputs.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Side of a European option contract.
///
/// # Variants
/// - `Call`: right to buy the underlying at the strike
/// - `Put`: right to sell the underlying at the strike
///
/// # Examples
///
/// ```
/// use vanna_models::instruments::OptionSide;
///
/// let call = OptionSide::Call;
/// assert!(call.is_call());
/// assert_eq!(call.to_string(), "call");
///
/// // Parse from string (case-insensitive)
/// let put: OptionSide = "PUT".parse().unwrap();
/// assert_eq!(put, OptionSide::Put);
///
/// // Unknown side returns error
/// let result: Result<OptionSide, _> = "straddle".parse();
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionSide {
    /// Call option: max(S - K, 0) terminal payoff.
    Call,
    /// Put option: max(K - S, 0) terminal payoff.
    Put,
}

impl OptionSide {
    /// Returns the lowercase name of the side.
    pub fn name(&self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionSide::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionSide::Put)
    }
}

impl FromStr for OptionSide {
    type Err = InstrumentError;

    /// Parses an option side (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use vanna_models::instruments::OptionSide;
    ///
    /// let call: OptionSide = "call".parse().unwrap();
    /// assert_eq!(call, OptionSide::Call);
    ///
    /// // Case-insensitive
    /// let put: OptionSide = "Put".parse().unwrap();
    /// assert_eq!(put, OptionSide::Put);
    /// ```
    fn from_str(s: &str) -> Result<Self, InstrumentError> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionSide::Call),
            "put" => Ok(OptionSide::Put),
            _ => Err(InstrumentError::InvalidSide {
                side: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionSide {
    /// Formats as the lowercase side name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(OptionSide::Call.name(), "call");
        assert_eq!(OptionSide::Put.name(), "put");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", OptionSide::Call), "call");
        assert_eq!(format!("{}", OptionSide::Put), "put");
    }

    #[test]
    fn test_is_call() {
        assert!(OptionSide::Call.is_call());
        assert!(!OptionSide::Put.is_call());
    }

    #[test]
    fn test_is_put() {
        assert!(OptionSide::Put.is_put());
        assert!(!OptionSide::Call.is_put());
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("call".parse::<OptionSide>().unwrap(), OptionSide::Call);
        assert_eq!("CALL".parse::<OptionSide>().unwrap(), OptionSide::Call);
        assert_eq!("Call".parse::<OptionSide>().unwrap(), OptionSide::Call);
        assert_eq!("put".parse::<OptionSide>().unwrap(), OptionSide::Put);
        assert_eq!("PUT".parse::<OptionSide>().unwrap(), OptionSide::Put);
        assert_eq!("pUt".parse::<OptionSide>().unwrap(), OptionSide::Put);
    }

    #[test]
    fn test_from_str_invalid() {
        let result = "straddle".parse::<OptionSide>();
        match result {
            Err(InstrumentError::InvalidSide { side }) => {
                assert_eq!(side, "straddle");
            }
            _ => panic!("Expected InvalidSide variant"),
        }

        assert!("".parse::<OptionSide>().is_err());
        assert!("calls".parse::<OptionSide>().is_err());
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for side in [OptionSide::Call, OptionSide::Put] {
            let parsed: OptionSide = side.to_string().parse().unwrap();
            assert_eq!(parsed, side);
        }
    }

    #[test]
    fn test_clone_and_equality() {
        let side1 = OptionSide::Call;
        let side2 = side1;
        assert_eq!(side1, side2);
        assert_ne!(OptionSide::Call, OptionSide::Put);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", OptionSide::Call), "Call");
        assert_eq!(format!("{:?}", OptionSide::Put), "Put");
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(OptionSide::Call);
        set.insert(OptionSide::Put);
        set.insert(OptionSide::Call); // Duplicate

        assert_eq!(set.len(), 2);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serde_roundtrip() {
            let side = OptionSide::Put;
            let json = serde_json::to_string(&side).unwrap();
            let back: OptionSide = serde_json::from_str(&json).unwrap();
            assert_eq!(side, back);
        }
    }
}
