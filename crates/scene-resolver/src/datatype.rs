//! Landsat processing-level qualifiers.

use std::fmt;
use std::str::FromStr;

use scene_common::BrokerError;

/// Landsat data type as reported by imagery search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandsatDataType {
    /// Pre-Collection-1 precision terrain correction
    L1T,
    /// Pre-Collection-1 systematic correction
    L1G,
    /// Collection-1 precision and terrain
    L1TP,
    /// Collection-1 systematic terrain
    L1GT,
    /// Collection-1 systematic
    L1GS,
}

impl LandsatDataType {
    /// Scenes of this type resolve through the legacy URL template.
    pub fn is_pre_collection(&self) -> bool {
        matches!(self, LandsatDataType::L1T | LandsatDataType::L1G)
    }

    /// Scenes of this type resolve through the scene catalog.
    pub fn is_collection_one(&self) -> bool {
        !self.is_pre_collection()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LandsatDataType::L1T => "L1T",
            LandsatDataType::L1G => "L1G",
            LandsatDataType::L1TP => "L1TP",
            LandsatDataType::L1GT => "L1GT",
            LandsatDataType::L1GS => "L1GS",
        }
    }
}

impl FromStr for LandsatDataType {
    type Err = BrokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "L1T" => Ok(LandsatDataType::L1T),
            "L1G" => Ok(LandsatDataType::L1G),
            "L1TP" => Ok(LandsatDataType::L1TP),
            "L1GT" => Ok(LandsatDataType::L1GT),
            "L1GS" => Ok(LandsatDataType::L1GS),
            _ => Err(BrokerError::UnknownDataType(s.to_string())),
        }
    }
}

impl fmt::Display for LandsatDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!("L1T".parse::<LandsatDataType>(), Ok(LandsatDataType::L1T));
        assert_eq!(" l1tp ".parse::<LandsatDataType>(), Ok(LandsatDataType::L1TP));
        assert_eq!("L1GS".parse::<LandsatDataType>(), Ok(LandsatDataType::L1GS));
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            "L2SP".parse::<LandsatDataType>(),
            Err(BrokerError::UnknownDataType("L2SP".to_string()))
        );
        assert!("".parse::<LandsatDataType>().is_err());
    }

    #[test]
    fn test_collection_split() {
        assert!(LandsatDataType::L1T.is_pre_collection());
        assert!(LandsatDataType::L1G.is_pre_collection());
        for t in [LandsatDataType::L1TP, LandsatDataType::L1GT, LandsatDataType::L1GS] {
            assert!(t.is_collection_one(), "{t}");
        }
    }
}
