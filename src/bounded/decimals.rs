//! Policies for choosing how many decimals a value is displayed with

use serde::{Deserialize, Serialize};

/// How the displayed number of decimals is derived
///
/// `Fixed` uses the configured decimals as is. The `ByValue` variants look at
/// the significant decimals of the current value(s) instead, optionally using
/// the configured decimals as an upper or lower limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalsOption {
    /// Always use the configured decimals
    #[default]
    Fixed,
    /// Use as many decimals as the value needs
    ByValue,
    /// Use as many decimals as the value needs, at most the configured decimals
    ByValueAsMax,
    /// Use as many decimals as the value needs, at least the configured decimals
    ByValueAsMin,
}

impl DecimalsOption {
    /// Resolves the decimals to display given the configured and significant decimals
    pub fn resolve(self, decimals: usize, significant: usize) -> usize {
        match self {
            DecimalsOption::Fixed => decimals,
            DecimalsOption::ByValue => significant,
            DecimalsOption::ByValueAsMax => significant.min(decimals),
            DecimalsOption::ByValueAsMin => significant.max(decimals),
        }
    }

    /// Whether the option looks at the values at all
    pub fn is_by_value(self) -> bool {
        !matches!(self, DecimalsOption::Fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DecimalsOption::Fixed, 3, 6, 3)]
    #[case(DecimalsOption::ByValue, 3, 6, 6)]
    #[case(DecimalsOption::ByValue, 3, 1, 1)]
    #[case(DecimalsOption::ByValueAsMax, 3, 6, 3)]
    #[case(DecimalsOption::ByValueAsMax, 3, 1, 1)]
    #[case(DecimalsOption::ByValueAsMin, 3, 6, 6)]
    #[case(DecimalsOption::ByValueAsMin, 3, 1, 3)]
    fn test_resolve(
        #[case] option: DecimalsOption,
        #[case] decimals: usize,
        #[case] significant: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(option.resolve(decimals, significant), expected);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DecimalsOption::ByValueAsMax).unwrap();
        assert_eq!(json, "\"by_value_as_max\"");
        let option: DecimalsOption = serde_json::from_str("\"by_value\"").unwrap();
        assert_eq!(option, DecimalsOption::ByValue);
    }
}
