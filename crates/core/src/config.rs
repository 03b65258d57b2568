use crate::error::GridError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Tunables shared by validity checks and checked region queries. Two grids
/// configured the same way will always agree on which coordinates are valid.
///
/// The default config matches the documented contract (±10000 per axis), so
/// most callers never build one explicitly; the `_in`/`_checked` method
/// variants exist for the ones that do.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Every coordinate component (including the derived cube component)
    /// must fall in `[-max_coordinate, max_coordinate]` to count as valid.
    /// Coordinates outside the range are inert: validity checks report
    /// them, region queries skip them, nothing panics over them.
    #[validate(range(min = 1, max = 1000000))]
    pub max_coordinate: i32,

    /// Largest radius the checked region queries will accept. The unchecked
    /// variants don't consult this; bounding their radius stays the
    /// caller's job.
    #[validate(range(min = 1, max = 10000))]
    pub max_region_radius: u16,
}

impl GridConfig {
    /// Default per-axis bounding range
    pub const DEFAULT_MAX_COORDINATE: i32 = 10000;
    /// Default cap for checked region queries
    pub const DEFAULT_MAX_REGION_RADIUS: u16 = 1000;

    /// Validate field ranges, folding failures into [GridError::Config]
    pub fn check(&self) -> Result<(), GridError> {
        self.validate()?;
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_coordinate: Self::DEFAULT_MAX_COORDINATE,
            max_region_radius: Self::DEFAULT_MAX_REGION_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridErrorKind;
    use serde_test::{assert_de_tokens, Token};

    #[test]
    fn test_default_is_valid() {
        assert!(GridConfig::default().check().is_ok());
    }

    #[test]
    fn test_invalid_fields() {
        let config = GridConfig {
            max_coordinate: 0,
            ..GridConfig::default()
        };
        let error = config.check().unwrap_err();
        assert_eq!(error.kind(), GridErrorKind::DegenerateInput);

        let config = GridConfig {
            max_region_radius: 0,
            ..GridConfig::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        // Missing fields fall back to the documented defaults
        assert_de_tokens(
            &GridConfig::default(),
            &[
                Token::Struct {
                    name: "GridConfig",
                    len: 0,
                },
                Token::StructEnd,
            ],
        );
    }
}
