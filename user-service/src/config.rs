// User Manager Configuration
// Sizing hints and soft limits for the in-memory record store

use crate::error::{ServiceError, ServiceResult};

use serde::Deserialize;

/// Configuration for a [`UserManager`](crate::services::UserManager)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserManagerConfig {
    /// Capacity reserved for the record list up front
    pub initial_capacity: usize,

    /// Soft limit on stored records. Adds past it still succeed but are logged.
    pub max_users: Option<usize>,
}

impl UserManagerConfig {
    /// Parse a config from JSON and validate it.
    ///
    /// Missing keys fall back to their defaults, so `{}` is a valid config.
    pub fn from_json(input: &str) -> ServiceResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ServiceResult<()> {
        if let Some(max) = self.max_users {
            if max == 0 {
                return Err(ServiceError::InvalidConfig(
                    "maxUsers must be greater than 0".to_string(),
                ));
            }
            if self.initial_capacity > max {
                return Err(ServiceError::InvalidConfig(format!(
                    "initialCapacity ({}) exceeds maxUsers ({})",
                    self.initial_capacity, max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserManagerConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.max_users, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = UserManagerConfig::from_json("{}").unwrap();
        assert_eq!(config, UserManagerConfig::default());
    }

    #[test]
    fn test_from_json_camel_case_keys() {
        let config =
            UserManagerConfig::from_json(r#"{"initialCapacity": 8, "maxUsers": 100}"#).unwrap();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.max_users, Some(100));
    }

    #[test]
    fn test_zero_max_users_rejected() {
        let err = UserManagerConfig::from_json(r#"{"maxUsers": 0}"#).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidConfig(_)));
    }

    #[test]
    fn test_capacity_above_max_rejected() {
        let config = UserManagerConfig {
            initial_capacity: 10,
            max_users: Some(5),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds maxUsers"));
    }

    #[test]
    fn test_malformed_json() {
        let err = UserManagerConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ServiceError::Serialization(_)));
    }
}
