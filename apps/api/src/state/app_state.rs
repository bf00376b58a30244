use super::security_config::SecurityConfig;
use crate::config::AppConfig;

/// Application state shared by every worker; read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Upper bound for JSON request bodies, in bytes
    pub max_json_payload_size: usize,
}

impl AppState {
    pub fn new(security: SecurityConfig) -> Self {
        Self {
            security,
            max_json_payload_size: crate::config::app_config::DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let security = SecurityConfig::new(config.jwt_secret.as_bytes())
            .with_access_token_ttl(config.access_token_ttl);

        Self {
            security,
            max_json_payload_size: config.max_json_payload_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_from_config_carries_security_settings() {
        let config = AppConfig::from_lookup(|name| match name {
            "JWT_SECRET" => Some("state-secret".to_string()),
            "JWT_EXPIRES_IN_SECS" => Some("120".to_string()),
            "MAX_JSON_PAYLOAD_SIZE" => Some("512".to_string()),
            _ => None,
        })
        .unwrap();

        let state = AppState::from_config(&config);

        assert_eq!(state.security.jwt_secret, b"state-secret".to_vec());
        assert_eq!(state.security.access_token_ttl, Duration::from_secs(120));
        assert_eq!(state.max_json_payload_size, 512);
    }
}
