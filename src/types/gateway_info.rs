//! Gateway configuration

use super::processor::Processor;
use serde::{Deserialize, Serialize};
use std::env;

/// Identity and credentials of one configured gateway
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayInfo {
    /// Local identifier for multi-gateway setups
    #[serde(default)]
    pub gateway_id: u32,
    /// Processor behind this gateway
    pub processor: Processor,
    /// API login / username
    pub username: String,
    /// Transaction key / password
    pub password: String,
    /// Post to the processor's test endpoint
    #[serde(default = "default_test_mode")]
    pub is_test: bool,
}

fn default_test_mode() -> bool {
    true
}

impl std::fmt::Debug for GatewayInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayInfo")
            .field("gateway_id", &self.gateway_id)
            .field("processor", &self.processor)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("is_test", &self.is_test)
            .finish()
    }
}

impl GatewayInfo {
    /// Create a new gateway config in test mode
    pub fn new(
        processor: Processor,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            gateway_id: 0,
            processor,
            username: username.into(),
            password: password.into(),
            is_test: true,
        }
    }

    /// Set the local gateway id
    pub fn with_gateway_id(mut self, gateway_id: u32) -> Self {
        self.gateway_id = gateway_id;
        self
    }

    /// Set whether the test endpoint is used
    pub fn with_test_mode(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }

    /// Load a gateway config from `<PREFIX>_*` environment variables
    ///
    /// `<PREFIX>_PROCESSOR`, `<PREFIX>_USERNAME` and `<PREFIX>_PASSWORD` are
    /// required. `<PREFIX>_TEST_MODE` defaults to `true` and
    /// `<PREFIX>_GATEWAY_ID` to `0`.
    pub fn from_env(prefix: &str) -> crate::Result<Self> {
        let var = |name: &str| env::var(format!("{}_{}", prefix, name));
        let required = |name: &str| {
            var(name).map_err(|_| {
                crate::GatewayError::config(format!("{}_{} must be set", prefix, name))
            })
        };

        let processor = required("PROCESSOR")?.parse()?;
        let username = required("USERNAME")?;
        let password = required("PASSWORD")?;

        let is_test = match var("TEST_MODE") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                crate::GatewayError::config(format!(
                    "{}_TEST_MODE must be true or false, got '{}'",
                    prefix, value
                ))
            })?,
            Err(_) => true,
        };

        let gateway_id = match var("GATEWAY_ID") {
            Ok(value) => value.trim().parse().map_err(|_| {
                crate::GatewayError::config(format!(
                    "{}_GATEWAY_ID must be a number, got '{}'",
                    prefix, value
                ))
            })?,
            Err(_) => 0,
        };

        let info = Self {
            gateway_id,
            processor,
            username,
            password,
            is_test,
        };
        info.validate()?;
        Ok(info)
    }

    /// Validate the gateway configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.username.trim().is_empty() {
            return Err(crate::GatewayError::config("Gateway username cannot be empty"));
        }

        if self.password.trim().is_empty() {
            return Err(crate::GatewayError::config("Gateway password cannot be empty"));
        }

        Ok(())
    }

    /// Endpoint requests for this gateway are posted to
    pub fn post_url(&self) -> &'static str {
        super::constants::urls::post_url(self.processor, self.is_test)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
