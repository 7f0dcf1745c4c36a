//! Wire payload sent to the admin service.

use serde::Serialize;

/// Calling convention tag expected by the admin service.
pub const RPC_TYPE_SPRING_CLOUD: &str = "springCloud";

/// Self-registration payload. Field names are the admin service's wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub context: String,
    pub app_name: String,
    pub path: String,
    pub rpc_type: String,
    pub enabled: bool,
    pub rule_name: String,
}

impl RegisterDto {
    /// Build the payload announcing `context` with a `/**` wildcard route.
    pub fn spring_cloud(context: &str, app_name: &str) -> Self {
        let path = format!("{}/**", context);
        Self {
            context: context.to_string(),
            app_name: app_name.to_string(),
            rule_name: path.clone(),
            path,
            rpc_type: RPC_TYPE_SPRING_CLOUD.to_string(),
            enabled: true,
        }
    }
}
