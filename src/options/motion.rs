use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reduced-motion overrides.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
pub struct MotionOptions {
    /// Force the reduced-motion flag regardless of the platform preference.
    /// Unset follows the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Force Reduced Motion")]
    pub force_reduced: Option<bool>,
}
