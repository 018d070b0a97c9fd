use serde::{Deserialize, Serialize};

/// Vault state as reported by Ocean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaultState {
    Active,
    InLiquidation,
    Frozen,
    MayLiquidate,
    Unknown,
}
