use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Server-generated subscription identifier: `sub_` followed by 16 lowercase
/// hex characters derived from 8 cryptographically random bytes. Never changes
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn generate() -> Self {
        let mut bytes = [0u8; 8];
        OsRng.fill_bytes(&mut bytes);

        let suffix: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();

        Self(format!("sub_{suffix}"))
    }
}

impl AsRef<str> for SubscriptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
