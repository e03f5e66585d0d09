use crate::domain::SubscriptionId;
use serde::{Deserialize, Serialize};

/// The per-username record tracked by the service. The username is the store
/// key and is not duplicated inside the record. `status` and `level` are
/// free-form; "active"/"cancelled" and DOGE_GOLD, DOGE_SILVER, DOGE_ULTRA,
/// DOGE_PLATINUM are conventional values, not an enforced enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub subscription_id: SubscriptionId,
    pub status: String,
    pub level: String,
}

impl Subscription {
    pub fn new(status: String, level: String) -> Self {
        Self {
            subscription_id: SubscriptionId::generate(),
            status,
            level,
        }
    }

    /// Overwrites only the fields the update carries. The subscription id is
    /// never altered.
    pub fn apply(&mut self, update: SubscriptionUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }

        if let Some(level) = update.level {
            self.level = level;
        }
    }
}

/// Partial update for an existing record; `None` fields are left untouched.
#[derive(Debug, Default)]
pub struct SubscriptionUpdate {
    pub status: Option<String>,
    pub level: Option<String>,
}
