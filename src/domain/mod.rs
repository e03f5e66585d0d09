mod subscription;
mod subscription_id;

pub use subscription::{Subscription, SubscriptionUpdate};
pub use subscription_id::SubscriptionId;
