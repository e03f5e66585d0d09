use crate::store::SubscriptionStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: SubscriptionStore,
}

impl FromRef<AppState> for SubscriptionStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
