use crate::{
    app_state::AppState,
    domain::{Subscription, SubscriptionUpdate},
    store::SubscriptionStore,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscriptions", post(create_subscription))
        .route(
            "/subscriptions/:username",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
}

#[tracing::instrument(name = "Get subscription by username", skip(store))]
async fn get_subscription(
    State(store): State<SubscriptionStore>,
    Path(username): Path<String>,
) -> Result<Json<Subscription>, SubscriptionError> {
    match store.get(&username)? {
        Some(subscription) => Ok(Json(subscription)),
        None => Err(SubscriptionError::NotFound),
    }
}

#[tracing::instrument(name = "Create a new subscription", skip(store, body))]
async fn create_subscription(
    State(store): State<SubscriptionStore>,
    Json(body): Json<CreateBody>,
) -> Result<(StatusCode, Json<SubscriptionCreated>), SubscriptionError> {
    let (username, status, level) = match (
        non_empty(body.username),
        non_empty(body.status),
        non_empty(body.level),
    ) {
        (Some(username), Some(status), Some(level)) => (username, status, level),
        _ => return Err(SubscriptionError::MissingFields),
    };

    let subscription = Subscription::new(status, level);

    if !store.insert_new(username, subscription.clone())? {
        return Err(SubscriptionError::AlreadyExists);
    }

    Ok((
        StatusCode::CREATED,
        Json(SubscriptionCreated {
            message: "Subscription created",
            subscription,
        }),
    ))
}

#[tracing::instrument(name = "Update a subscription", skip(store, body))]
async fn update_subscription(
    State(store): State<SubscriptionStore>,
    Path(username): Path<String>,
    Json(body): Json<UpdateBody>,
) -> Result<Json<MessageBody>, SubscriptionError> {
    let update = SubscriptionUpdate {
        status: non_empty(body.status),
        level: non_empty(body.level),
    };

    if !store.update(&username, update)? {
        return Err(SubscriptionError::NotFound);
    }

    // The updated record is deliberately not echoed back.
    Ok(Json(MessageBody {
        message: "Subscription updated",
    }))
}

#[tracing::instrument(name = "Delete a subscription", skip(store))]
async fn delete_subscription(
    State(store): State<SubscriptionStore>,
    Path(username): Path<String>,
) -> Result<Json<MessageBody>, SubscriptionError> {
    if !store.remove(&username)? {
        return Err(SubscriptionError::NotFound);
    }

    Ok(Json(MessageBody {
        message: "Subscription deleted",
    }))
}

// Empty strings count as absent, matching the presence checks documented for
// create and update.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[derive(Deserialize)]
struct CreateBody {
    username: Option<String>,
    status: Option<String>,
    level: Option<String>,
}

#[derive(Deserialize)]
struct UpdateBody {
    status: Option<String>,
    level: Option<String>,
}

#[derive(Serialize)]
struct SubscriptionCreated {
    message: &'static str,
    subscription: Subscription,
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
enum SubscriptionError {
    #[error("Missing required fields: username, status, or level")]
    MissingFields,
    #[error("Subscription not found")]
    NotFound,
    #[error("Subscription already exists for this user")]
    AlreadyExists,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for SubscriptionError {
    fn into_response(self) -> Response {
        tracing::error!("{:#?}", self);

        let status = match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::UnexpectedError(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
