use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use mergington::data::{ActivitySnapshot, MessageResponse};
use mergington::id::{ActivityName, ParticipantId};

use crate::error::AppError;
use crate::services::ActivityService;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

/// Unpacks the extractors of a sign-up call.
///
/// An unknown activity is reported ahead of an invalid email.
async fn signup_target(
    state: &crate::AppState,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<(ActivityName, ParticipantId), AppError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let activity = ActivityName::from_string(activity_name);

    match ParticipantId::parse(query.email) {
        Ok(participant) => Ok((activity, participant)),
        Err(err) => {
            state.activities.get(&activity).await?;
            Err(err.into())
        }
    }
}

/// Handler to list every activity and its participants
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<ActivitySnapshot>, AppError> {
    Ok(Json(state.activities.list().await?))
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let (activity, participant) = signup_target(&state, path, query).await?;

    state.activities.enroll(&activity, &participant).await?;
    Ok(Json(MessageResponse::signed_up(&participant, &activity)))
}

/// Handler to unregister a student from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let (activity, participant) = signup_target(&state, path, query).await?;

    state.activities.withdraw(&activity, &participant).await?;
    Ok(Json(MessageResponse::unregistered(&participant, &activity)))
}
