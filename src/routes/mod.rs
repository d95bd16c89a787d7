use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    errors::{Error, Result},
    models::{
        guest::{Guest, GuestEntry, RsvpInfo},
        topic::TopicSummary,
    },
    ops::{guests, topics},
    state::AppState,
};

pub fn api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api", get(dispatch))
        .with_state(state)
}

/// The flat parameter bag every action shares. Booleans arrive as the
/// literal string `true`; anything else (including absence) is false.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionParams {
    action: Option<String>,
    guest: Option<String>,
    name: Option<String>,
    status: Option<String>,
    plus_one: Option<String>,
    show_public: Option<String>,
    author_name: Option<String>,
    text: Option<String>,
    topic_id: Option<String>,
    unlike: Option<String>,
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    success: bool,
    guest: Guest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InitResponse {
    success: bool,
    rsvp: Option<RsvpInfo>,
    guests: Vec<GuestEntry>,
    topics: Vec<TopicSummary>,
    my_likes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GuestsResponse {
    success: bool,
    guests: Vec<GuestEntry>,
}

#[derive(Debug, Serialize)]
struct TopicsResponse {
    success: bool,
    topics: Vec<TopicSummary>,
}

/// Single entry point: every request names an action and the matching
/// handler runs against the shared store. Errors convert to
/// `{success:false, error}` at this boundary, nothing propagates raw.
async fn dispatch(
    State(state): State<AppState>,
    Query(params): Query<ActionParams>,
) -> Result<Response> {
    match params.action.as_deref() {
        Some("validate") => handle_validate(&state, &params),
        Some("init") => handle_init(&state, &params),
        Some("rsvp") => handle_rsvp(&state, &params),
        Some("topic") => handle_topic(&state, &params),
        Some("like") => handle_like(&state, &params),
        _ => Err(Error::UnknownAction),
    }
}

fn handle_validate(state: &AppState, params: &ActionParams) -> Result<Response> {
    let guest_id = match params.guest.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(Error::MissingGuestId),
    };
    let guest = guests::validate_guest(&state.store, guest_id)?;
    Ok(Json(ValidateResponse {
        success: true,
        guest,
    })
    .into_response())
}

// The aggregate snapshot a client loads first. An unknown (or absent) guest
// id still succeeds, just with a null rsvp and no likes.
fn handle_init(state: &AppState, params: &ActionParams) -> Result<Response> {
    let guest_id = params.guest.as_deref().unwrap_or_default();
    Ok(Json(InitResponse {
        success: true,
        rsvp: guests::get_rsvp(&state.store, guest_id)?,
        guests: guests::list_guests(&state.store)?,
        topics: topics::list_topics(&state.store)?,
        my_likes: topics::guest_likes(&state.store, guest_id)?,
    })
    .into_response())
}

fn handle_rsvp(state: &AppState, params: &ActionParams) -> Result<Response> {
    let guest_id = required(&params.guest)?;
    let name = required(&params.name)?;
    let status = required(&params.status)?;

    guests::upsert_rsvp(
        &state.store,
        guest_id,
        name,
        status,
        flag(&params.plus_one),
        flag(&params.show_public),
    )?;
    info!("rsvp saved for guest {guest_id}");

    Ok(Json(GuestsResponse {
        success: true,
        guests: guests::list_guests(&state.store)?,
    })
    .into_response())
}

fn handle_topic(state: &AppState, params: &ActionParams) -> Result<Response> {
    let guest_id = required(&params.guest)?;
    let text = required(&params.text)?;
    let author_name = params.author_name.as_deref().unwrap_or_default();

    let topic_id = topics::add_topic(&state.store, guest_id, author_name, text)?;
    info!("topic {topic_id} added by guest {guest_id}");

    Ok(Json(TopicsResponse {
        success: true,
        topics: topics::list_topics(&state.store)?,
    })
    .into_response())
}

fn handle_like(state: &AppState, params: &ActionParams) -> Result<Response> {
    let guest_id = required(&params.guest)?;
    let topic_id = required(&params.topic_id)?;

    topics::toggle_like(&state.store, guest_id, topic_id, flag(&params.unlike))?;

    Ok(Json(TopicsResponse {
        success: true,
        topics: topics::list_topics(&state.store)?,
    })
    .into_response())
}

/// Empty counts as missing, matching the falsy checks of the original form.
fn required(field: &Option<String>) -> Result<&str> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingFields),
    }
}

fn flag(field: &Option<String>) -> bool {
    field.as_deref() == Some("true")
}
