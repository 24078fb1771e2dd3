use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use common_errors::{ApiErrorResponse, AppError};
use events_models::{Event, EventCategory};
use events_queries::{
    DateRangeQuery, GlobalSearchQuery, NameSearchQuery, OrganizerQuery,
};
use events_responses::{CategoryResponse, EventResponse};
use tracing::instrument;

use crate::handlers::EventServices;

fn parse_category(raw: &str) -> Result<EventCategory, AppError> {
    raw.parse().map_err(|err: events_models::UnknownCategory| {
        AppError::bad_request("INVALID_CATEGORY", &err.to_string())
    })
}

fn to_responses(events: Vec<Event>) -> Json<Vec<EventResponse>> {
    Json(events.into_iter().map(Into::into).collect())
}

#[utoipa::path(
    get,
    path = "/api/events/category/{category}",
    params(
        ("category" = String, Path, description = "Category name, e.g. WORKSHOP")
    ),
    responses(
        (status = 200, description = "Events in the category", body = Vec<EventResponse>),
        (status = 400, description = "Unknown category", body = ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn events_by_category(
    State(services): State<EventServices>, Path(category): Path<String>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let category = parse_category(&category)?;
    let events = services.filter_events.by_category(category).await?;
    Ok(to_responses(events))
}

#[utoipa::path(
    get,
    path = "/api/events/date-range",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Events dated within the range, inclusive", body = Vec<EventResponse>),
        (status = 400, description = "Missing or malformed dates")
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn events_by_date_range(
    State(services): State<EventServices>, Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = services.filter_events.by_date_range(query).await?;
    Ok(to_responses(events))
}

#[utoipa::path(
    get,
    path = "/api/events/organizer",
    params(OrganizerQuery),
    responses(
        (status = 200, description = "Events whose organizer contains the term", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn events_by_organizer(
    State(services): State<EventServices>, Query(query): Query<OrganizerQuery>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = services.filter_events.by_organizer(query).await?;
    Ok(to_responses(events))
}

#[utoipa::path(
    get,
    path = "/api/events/search",
    params(NameSearchQuery),
    responses(
        (status = 200, description = "Events whose name contains the term", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn search_by_name(
    State(services): State<EventServices>, Query(query): Query<NameSearchQuery>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = services.filter_events.by_name(query).await?;
    Ok(to_responses(events))
}

#[utoipa::path(
    get,
    path = "/api/events/search/global",
    params(GlobalSearchQuery),
    responses(
        (status = 200, description = "Event with the given id, then events whose name contains the query", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn global_search(
    State(services): State<EventServices>,
    Query(query): Query<GlobalSearchQuery>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = services.search_events.execute(query).await?;
    Ok(to_responses(events))
}

#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    responses(
        (status = 200, description = "Events dated after today", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn upcoming_events(
    State(services): State<EventServices>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = services.upcoming_events.all().await?;
    Ok(to_responses(events))
}

#[utoipa::path(
    get,
    path = "/api/events/upcoming/category/{category}",
    params(
        ("category" = String, Path, description = "Category name, e.g. WORKSHOP")
    ),
    responses(
        (status = 200, description = "Events in the category dated today or later", body = Vec<EventResponse>),
        (status = 400, description = "Unknown category", body = ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn upcoming_by_category(
    State(services): State<EventServices>, Path(category): Path<String>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let category = parse_category(&category)?;
    let events = services.upcoming_events.by_category(category).await?;
    Ok(to_responses(events))
}

#[utoipa::path(
    get,
    path = "/api/events/categories",
    responses(
        (status = 200, description = "Every category with its display label", body = Vec<CategoryResponse>)
    ),
    tag = "events"
)]
pub async fn list_categories() -> Json<Vec<CategoryResponse>> {
    Json(CategoryResponse::all())
}
