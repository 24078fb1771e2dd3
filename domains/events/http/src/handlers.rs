use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use common_errors::{ApiErrorResponse, AppError};
use events_commands::{
    CreateEventCommand, CreateEventHandler, DeleteEventCommand,
    DeleteEventHandler, UpdateEventCommand, UpdateEventHandler,
};
use events_dao::EventStore;
use events_models::{Clock, EventRecord};
use events_queries::{
    FilterEventsQueryHandler, GetEventQuery, GetEventQueryHandler,
    ListEventsQueryHandler, SearchEventsQueryHandler,
    UpcomingEventsQueryHandler,
};
use events_responses::EventResponse;
use tracing::instrument;

use crate::{
    extract::EventBody,
    filters::{
        events_by_category, events_by_date_range, events_by_organizer,
        global_search, list_categories, search_by_name, upcoming_by_category,
        upcoming_events,
    },
};

#[derive(Clone)]
pub struct EventServices {
    pub create_event: CreateEventHandler,
    pub update_event: UpdateEventHandler,
    pub delete_event: DeleteEventHandler,

    pub get_event: GetEventQueryHandler,
    pub list_events: ListEventsQueryHandler,
    pub filter_events: FilterEventsQueryHandler,
    pub search_events: SearchEventsQueryHandler,
    pub upcoming_events: UpcomingEventsQueryHandler,
}

impl EventServices {
    pub fn new(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            create_event: CreateEventHandler::new(store.clone(), clock.clone()),
            update_event: UpdateEventHandler::new(store.clone(), clock.clone()),
            delete_event: DeleteEventHandler::new(store.clone()),
            get_event: GetEventQueryHandler::new(store.clone()),
            list_events: ListEventsQueryHandler::new(store.clone()),
            filter_events: FilterEventsQueryHandler::new(store.clone()),
            search_events: SearchEventsQueryHandler::new(store.clone()),
            upcoming_events: UpcomingEventsQueryHandler::new(store, clock),
        }
    }
}

pub struct EventHandlers;

impl EventHandlers {
    pub fn routes() -> Router<EventServices> {
        Router::new()
            .route("/", get(list_events).post(create_event))
            .route(
                "/{id}",
                get(get_event).put(update_event).delete(delete_event),
            )
            .route("/category/{category}", get(events_by_category))
            .route("/date-range", get(events_by_date_range))
            .route("/organizer", get(events_by_organizer))
            .route("/search", get(search_by_name))
            .route("/search/global", get(global_search))
            .route("/upcoming", get(upcoming_events))
            .route("/upcoming/category/{category}", get(upcoming_by_category))
            .route("/categories", get(list_categories))
    }
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = EventRecord,
    responses(
        (status = 201, description = "Event created successfully", body = EventResponse),
        (status = 400, description = "Event failed validation or body was malformed", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn create_event(
    State(services): State<EventServices>,
    EventBody(event): EventBody<EventRecord>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let event = services
        .create_event
        .execute(CreateEventCommand { event })
        .await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    request_body = EventRecord,
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event updated successfully", body = EventResponse),
        (status = 404, description = "Event not found", body = ApiErrorResponse),
        (status = 400, description = "Event failed validation", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all, fields(event_id = id))]
pub async fn update_event(
    State(services): State<EventServices>, Path(id): Path<i64>,
    EventBody(event): EventBody<EventRecord>,
) -> Result<Json<EventResponse>, AppError> {
    let command = UpdateEventCommand {
        event_id: id,
        event,
    };
    let event = services.update_event.execute(command).await?;
    Ok(Json(event.into()))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted successfully"),
        (status = 404, description = "Event not found", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all, fields(event_id = id))]
pub async fn delete_event(
    State(services): State<EventServices>, Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    services
        .delete_event
        .execute(DeleteEventCommand { event_id: id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all, fields(event_id = id))]
pub async fn get_event(
    State(services): State<EventServices>, Path(id): Path<i64>,
) -> Result<Json<EventResponse>, AppError> {
    let event = services
        .get_event
        .execute(GetEventQuery { event_id: id })
        .await?;
    Ok(Json(event.into()))
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Every event, ordered by id", body = Vec<EventResponse>),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn list_events(
    State(services): State<EventServices>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = services.list_events.execute().await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}
