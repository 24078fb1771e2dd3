use async_trait::async_trait;
use chrono::NaiveDate;
use events_errors::EventError;
use events_models::{Event, EventCategory, NewEvent};
use sql_connection::SqlConnect;
use tokio_postgres::{Row, types::ToSql};
use tracing::{debug, instrument};

use crate::store::EventStore;

type PgParam<'a> = dyn ToSql + Sync + 'a;

const SELECT_EVENTS: &str = "SELECT id, name, event_date, start_time, \
                             end_time, location, organizer, capacity, \
                             description, price, category FROM events";

// Substring filters use strpos so `%` and `_` in a term match literally.
const NAME_CONTAINS: &str = "WHERE strpos(lower(name), lower($1)) > 0";
const ORGANIZER_CONTAINS: &str =
    "WHERE strpos(lower(organizer), lower($1)) > 0";
const DATE_BETWEEN: &str = "WHERE event_date BETWEEN $1 AND $2";
const CATEGORY_FROM: &str = "WHERE category = $1 AND event_date >= $2";
const DATE_AFTER: &str = "WHERE event_date > $1";

fn select_sql(filter: &str) -> String {
    if filter.is_empty() {
        format!("{SELECT_EVENTS} ORDER BY id")
    }
    else {
        format!("{SELECT_EVENTS} {filter} ORDER BY id")
    }
}

const RETURNING: &str = "RETURNING id, name, event_date, start_time, \
                         end_time, location, organizer, capacity, \
                         description, price, category";

#[derive(Clone)]
pub struct EventDao {
    db: SqlConnect,
}

impl EventDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    fn map_row(row: &Row) -> Event {
        Event {
            id: row.get(0),
            name: row.get(1),
            event_date: row.get(2),
            start_time: row.get(3),
            end_time: row.get(4),
            location: row.get(5),
            organizer: row.get(6),
            capacity: row.get(7),
            description: row.get(8),
            price: row.get(9),
            category: row.get(10),
        }
    }

    async fn query_events(
        &self, filter: &str, params: &[&PgParam<'_>],
    ) -> Result<Vec<Event>, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare(&select_sql(filter)).await?;
        let rows = client.query(&stmt, params).await?;
        debug!(rows = rows.len(), "events fetched");
        Ok(rows.iter().map(Self::map_row).collect())
    }
}

#[async_trait]
impl EventStore for EventDao {
    #[instrument(skip(self, event), fields(name = %event.name))]
    async fn insert(&self, event: NewEvent) -> Result<Event, EventError> {
        let client = self.db.get_client().await?;
        let query = format!(
            "INSERT INTO events (name, event_date, start_time, end_time, \
             location, organizer, capacity, description, price, category) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) {RETURNING}"
        );
        let stmt = client.prepare(&query).await?;
        let row = client
            .query_one(
                &stmt,
                &[
                    &event.name,
                    &event.event_date,
                    &event.start_time,
                    &event.end_time,
                    &event.location,
                    &event.organizer,
                    &event.capacity,
                    &event.description,
                    &event.price,
                    &event.category,
                ],
            )
            .await?;
        Ok(Self::map_row(&row))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, EventError> {
        let client = self.db.get_client().await?;
        let query = format!("{SELECT_EVENTS} WHERE id = $1");
        let stmt = client.prepare(&query).await?;
        let row = client.query_opt(&stmt, &[&id]).await?;
        Ok(row.as_ref().map(Self::map_row))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Event>, EventError> {
        self.query_events("", &[]).await
    }

    #[instrument(skip(self))]
    async fn exists_by_id(&self, id: i64) -> Result<bool, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
            .await?;
        let row = client.query_one(&stmt, &[&id]).await?;
        Ok(row.get(0))
    }

    #[instrument(skip(self, event))]
    async fn replace(
        &self, id: i64, event: NewEvent,
    ) -> Result<Event, EventError> {
        let client = self.db.get_client().await?;
        let query = format!(
            "UPDATE events SET name = $2, event_date = $3, start_time = $4, \
             end_time = $5, location = $6, organizer = $7, capacity = $8, \
             description = $9, price = $10, category = $11 WHERE id = $1 \
             {RETURNING}"
        );
        let stmt = client.prepare(&query).await?;
        let row = client
            .query_opt(
                &stmt,
                &[
                    &id,
                    &event.name,
                    &event.event_date,
                    &event.start_time,
                    &event.end_time,
                    &event.location,
                    &event.organizer,
                    &event.capacity,
                    &event.description,
                    &event.price,
                    &event.category,
                ],
            )
            .await?;

        row.as_ref()
            .map(Self::map_row)
            .ok_or(EventError::NotFound { event_id: id })
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<bool, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare("DELETE FROM events WHERE id = $1").await?;
        let affected = client.execute(&stmt, &[&id]).await?;
        Ok(affected > 0)
    }

    #[instrument(skip(self))]
    async fn find_by_category(
        &self, category: EventCategory,
    ) -> Result<Vec<Event>, EventError> {
        self.query_events("WHERE category = $1", &[&category]).await
    }

    #[instrument(skip(self))]
    async fn find_by_date_range(
        &self, start: NaiveDate, end: NaiveDate,
    ) -> Result<Vec<Event>, EventError> {
        self.query_events(DATE_BETWEEN, &[&start, &end]).await
    }

    #[instrument(skip(self))]
    async fn find_by_organizer_containing(
        &self, organizer: &str,
    ) -> Result<Vec<Event>, EventError> {
        self.query_events(ORGANIZER_CONTAINS, &[&organizer]).await
    }

    #[instrument(skip(self))]
    async fn find_by_name_containing(
        &self, name: &str,
    ) -> Result<Vec<Event>, EventError> {
        self.query_events(NAME_CONTAINS, &[&name]).await
    }

    #[instrument(skip(self))]
    async fn find_upcoming_by_category(
        &self, category: EventCategory, from: NaiveDate,
    ) -> Result<Vec<Event>, EventError> {
        self.query_events(CATEGORY_FROM, &[&category, &from]).await
    }

    #[instrument(skip(self))]
    async fn find_after(
        &self, date: NaiveDate,
    ) -> Result<Vec<Event>, EventError> {
        self.query_events(DATE_AFTER, &[&date]).await
    }
}
