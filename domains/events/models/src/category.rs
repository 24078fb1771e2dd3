use std::{fmt, str::FromStr};

use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    Conference,
    Workshop,
    Seminar,
    Meetup,
    Hackathon,
    Training,
    Networking,
    Presentation,
    Course,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 10] = [
        Self::Conference,
        Self::Workshop,
        Self::Seminar,
        Self::Meetup,
        Self::Hackathon,
        Self::Training,
        Self::Networking,
        Self::Presentation,
        Self::Course,
        Self::Other,
    ];

    /// Stored and wire representation, e.g. `CONFERENCE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conference => "CONFERENCE",
            Self::Workshop => "WORKSHOP",
            Self::Seminar => "SEMINAR",
            Self::Meetup => "MEETUP",
            Self::Hackathon => "HACKATHON",
            Self::Training => "TRAINING",
            Self::Networking => "NETWORKING",
            Self::Presentation => "PRESENTATION",
            Self::Course => "COURSE",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable label shown to end users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Conference => "Conferência",
            Self::Workshop => "Workshop",
            Self::Seminar => "Seminário",
            Self::Meetup => "Meetup",
            Self::Hackathon => "Hackathon",
            Self::Training => "Treinamento",
            Self::Networking => "Networking",
            Self::Presentation => "Apresentação",
            Self::Course => "Curso",
            Self::Other => "Outro",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown event category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for EventCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl ToSql for EventCategory {
    tokio_postgres::types::to_sql_checked!();

    fn to_sql(
        &self, ty: &Type, out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        self.as_str().to_sql(ty, out)
    }

    fn accepts(ty: &Type) -> bool { <&str as ToSql>::accepts(ty) }
}

impl<'a> FromSql<'a> for EventCategory {
    fn from_sql(
        ty: &Type, raw: &'a [u8],
    ) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
        let value = <&str as FromSql>::from_sql(ty, raw)?;
        Ok(value.parse()?)
    }

    fn accepts(ty: &Type) -> bool { <&str as FromSql>::accepts(ty) }
}
