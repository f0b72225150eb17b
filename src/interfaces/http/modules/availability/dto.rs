//! Availability DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Slot;

/// Both parameters are optional at the HTTP level; missing or unparseable
/// values produce an empty slot list instead of an error.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TimeSlotsQuery {
    /// Restaurant ID
    pub restaurant_id: Option<String>,
    /// Target date, `YYYY-MM-DD`
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlotDto {
    #[schema(example = "18:00")]
    pub time: String,
    pub is_full: bool,
}

impl From<Slot> for SlotDto {
    fn from(s: Slot) -> Self {
        Self {
            time: s.time,
            is_full: s.is_full,
        }
    }
}
