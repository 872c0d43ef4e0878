//! Location entity <-> model mapper

use guesthouse_core::entities::Location;
use guesthouse_core::value_objects::{Lifecycle, Snowflake};

use crate::models::LocationModel;

/// Convert LocationModel to Location entity
impl From<LocationModel> for Location {
    fn from(model: LocationModel) -> Self {
        Location {
            id: Snowflake::new(model.id),
            name: model.name,
            code: model.code,
            lifecycle: Lifecycle::from(model.lifecycle),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Location entity reference to values for database insertion
pub struct LocationInsert<'a> {
    pub id: i64,
    pub name: &'a str,
    pub code: &'a str,
}

impl<'a> LocationInsert<'a> {
    pub fn new(location: &'a Location) -> Self {
        Self {
            id: location.id.into_inner(),
            name: &location.name,
            code: &location.code,
        }
    }
}

/// Convert Location entity reference to values for database update
pub struct LocationUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
}

impl<'a> LocationUpdate<'a> {
    pub fn new(location: &'a Location) -> Self {
        Self {
            id: location.id.into_inner(),
            name: &location.name,
        }
    }
}
