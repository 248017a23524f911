use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use models::*;
use schema::{artists, shows, venues};
use utils::errors::ConvertToDatabaseError;
use utils::errors::DatabaseError;
use utils::errors::ErrorCode;
use uuid::Uuid;

/// Associative entity linking one artist to one venue at a start time.
#[derive(Associations, Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(Artist)]
#[belongs_to(Venue)]
#[table_name = "shows"]
pub struct Show {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub artist_id: Uuid,
    pub start_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Insertable, Serialize, Deserialize, PartialEq, Debug)]
#[table_name = "shows"]
pub struct NewShow {
    pub venue_id: Uuid,
    pub artist_id: Uuid,
    pub start_time: NaiveDateTime,
}

impl NewShow {
    /// Referential integrity is enforced by the database; inserting a show
    /// against a missing venue or artist surfaces as a foreign key error.
    pub fn commit(&self, conn: &PgConnection) -> Result<Show, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new show",
            diesel::insert_into(shows::table).values(self).get_result(conn),
        )
    }
}

impl Show {
    pub fn create(venue_id: Uuid, artist_id: Uuid, start_time: NaiveDateTime) -> NewShow {
        NewShow {
            venue_id,
            artist_id,
            start_time,
        }
    }

    pub fn find(id: Uuid, conn: &PgConnection) -> Result<Show, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading show",
            shows::table.find(id).first::<Show>(conn),
        )
    }

    /// Every show joined with its venue and artist, ordered by start time.
    pub fn all(conn: &PgConnection) -> Result<Vec<(Show, Venue, Artist)>, DatabaseError> {
        shows::table
            .inner_join(venues::table)
            .inner_join(artists::table)
            .order_by(shows::start_time.asc())
            .select((shows::all_columns, venues::all_columns, artists::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all shows")
    }
}
