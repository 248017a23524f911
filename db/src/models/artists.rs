use chrono::NaiveDateTime;
use diesel;
use diesel::expression::dsl;
use diesel::prelude::*;
use models::*;
use schema::{artists, shows, venues};
use utils::errors::ConvertToDatabaseError;
use utils::errors::DatabaseError;
use utils::errors::ErrorCode;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[table_name = "artists"]
pub struct Artist {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_url: Option<String>,
    pub facebook_url: Option<String>,
    pub website_url: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Default, Insertable, Serialize, Deserialize, PartialEq, Debug, Validate)]
#[table_name = "artists"]
pub struct NewArtist {
    #[validate(length(min = "1", message = "Name is required"))]
    pub name: String,
    #[validate(length(min = "1", message = "City is required"))]
    pub city: String,
    #[validate(length(min = "1", message = "State is required"))]
    pub state: String,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[validate(url(message = "Image URL is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub image_url: Option<String>,
    #[validate(url(message = "Facebook URL is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub facebook_url: Option<String>,
    #[validate(url(message = "Website URL is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub website_url: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

/// Replacement set for an artist's mutable fields. As with venues, absent
/// optional fields become NULL so the update replaces the row in full.
#[derive(AsChangeset, Clone, Default, Deserialize, Serialize, Validate)]
#[changeset_options(treat_none_as_null = "true")]
#[table_name = "artists"]
pub struct ArtistEditableAttributes {
    #[validate(length(min = "1", message = "Name is required"))]
    pub name: String,
    #[validate(length(min = "1", message = "City is required"))]
    pub city: String,
    #[validate(length(min = "1", message = "State is required"))]
    pub state: String,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[validate(url(message = "Image URL is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub image_url: Option<String>,
    #[validate(url(message = "Facebook URL is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub facebook_url: Option<String>,
    #[validate(url(message = "Website URL is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub website_url: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

impl NewArtist {
    pub fn commit(&self, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        self.validate()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new artist",
            diesel::insert_into(artists::table).values(self).get_result(conn),
        )
    }
}

impl Artist {
    pub fn create(name: &str, city: &str, state: &str) -> NewArtist {
        NewArtist {
            name: String::from(name),
            city: String::from(city),
            state: String::from(state),
            ..Default::default()
        }
    }

    pub fn find(id: Uuid, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading artist",
            artists::table.find(id).first::<Artist>(conn),
        )
    }

    pub fn all(conn: &PgConnection) -> Result<Vec<Artist>, DatabaseError> {
        artists::table
            .order_by(artists::name)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all artists")
    }

    /// Case insensitive substring match on the artist name. A `None` or
    /// empty filter matches every artist.
    pub fn search(query_filter: Option<String>, conn: &PgConnection) -> Result<Vec<Artist>, DatabaseError> {
        let query_like = match query_filter {
            Some(n) => format!("%{}%", n),
            None => "%".to_string(),
        };
        artists::table
            .filter(artists::name.ilike(query_like))
            .order_by(artists::name)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search artists")
    }

    pub fn update(&self, attributes: ArtistEditableAttributes, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        attributes.validate()?;
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Could not update artist",
            diesel::update(self)
                .set((attributes, artists::updated_at.eq(dsl::now)))
                .get_result(conn),
        )
    }

    /// Deletes the artist together with its shows, mirroring
    /// `Venue::destroy`. Returns the number of rows deleted.
    pub fn destroy(&self, conn: &PgConnection) -> Result<usize, DatabaseError> {
        let show_count = diesel::delete(shows::table.filter(shows::artist_id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete shows for artist")?;
        let artist_count = diesel::delete(artists::table.filter(artists::id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete artist")?;
        Ok(show_count + artist_count)
    }

    /// All shows this artist plays joined with the hosting venue, ordered
    /// by start time.
    pub fn shows(&self, conn: &PgConnection) -> Result<Vec<(Show, Venue)>, DatabaseError> {
        shows::table
            .inner_join(venues::table)
            .filter(shows::artist_id.eq(self.id))
            .order_by(shows::start_time.asc())
            .select((shows::all_columns, venues::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load shows for artist")
    }
}
