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
#[table_name = "venues"]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_url: Option<String>,
    pub facebook_url: Option<String>,
    pub website_url: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Default, Insertable, Serialize, Deserialize, PartialEq, Debug, Validate)]
#[table_name = "venues"]
pub struct NewVenue {
    #[validate(length(min = "1", message = "Name is required"))]
    pub name: String,
    #[validate(length(min = "1", message = "City is required"))]
    pub city: String,
    #[validate(length(min = "1", message = "State is required"))]
    pub state: String,
    #[validate(length(min = "1", message = "Address is required"))]
    pub address: String,
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
    pub seeking_talent: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

/// Replacement set for a venue's mutable fields. Updates are a full
/// replace: absent optional fields become NULL rather than being skipped.
#[derive(AsChangeset, Clone, Default, Deserialize, Serialize, Validate)]
#[changeset_options(treat_none_as_null = "true")]
#[table_name = "venues"]
pub struct VenueEditableAttributes {
    #[validate(length(min = "1", message = "Name is required"))]
    pub name: String,
    #[validate(length(min = "1", message = "City is required"))]
    pub city: String,
    #[validate(length(min = "1", message = "State is required"))]
    pub state: String,
    #[validate(length(min = "1", message = "Address is required"))]
    pub address: String,
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
    pub seeking_talent: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

impl NewVenue {
    pub fn commit(&self, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        self.validate()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new venue",
            diesel::insert_into(venues::table).values(self).get_result(conn),
        )
    }
}

impl Venue {
    pub fn create(name: &str, city: &str, state: &str, address: &str) -> NewVenue {
        NewVenue {
            name: String::from(name),
            city: String::from(city),
            state: String::from(state),
            address: String::from(address),
            ..Default::default()
        }
    }

    pub fn find(id: Uuid, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading venue",
            venues::table.find(id).first::<Venue>(conn),
        )
    }

    pub fn all(conn: &PgConnection) -> Result<Vec<Venue>, DatabaseError> {
        venues::table
            .order_by(venues::name)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all venues")
    }

    /// Case insensitive substring match on the venue name. A `None` or
    /// empty filter matches every venue.
    pub fn search(query_filter: Option<String>, conn: &PgConnection) -> Result<Vec<Venue>, DatabaseError> {
        let query_like = match query_filter {
            Some(n) => format!("%{}%", n),
            None => "%".to_string(),
        };
        venues::table
            .filter(venues::name.ilike(query_like))
            .order_by(venues::name)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search venues")
    }

    pub fn update(&self, attributes: VenueEditableAttributes, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        attributes.validate()?;
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Could not update venue",
            diesel::update(self)
                .set((attributes, venues::updated_at.eq(dsl::now)))
                .get_result(conn),
        )
    }

    /// Deletes the venue together with its shows. The shows are removed
    /// explicitly inside the caller's transaction rather than relying on
    /// relationship metadata. Returns the number of rows deleted.
    pub fn destroy(&self, conn: &PgConnection) -> Result<usize, DatabaseError> {
        let show_count = diesel::delete(shows::table.filter(shows::venue_id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete shows for venue")?;
        let venue_count = diesel::delete(venues::table.filter(venues::id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete venue")?;
        Ok(show_count + venue_count)
    }

    /// All shows hosted at this venue joined with their performing artist,
    /// ordered by start time.
    pub fn shows(&self, conn: &PgConnection) -> Result<Vec<(Show, Artist)>, DatabaseError> {
        shows::table
            .inner_join(artists::table)
            .filter(shows::venue_id.eq(self.id))
            .order_by(shows::start_time.asc())
            .select((shows::all_columns, artists::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load shows for venue")
    }
}
