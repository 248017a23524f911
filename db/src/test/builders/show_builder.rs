use chrono::{Duration, NaiveDateTime, Utc};
use diesel::prelude::*;
use models::*;
use test::builders::*;
use uuid::Uuid;

pub struct ShowBuilder<'a> {
    venue_id: Option<Uuid>,
    artist_id: Option<Uuid>,
    start_time: NaiveDateTime,
    connection: &'a PgConnection,
}

impl<'a> ShowBuilder<'a> {
    pub fn new(connection: &PgConnection) -> ShowBuilder {
        ShowBuilder {
            connection,
            venue_id: None,
            artist_id: None,
            start_time: Utc::now().naive_utc() + Duration::days(7),
        }
    }

    pub fn with_venue(mut self, venue: &Venue) -> Self {
        self.venue_id = Some(venue.id);
        self
    }

    pub fn with_artist(mut self, artist: &Artist) -> Self {
        self.artist_id = Some(artist.id);
        self
    }

    pub fn with_start_time(mut self, start_time: NaiveDateTime) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn finish(self) -> Show {
        let venue_id = match self.venue_id {
            Some(id) => id,
            None => VenueBuilder::new(self.connection).finish().id,
        };
        let artist_id = match self.artist_id {
            Some(id) => id,
            None => ArtistBuilder::new(self.connection).finish().id,
        };
        Show::create(venue_id, artist_id, self.start_time)
            .commit(self.connection)
            .unwrap()
    }
}
