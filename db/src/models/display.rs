use chrono::NaiveDateTime;
use models::*;
use uuid::Uuid;

/// Venue reduced to the fields shown on listing and search pages.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct VenueSummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ArtistSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<Venue> for VenueSummary {
    fn from(venue: Venue) -> Self {
        VenueSummary {
            id: venue.id,
            name: venue.name,
        }
    }
}

impl From<Artist> for ArtistSummary {
    fn from(artist: Artist) -> Self {
        ArtistSummary {
            id: artist.id,
            name: artist.name,
        }
    }
}

/// Venues sharing a (city, state) pair, used by the venues index page.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct VenueGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

impl VenueGroup {
    /// Groups venues by their (city, state) pair. Groups appear in the
    /// order their pair is first observed and each venue lands in exactly
    /// one group; a pair with no venues produces no group.
    pub fn from_venues(venues: Vec<Venue>) -> Vec<VenueGroup> {
        let mut groups: Vec<VenueGroup> = Vec::new();
        for venue in venues {
            match groups
                .iter()
                .position(|group| group.city == venue.city && group.state == venue.state)
            {
                Some(index) => groups[index].venues.push(VenueSummary {
                    id: venue.id,
                    name: venue.name,
                }),
                None => groups.push(VenueGroup {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: vec![VenueSummary {
                        id: venue.id,
                        name: venue.name,
                    }],
                }),
            }
        }
        groups
    }
}

/// Search response shape shared by venue and artist search.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResults<T> {
    fn from(data: Vec<T>) -> Self {
        SearchResults {
            count: data.len(),
            data,
        }
    }
}

/// A show as listed on a venue page: the performing artist and start time.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct VenueShowEntry {
    pub artist_id: Uuid,
    pub artist_image_url: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show as listed on an artist page: the hosting venue and start time.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ArtistShowEntry {
    pub venue_id: Uuid,
    pub venue_image_url: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Venue detail page payload: the venue's fields plus its shows split
/// into past and upcoming.
///
/// Boundary rule: a show is upcoming when `start_time >= now` and past
/// when `start_time < now`, so a show starting at the current instant
/// counts as upcoming and every show lands in exactly one partition.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct VenueProfile {
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
    pub past_shows: Vec<VenueShowEntry>,
    pub upcoming_shows: Vec<VenueShowEntry>,
}

impl VenueProfile {
    pub fn new(venue: Venue, shows: Vec<(Show, Artist)>, now: NaiveDateTime) -> VenueProfile {
        let (upcoming, past): (Vec<(Show, Artist)>, Vec<(Show, Artist)>) =
            shows.into_iter().partition(|(show, _)| show.start_time >= now);

        VenueProfile {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            genres: venue.genres,
            image_url: venue.image_url,
            facebook_url: venue.facebook_url,
            website_url: venue.website_url,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            past_shows: past.into_iter().map(VenueShowEntry::from).collect(),
            upcoming_shows: upcoming.into_iter().map(VenueShowEntry::from).collect(),
        }
    }
}

impl From<(Show, Artist)> for VenueShowEntry {
    fn from((show, artist): (Show, Artist)) -> Self {
        VenueShowEntry {
            artist_id: artist.id,
            artist_image_url: artist.image_url,
            start_time: show.start_time,
        }
    }
}

/// Artist detail page payload, partitioned with the same boundary rule as
/// `VenueProfile`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ArtistProfile {
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
    pub past_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows: Vec<ArtistShowEntry>,
}

impl ArtistProfile {
    pub fn new(artist: Artist, shows: Vec<(Show, Venue)>, now: NaiveDateTime) -> ArtistProfile {
        let (upcoming, past): (Vec<(Show, Venue)>, Vec<(Show, Venue)>) =
            shows.into_iter().partition(|(show, _)| show.start_time >= now);

        ArtistProfile {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            image_url: artist.image_url,
            facebook_url: artist.facebook_url,
            website_url: artist.website_url,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            past_shows: past.into_iter().map(ArtistShowEntry::from).collect(),
            upcoming_shows: upcoming.into_iter().map(ArtistShowEntry::from).collect(),
        }
    }
}

impl From<(Show, Venue)> for ArtistShowEntry {
    fn from((show, venue): (Show, Venue)) -> Self {
        ArtistShowEntry {
            venue_id: venue.id,
            venue_image_url: venue.image_url,
            start_time: show.start_time,
        }
    }
}

/// A show as listed on the shows index page.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ShowListEntry {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_url: Option<String>,
    pub start_time: NaiveDateTime,
}

impl From<(Show, Venue, Artist)> for ShowListEntry {
    fn from((show, venue, artist): (Show, Venue, Artist)) -> Self {
        ShowListEntry {
            venue_id: venue.id,
            venue_name: venue.name,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_url: artist.image_url,
            start_time: show.start_time,
        }
    }
}
