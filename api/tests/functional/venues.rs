use crate::support;
use crate::support::database::TestDatabase;
use actix_web::http::StatusCode;
use actix_web::web::Path;
use api::controllers::venues;
use api::extractors::Json;
use api::models::PathParameters;
use chrono::{Duration, Utc};
use db::prelude::*;
use uuid::Uuid;

// These tests need a live Postgres database; run with `cargo test -- --ignored`.

#[actix_rt::test]
#[ignore]
async fn index_groups_venues_by_location() {
    let database = TestDatabase::new();
    database
        .create_venue()
        .with_name("The Musical Hop".to_string())
        .finish();
    database
        .create_venue()
        .with_name("Park Square Live Music & Coffee".to_string())
        .finish();
    database
        .create_venue()
        .with_name("The Dueling Pianos Bar".to_string())
        .with_city("New York".to_string())
        .with_state("NY".to_string())
        .finish();

    let response = venues::index(database.connection.clone()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let groups: Vec<VenueGroup> = serde_json::from_str(body).unwrap();

    assert_eq!(groups.len(), 2);
    let san_francisco = groups
        .iter()
        .find(|g| g.city == "San Francisco" && g.state == "CA")
        .unwrap();
    assert_eq!(san_francisco.venues.len(), 2);
    let new_york = groups.iter().find(|g| g.city == "New York" && g.state == "NY").unwrap();
    assert_eq!(new_york.venues.len(), 1);
    assert_eq!(new_york.venues[0].name, "The Dueling Pianos Bar");
}

#[actix_rt::test]
#[ignore]
async fn show_partitions_past_and_upcoming() {
    let database = TestDatabase::new();
    let venue = database.create_venue().finish();
    let artist = database.create_artist().finish();
    database
        .create_show()
        .with_venue(&venue)
        .with_artist(&artist)
        .with_start_time(Utc::now().naive_utc() - Duration::days(30))
        .finish();
    database
        .create_show()
        .with_venue(&venue)
        .with_artist(&artist)
        .with_start_time(Utc::now().naive_utc() + Duration::days(30))
        .finish();

    let path: Path<PathParameters> = Path::from(PathParameters { id: venue.id });
    let response = venues::show((database.connection.clone(), path)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let profile: VenueProfile = serde_json::from_str(body).unwrap();

    assert_eq!(profile.id, venue.id);
    assert_eq!(profile.past_shows.len(), 1);
    assert_eq!(profile.upcoming_shows.len(), 1);
    assert_eq!(profile.past_shows[0].artist_id, artist.id);
}

#[actix_rt::test]
#[ignore]
async fn show_missing_venue_is_not_found() {
    let database = TestDatabase::new();

    let path: Path<PathParameters> = Path::from(PathParameters { id: Uuid::new_v4() });
    let response = support::unwrap_response(venues::show((database.connection.clone(), path)).await);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
#[ignore]
async fn create() {
    let database = TestDatabase::new();

    let json = Json(Venue::create("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street"));

    let response = venues::create((database.connection.clone(), json)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let venue: Venue = serde_json::from_str(body).unwrap();
    assert_eq!(venue.name, "The Musical Hop");
}

#[actix_rt::test]
#[ignore]
async fn create_with_validation_errors() {
    let database = TestDatabase::new();

    let json = Json(Venue::create("", "San Francisco", "CA", "1015 Folsom Street"));

    let response = support::unwrap_response(venues::create((database.connection.clone(), json)).await);
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = support::unwrap_body_to_string(&response).unwrap();
    assert!(body.contains("name"));
}

#[actix_rt::test]
#[ignore]
async fn update() {
    let database = TestDatabase::new();
    let venue = database.create_venue().finish();

    let attributes = VenueEditableAttributes {
        name: "The Musical Hop Annex".to_string(),
        city: venue.city.clone(),
        state: venue.state.clone(),
        address: venue.address.clone(),
        phone: None,
        genres: venue.genres.clone(),
        image_url: None,
        facebook_url: None,
        website_url: None,
        seeking_talent: true,
        seeking_description: Some("Local artists wanted".to_string()),
    };

    let path: Path<PathParameters> = Path::from(PathParameters { id: venue.id });
    let response = venues::update((database.connection.clone(), path, Json(attributes)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let updated: Venue = serde_json::from_str(body).unwrap();
    assert_eq!(updated.name, "The Musical Hop Annex");
    assert!(updated.seeking_talent);
}

#[actix_rt::test]
#[ignore]
async fn destroy_removes_venue_and_its_shows() {
    let database = TestDatabase::new();
    let venue = database.create_venue().finish();
    database.create_show().with_venue(&venue).finish();

    let path: Path<PathParameters> = Path::from(PathParameters { id: venue.id });
    let response = venues::destroy((database.connection.clone(), path)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let find_result = Venue::find(venue.id, database.connection.get());
    assert!(find_result.is_err());
}
