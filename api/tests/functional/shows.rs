use crate::support;
use crate::support::database::TestDatabase;
use actix_web::http::StatusCode;
use api::controllers::shows;
use api::extractors::Json;
use chrono::{Duration, Utc};
use db::prelude::*;
use uuid::Uuid;

// These tests need a live Postgres database; run with `cargo test -- --ignored`.

#[actix_rt::test]
#[ignore]
async fn index_orders_by_start_time() {
    let database = TestDatabase::new();
    let later = database
        .create_show()
        .with_start_time(Utc::now().naive_utc() + Duration::days(14))
        .finish();
    let earlier = database
        .create_show()
        .with_start_time(Utc::now().naive_utc() + Duration::days(1))
        .finish();

    let response = shows::index(database.connection.clone()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let entries: Vec<ShowListEntry> = serde_json::from_str(body).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].start_time, earlier.start_time);
    assert_eq!(entries[1].start_time, later.start_time);
}

#[actix_rt::test]
#[ignore]
async fn create() {
    let database = TestDatabase::new();
    let venue = database.create_venue().finish();
    let artist = database.create_artist().finish();

    let start_time = Utc::now().naive_utc() + Duration::days(3);
    let json = Json(Show::create(venue.id, artist.id, start_time));

    let response = shows::create((database.connection.clone(), json)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let show: Show = serde_json::from_str(body).unwrap();
    assert_eq!(show.venue_id, venue.id);
    assert_eq!(show.artist_id, artist.id);
}

#[actix_rt::test]
#[ignore]
async fn create_with_unknown_venue_is_unprocessable() {
    let database = TestDatabase::new();
    let artist = database.create_artist().finish();

    let start_time = Utc::now().naive_utc() + Duration::days(3);
    let json = Json(Show::create(Uuid::new_v4(), artist.id, start_time));

    let response = support::unwrap_response(shows::create((database.connection.clone(), json)).await);
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
