use crate::support::database::TestDatabase;
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;
use actix_web::{Error, HttpResponse};
use api::errors::{ApiError, ApplicationError};
use api::middleware::DatabaseTransaction;
use db::prelude::*;

// These tests need a live Postgres database; run with `cargo test -- --ignored`.

fn rename(venue: &Venue, name: &str) -> VenueEditableAttributes {
    VenueEditableAttributes {
        name: name.to_string(),
        city: venue.city.clone(),
        state: venue.state.clone(),
        address: venue.address.clone(),
        phone: venue.phone.clone(),
        genres: venue.genres.clone(),
        image_url: venue.image_url.clone(),
        facebook_url: venue.facebook_url.clone(),
        website_url: venue.website_url.clone(),
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description.clone(),
    }
}

#[actix_rt::test]
#[ignore]
async fn error_response_rolls_back_writes() {
    let database = TestDatabase::new();
    let venue = database.create_venue().finish();
    let original_name = venue.name.clone();

    let request = TestRequest::default().to_http_request();
    request.extensions_mut().insert(database.connection.clone());
    database.connection.begin_transaction().unwrap();

    venue
        .update(rename(&venue, "Renamed Inside Failed Request"), database.connection.get())
        .unwrap();

    let error: Error = ApiError::from(ApplicationError::new("handler failed".to_string())).into();
    let response = ServiceResponse::new(request, HttpResponse::from_error(error));
    let settled = DatabaseTransaction::complete(response).unwrap();
    assert!(settled.response().error().is_some());

    let found = Venue::find(venue.id, database.connection.get()).unwrap();
    assert_eq!(found.name, original_name);
}

#[actix_rt::test]
#[ignore]
async fn success_response_commits_writes() {
    let database = TestDatabase::new();
    let venue = database.create_venue().finish();

    let request = TestRequest::default().to_http_request();
    request.extensions_mut().insert(database.connection.clone());
    database.connection.begin_transaction().unwrap();

    venue
        .update(rename(&venue, "Renamed Inside Successful Request"), database.connection.get())
        .unwrap();

    let response = ServiceResponse::new(request, HttpResponse::Ok().finish());
    let settled = DatabaseTransaction::complete(response).unwrap();
    assert!(settled.response().error().is_none());

    let found = Venue::find(venue.id, database.connection.get()).unwrap();
    assert_eq!(found.name, "Renamed Inside Successful Request");
}
