use crate::database::Connection;
use crate::errors::*;
use crate::extractors::*;
use crate::models::*;
use actix_web::web::{Path, Query};
use actix_web::HttpResponse;
use chrono::Utc;
use db::prelude::*;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let venues = Venue::all(conn)?;
    Ok(HttpResponse::Ok().json(VenueGroup::from_venues(venues)))
}

pub async fn search(
    (connection, query): (Connection, Query<SearchParameters>),
) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let venues = Venue::search(query.into_inner().q, conn)?;
    let summaries: Vec<VenueSummary> = venues.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(SearchResults::from(summaries)))
}

pub async fn show((connection, path): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let venue = Venue::find(path.id, conn)?;
    let shows = venue.shows(conn)?;
    let profile = VenueProfile::new(venue, shows, Utc::now().naive_utc());
    Ok(HttpResponse::Ok().json(&profile))
}

pub async fn create((connection, new_venue): (Connection, Json<NewVenue>)) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let venue = new_venue.into_inner().commit(conn)?;
    Ok(HttpResponse::Created().json(&venue))
}

pub async fn update(
    (connection, path, venue_parameters): (Connection, Path<PathParameters>, Json<VenueEditableAttributes>),
) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let venue = Venue::find(path.id, conn)?;
    let updated_venue = venue.update(venue_parameters.into_inner(), conn)?;
    Ok(HttpResponse::Ok().json(&updated_venue))
}

pub async fn destroy((connection, path): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let venue = Venue::find(path.id, conn)?;
    venue.destroy(conn)?;
    Ok(HttpResponse::Ok().json(json!({})))
}
