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
    let artists = Artist::all(conn)?;
    let summaries: Vec<ArtistSummary> = artists.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(summaries))
}

pub async fn search(
    (connection, query): (Connection, Query<SearchParameters>),
) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let artists = Artist::search(query.into_inner().q, conn)?;
    let summaries: Vec<ArtistSummary> = artists.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(SearchResults::from(summaries)))
}

pub async fn show((connection, path): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let artist = Artist::find(path.id, conn)?;
    let shows = artist.shows(conn)?;
    let profile = ArtistProfile::new(artist, shows, Utc::now().naive_utc());
    Ok(HttpResponse::Ok().json(&profile))
}

pub async fn create((connection, new_artist): (Connection, Json<NewArtist>)) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let artist = new_artist.into_inner().commit(conn)?;
    Ok(HttpResponse::Created().json(&artist))
}

pub async fn update(
    (connection, path, artist_parameters): (Connection, Path<PathParameters>, Json<ArtistEditableAttributes>),
) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let artist = Artist::find(path.id, conn)?;
    let updated_artist = artist.update(artist_parameters.into_inner(), conn)?;
    Ok(HttpResponse::Ok().json(&updated_artist))
}

pub async fn destroy((connection, path): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let artist = Artist::find(path.id, conn)?;
    artist.destroy(conn)?;
    Ok(HttpResponse::Ok().json(json!({})))
}
