use crate::database::Connection;
use crate::errors::*;
use crate::extractors::*;
use actix_web::HttpResponse;
use db::prelude::*;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let shows = Show::all(conn)?;
    let entries: Vec<ShowListEntry> = shows.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(entries))
}

pub async fn create((connection, new_show): (Connection, Json<NewShow>)) -> Result<HttpResponse, ApiError> {
    let conn = connection.get();
    let show = new_show.into_inner().commit(conn)?;
    Ok(HttpResponse::Created().json(&show))
}
