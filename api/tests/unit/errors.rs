use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use api::errors::*;
use db::prelude::*;

#[test]
fn not_found_error_maps_to_404() {
    let error: ApiError = NotFoundError {}.into();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn application_error_maps_to_500() {
    let error: ApiError = ApplicationError::new("something broke".to_string()).into();
    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn no_results_maps_to_404() {
    let error: ApiError = DatabaseError::new(ErrorCode::NoResults, Some("No results".to_string())).into();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn duplicate_key_maps_to_409() {
    let error: ApiError = DatabaseError::new(ErrorCode::DuplicateKeyError, Some("Duplicate".to_string())).into();
    assert_eq!(error.status_code(), StatusCode::CONFLICT);
}

#[test]
fn foreign_key_maps_to_422() {
    let error: ApiError = DatabaseError::new(ErrorCode::ForeignKeyError, Some("Missing parent".to_string())).into();
    assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn validation_error_maps_to_422_with_fields() {
    let mut new_venue = Venue::create("", "San Francisco", "CA", "1015 Folsom Street");
    new_venue.image_url = Some("not-a-url".to_string());
    let validation_result = validator::Validate::validate(&new_venue);
    let db_error: DatabaseError = validation_result.unwrap_err().into();

    let error: ApiError = db_error.into();
    assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = error.error_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
