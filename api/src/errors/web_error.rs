use crate::errors::*;
use actix_web::{http::StatusCode, HttpResponse};
use db::utils::errors::ErrorCode::ValidationError;
use db::utils::errors::*;
use diesel::result::Error as DieselError;
use r2d2;
use serde_json::Error as SerdeError;
use std::error::Error;
use std::fmt::Debug;
use std::string::ToString;
use uuid::Error as UuidParseError;

pub trait ConvertToWebError: Debug + Error + ToString {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn to_response(&self) -> HttpResponse;
}

fn internal_error(message: &str) -> HttpResponse {
    status_code_and_message(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn status_code_and_message(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(json!({ "error": message.to_string() }))
}

impl ConvertToWebError for DieselError {
    fn to_response(&self) -> HttpResponse {
        error!("Diesel error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for r2d2::Error {
    fn to_response(&self) -> HttpResponse {
        error!("R2D2 error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for SerdeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
    fn to_response(&self) -> HttpResponse {
        error!("Serde error: {}", self);
        status_code_and_message(StatusCode::BAD_REQUEST, "Invalid request data")
    }
}

impl ConvertToWebError for UuidParseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
    fn to_response(&self) -> HttpResponse {
        error!("UUID parse error: {}", self);
        status_code_and_message(StatusCode::BAD_REQUEST, "Badly formatted id")
    }
}

impl ConvertToWebError for std::io::Error {
    fn to_response(&self) -> HttpResponse {
        error!("IO error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for ApplicationError {
    fn to_response(&self) -> HttpResponse {
        error!("Application error: {}", self.reason);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for NotFoundError {
    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
    fn to_response(&self) -> HttpResponse {
        status_code_and_message(StatusCode::NOT_FOUND, "Not found")
    }
}

impl ConvertToWebError for DatabaseError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            1000 | 1100 => StatusCode::BAD_REQUEST,
            2000 => StatusCode::NOT_FOUND,
            3400 => StatusCode::CONFLICT,
            7200 | 7300 => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn to_response(&self) -> HttpResponse {
        let message = match self.code {
            1000 => "Invalid input",
            1100 => "Missing input",
            2000 => "No results",
            3000 => "Query error",
            3100 => "Could not insert record",
            3200 => "Could not update record",
            3300 => "Could not delete record",
            3400 => self.cause.as_ref().map(|s| s.as_str()).unwrap_or("Duplicate record exists"),
            4000 => "Connection error",
            7200 => match &self.error_code {
                ValidationError { errors } => {
                    return HttpResponse::UnprocessableEntity()
                        .json(json!({"error": "Validation error".to_string(), "fields": errors}));
                }
                _ => "Validation error",
            },
            7300 => "Referenced record does not exist",
            5000 => "Internal error",
            _ => "Unknown error",
        };
        status_code_and_message(self.status_code(), message)
    }
}
