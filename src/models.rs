use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::movie;
use crate::facts::NumberFact;

/// Body of `POST /movies`. Missing required fields are rejected by the JSON
/// extractor; lengths are checked here and the year bound in the service.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "genres must be between 1 and 255 characters"
    ))]
    pub genres: String,
    pub release_year: i16,
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Body of `PUT /movies/{id}`. Every field is optional; omitted fields are
/// left unchanged. `id` and timestamps are never client-settable.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "genres must be between 1 and 255 characters"
    ))]
    pub genres: Option<String>,
    pub release_year: Option<i16>,
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// A movie decorated with the trivia fact for its own id, used by the list-all
/// and get-by-id responses. The quirky key name is part of the API contract.
#[derive(Debug, Serialize)]
pub struct MovieWithFact {
    #[serde(flatten)]
    pub movie: movie::Model,
    #[serde(rename = "Meaning of the id number")]
    pub fact: NumberFact,
}
