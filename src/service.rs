use std::sync::Arc;

use chrono::{Datelike, Utc};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::movie;
use crate::error::{AppError, AppResult};
use crate::facts::FactClient;
use crate::models::{CreateMovie, MovieWithFact, UpdateMovie};
use crate::store::MovieStore;

const MIN_RELEASE_YEAR: i16 = 1900;

/// Business rules for the movies resource: input validation and orchestration
/// of the store and the fact client.
#[derive(Clone)]
pub struct MovieService {
    store: MovieStore,
    facts: Arc<FactClient>,
}

impl MovieService {
    pub fn new(store: MovieStore, facts: Arc<FactClient>) -> Self {
        Self { store, facts }
    }

    /// All movies, each decorated with the trivia fact for its own id.
    /// One outbound call per record, sequential.
    pub async fn list_all(&self) -> AppResult<Vec<MovieWithFact>> {
        let movies = self.store.all().await?;
        let mut decorated = Vec::with_capacity(movies.len());
        for movie in movies {
            let fact = self.facts.fetch_fact(movie.id).await;
            decorated.push(MovieWithFact { movie, fact });
        }
        Ok(decorated)
    }

    pub async fn get(&self, id: i32) -> AppResult<MovieWithFact> {
        let movie = self.store.find(id).await?.ok_or(AppError::NotFound)?;
        let fact = self.facts.fetch_fact(id).await;
        Ok(MovieWithFact { movie, fact })
    }

    pub async fn by_year(&self, year: i16) -> AppResult<Vec<movie::Model>> {
        Ok(self.store.by_year(year).await?)
    }

    pub async fn by_genre(&self, genre: &str) -> AppResult<Vec<movie::Model>> {
        Ok(self.store.by_genre(genre).await?)
    }

    /// Validate and insert. Returns only a confirmation; the created record
    /// is not echoed back.
    pub async fn create(&self, input: CreateMovie) -> AppResult<()> {
        validate_create(&input)?;
        self.store
            .insert(input)
            .await
            .map_err(|source| AppError::Persistence { message: "Could not save movie", source })?;
        Ok(())
    }

    /// Validate the supplied fields and apply a partial patch. The same
    /// bounds apply as on create; omitted fields are left unchanged.
    pub async fn update(&self, id: i32, changes: UpdateMovie) -> AppResult<()> {
        validate_update(&changes)?;
        let existing = self.store.find(id).await?.ok_or(AppError::NotFound)?;
        self.store.update(existing, changes).await.map_err(|source| AppError::Persistence {
            message: "Could not update movie",
            source,
        })?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let removed = self.store.delete(id).await.map_err(|source| AppError::Persistence {
            message: "Could not delete movie",
            source,
        })?;
        if !removed {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

/// Upper bound for `release_year`: next year's releases are announceable.
fn max_release_year() -> i16 {
    (Utc::now().year() + 1) as i16
}

fn release_year_error(max: i16) -> ValidationError {
    let mut err = ValidationError::new("range");
    err.message =
        Some(format!("release_year must be between {MIN_RELEASE_YEAR} and {max}").into());
    err
}

fn validate_create(input: &CreateMovie) -> Result<(), AppError> {
    let mut errors = match input.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    let max = max_release_year();
    if !(MIN_RELEASE_YEAR..=max).contains(&input.release_year) {
        errors.add("release_year".into(), release_year_error(max));
    }

    if errors.is_empty() { Ok(()) } else { Err(AppError::Validation(errors)) }
}

fn validate_update(changes: &UpdateMovie) -> Result<(), AppError> {
    let mut errors = match changes.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    let max = max_release_year();
    if let Some(year) = changes.release_year {
        if !(MIN_RELEASE_YEAR..=max).contains(&year) {
            errors.add("release_year".into(), release_year_error(max));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(AppError::Validation(errors)) }
}
