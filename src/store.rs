use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};

use crate::entities::movie;
use crate::models::{CreateMovie, UpdateMovie};

/// Persistence layer for the `movies` table.
///
/// "Not found" is expressed through `Option`/`bool` return values; a `DbErr`
/// always means a real store failure.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<movie::Model>, sea_orm::DbErr> {
        movie::Entity::find().all(&self.db).await
    }

    pub async fn find(&self, id: i32) -> Result<Option<movie::Model>, sea_orm::DbErr> {
        movie::Entity::find_by_id(id).one(&self.db).await
    }

    pub async fn by_year(&self, year: i16) -> Result<Vec<movie::Model>, sea_orm::DbErr> {
        movie::Entity::find()
            .filter(movie::Column::ReleaseYear.eq(year))
            .all(&self.db)
            .await
    }

    /// Case-sensitive substring containment against the `genres` column.
    /// SQLite's `LIKE` folds ASCII case, so this uses `instr` instead.
    pub async fn by_genre(&self, genre: &str) -> Result<Vec<movie::Model>, sea_orm::DbErr> {
        movie::Entity::find()
            .filter(Expr::cust_with_values("instr(genres, ?) > 0", [genre.to_string()]))
            .all(&self.db)
            .await
    }

    pub async fn insert(&self, input: CreateMovie) -> Result<movie::Model, sea_orm::DbErr> {
        let now = Utc::now();
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(input.title),
            genres: Set(input.genres),
            release_year: Set(input.release_year),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        };
        model.insert(&self.db).await
    }

    /// Apply a partial patch to an existing row, refreshing `updated_at`.
    /// Fields absent from the patch are left untouched.
    pub async fn update(
        &self,
        existing: movie::Model,
        changes: UpdateMovie,
    ) -> Result<movie::Model, sea_orm::DbErr> {
        let mut model = existing.into_active_model();
        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(genres) = changes.genres {
            model.genres = Set(genres);
        }
        if let Some(year) = changes.release_year {
            model.release_year = Set(year);
        }
        if let Some(description) = changes.description {
            model.description = Set(Some(description));
        }
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await
    }

    /// Returns `true` if a row was actually removed.
    pub async fn delete(&self, id: i32) -> Result<bool, sea_orm::DbErr> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
