//! Repository for the `dvds` table.
//!
//! Every query except `create` carries an `owner_id = $n` predicate: a record
//! owned by someone else is indistinguishable from a missing one.

use dvdshelf_core::catalog::DvdCriteria;
use dvdshelf_core::dvd::{DvdFields, DvdPatch};
use dvdshelf_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::dvd::Dvd;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, year, genre, director, status, \
                       poster_url, barcode, created_at";

/// Provides CRUD, search, and filter operations for DVDs.
pub struct DvdRepo;

impl DvdRepo {
    /// Insert a new DVD for `owner_id`, returning the created row.
    pub async fn create(pool: &PgPool, owner_id: &str, input: &DvdFields) -> Result<Dvd, sqlx::Error> {
        let query = format!(
            "INSERT INTO dvds (owner_id, title, year, genre, director, status, poster_url, barcode)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dvd>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(input.year)
            .bind(&input.genre)
            .bind(&input.director)
            .bind(input.status.as_str())
            .bind(&input.poster_url)
            .bind(&input.barcode)
            .fetch_one(pool)
            .await
    }

    /// Find a DVD by id within the owner's collection.
    pub async fn find_by_id(pool: &PgPool, id: DbId, owner_id: &str) -> Result<Option<Dvd>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dvds WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Dvd>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List the owner's whole collection, oldest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Dvd>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dvds WHERE owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Dvd>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a DVD.
    ///
    /// `COALESCE` keeps non-nullable columns when the patch omits them; the
    /// nullable columns use a `CASE WHEN provided` pair so `Some(None)` clears.
    /// Returns `None` when no row with this id belongs to the owner.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
        patch: &DvdPatch,
    ) -> Result<Option<Dvd>, sqlx::Error> {
        let query = format!(
            "UPDATE dvds SET \
                 title      = COALESCE($3, title), \
                 status     = COALESCE($4, status), \
                 year       = CASE WHEN $5 THEN $6 ELSE year END, \
                 genre      = CASE WHEN $7 THEN $8 ELSE genre END, \
                 director   = CASE WHEN $9 THEN $10 ELSE director END, \
                 poster_url = CASE WHEN $11 THEN $12 ELSE poster_url END, \
                 barcode    = CASE WHEN $13 THEN $14 ELSE barcode END \
             WHERE id = $1 AND owner_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dvd>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&patch.title)
            .bind(patch.status.map(|s| s.as_str()))
            .bind(patch.year.is_some())
            .bind(patch.year.flatten())
            .bind(patch.genre.is_some())
            .bind(patch.genre.as_ref().and_then(|v| v.as_deref()))
            .bind(patch.director.is_some())
            .bind(patch.director.as_ref().and_then(|v| v.as_deref()))
            .bind(patch.poster_url.is_some())
            .bind(patch.poster_url.as_ref().and_then(|v| v.as_deref()))
            .bind(patch.barcode.is_some())
            .bind(patch.barcode.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a DVD. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, owner_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dvds WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over title, director, and genre.
    pub async fn search(pool: &PgPool, owner_id: &str, text: &str) -> Result<Vec<Dvd>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(text));
        let query = format!(
            "SELECT {COLUMNS} FROM dvds \
             WHERE owner_id = $1 \
               AND (title ILIKE $2 ESCAPE '\\' \
                    OR director ILIKE $2 ESCAPE '\\' \
                    OR genre ILIKE $2 ESCAPE '\\') \
             ORDER BY id"
        );
        sqlx::query_as::<_, Dvd>(&query)
            .bind(owner_id)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// AND-combined status / genre-substring / year filter. Absent criteria
    /// add no predicate.
    pub async fn filter(
        pool: &PgPool,
        owner_id: &str,
        criteria: &DvdCriteria,
    ) -> Result<Vec<Dvd>, sqlx::Error> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM dvds WHERE owner_id = "));
        builder.push_bind(owner_id);

        if let Some(status) = criteria.status {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(genre) = &criteria.genre {
            builder
                .push(" AND genre LIKE ")
                .push_bind(format!("%{}%", escape_like(genre)))
                .push(" ESCAPE '\\'");
        }
        if let Some(year) = criteria.year {
            builder.push(" AND year = ").push_bind(year);
        }
        builder.push(" ORDER BY id");

        builder.build_query_as::<Dvd>().fetch_all(pool).await
    }
}

/// Escape `LIKE` metacharacters so user text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
