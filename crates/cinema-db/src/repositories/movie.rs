use std::collections::{HashMap, HashSet};

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QueryTrait, Select, Set, TransactionTrait,
};

use crate::entities::{director, genre, movie};
use crate::StoreError;

/// Optional equality filters on a movie listing. Both set means both must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

impl MovieFilter {
    pub fn select(&self) -> Select<movie::Entity> {
        movie::Entity::find()
            .apply_if(self.director_id, |q, id| {
                q.filter(movie::Column::DirectorId.eq(id))
            })
            .apply_if(self.genre_id, |q, id| q.filter(movie::Column::GenreId.eq(id)))
            .order_by_asc(movie::Column::Id)
    }
}

/// A movie together with the rows its foreign keys point at.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub movie: movie::Model,
    pub director: Option<director::Model>,
    pub genre: Option<genre::Model>,
}

/// Attributes accepted when creating a movie. The id is always store-assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

pub struct MovieRepository;

impl MovieRepository {
    /// Movies matching `filter`, ordered by id, with director and genre attached
    pub async fn list<C: ConnectionTrait>(
        db: &C,
        filter: MovieFilter,
    ) -> Result<Vec<MovieRecord>, DbErr> {
        let movies = filter.select().all(db).await?;
        Self::attach_relations(db, movies).await
    }

    pub async fn get_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> Result<Option<MovieRecord>, DbErr> {
        let Some(movie) = movie::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Ok(Self::attach_relations(db, vec![movie]).await?.pop())
    }

    /// Insert a movie inside a single transaction.
    ///
    /// Referenced director and genre are checked in the same transaction; on
    /// any error the transaction is dropped uncommitted and rolls back.
    pub async fn create<C: TransactionTrait>(
        db: &C,
        data: NewMovie,
    ) -> Result<movie::Model, StoreError> {
        let txn = db.begin().await?;

        if let Some(id) = data.director_id {
            if director::Entity::find_by_id(id).one(&txn).await?.is_none() {
                return Err(StoreError::UnknownDirector(id));
            }
        }
        if let Some(id) = data.genre_id {
            if genre::Entity::find_by_id(id).one(&txn).await?.is_none() {
                return Err(StoreError::UnknownGenre(id));
            }
        }

        let created = movie::ActiveModel {
            id: NotSet,
            title: Set(data.title),
            description: Set(data.description),
            trailer: Set(data.trailer),
            year: Set(data.year),
            rating: Set(data.rating),
            genre_id: Set(data.genre_id),
            director_id: Set(data.director_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        tracing::info!(movie_id = created.id, "movie created");
        Ok(created)
    }

    // One IN query per related table.
    async fn attach_relations<C: ConnectionTrait>(
        db: &C,
        movies: Vec<movie::Model>,
    ) -> Result<Vec<MovieRecord>, DbErr> {
        let director_ids: HashSet<i32> = movies.iter().filter_map(|m| m.director_id).collect();
        let genre_ids: HashSet<i32> = movies.iter().filter_map(|m| m.genre_id).collect();

        let directors: HashMap<i32, director::Model> = if !director_ids.is_empty() {
            director::Entity::find()
                .filter(director::Column::Id.is_in(director_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|d| (d.id, d))
                .collect()
        } else {
            HashMap::new()
        };

        let genres: HashMap<i32, genre::Model> = if !genre_ids.is_empty() {
            genre::Entity::find()
                .filter(genre::Column::Id.is_in(genre_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|g| (g.id, g))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(movies
            .into_iter()
            .map(|movie| MovieRecord {
                director: movie.director_id.and_then(|id| directors.get(&id).cloned()),
                genre: movie.genre_id.and_then(|id| genres.get(&id).cloned()),
                movie,
            })
            .collect())
    }
}
