use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::entities::genre;

pub struct GenreRepository;

impl GenreRepository {
    /// All genres, ordered by id
    pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<genre::Model>, DbErr> {
        genre::Entity::find()
            .order_by_asc(genre::Column::Id)
            .all(db)
            .await
    }

    pub async fn get_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> Result<Option<genre::Model>, DbErr> {
        genre::Entity::find_by_id(id).one(db).await
    }
}
