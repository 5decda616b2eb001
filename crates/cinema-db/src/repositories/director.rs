use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::entities::director;

pub struct DirectorRepository;

impl DirectorRepository {
    /// All directors, ordered by id
    pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<director::Model>, DbErr> {
        director::Entity::find()
            .order_by_asc(director::Column::Id)
            .all(db)
            .await
    }

    pub async fn get_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> Result<Option<director::Model>, DbErr> {
        director::Entity::find_by_id(id).one(db).await
    }
}
