use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_directors::Director;
use super::m20240101_000002_create_genres::Genre;

/// Movies reference a director and a genre through nullable foreign keys.
/// No cascading: deleting a referenced row is refused by the store.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movie::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movie::Title).string_len(255).null())
                    .col(ColumnDef::new(Movie::Description).string_len(255).null())
                    .col(ColumnDef::new(Movie::Trailer).string_len(255).null())
                    .col(ColumnDef::new(Movie::Year).integer().null())
                    .col(ColumnDef::new(Movie::Rating).double().null())
                    .col(ColumnDef::new(Movie::GenreId).integer().null())
                    .col(ColumnDef::new(Movie::DirectorId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre_id")
                            .from(Movie::Table, Movie::GenreId)
                            .to(Genre::Table, Genre::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_director_id")
                            .from(Movie::Table, Movie::DirectorId)
                            .to(Director::Table, Director::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_director_id")
                    .table(Movie::Table)
                    .col(Movie::DirectorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_genre_id")
                    .table(Movie::Table)
                    .col(Movie::GenreId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movie::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movie {
    Table,
    Id,
    Title,
    Description,
    Trailer,
    Year,
    Rating,
    GenreId,
    DirectorId,
}
