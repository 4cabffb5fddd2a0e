//! Create `Singers` table.
//!
//! Identifiers keep the catalog's PascalCase names, so they are quoted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Singers::Table)
                    .if_not_exists()
                    .col(big_integer(Singers::SingerId).primary_key())
                    .col(string_len(Singers::FirstName, 1024).not_null())
                    .col(string_len(Singers::LastName, 1024).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Singers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Singers {
    #[sea_orm(iden = "Singers")]
    Table,
    #[sea_orm(iden = "SingerId")]
    SingerId,
    #[sea_orm(iden = "FirstName")]
    FirstName,
    #[sea_orm(iden = "LastName")]
    LastName,
}
