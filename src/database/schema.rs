//! Explicit schema setup. Nothing here runs implicitly; `main` and the admin
//! CLI call these during their initialization phase.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema, sea_query::Table};

use super::models::{empresa, obrigacao_acessoria};

async fn create_table<C, E>(db: &C, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Creates both tables if they do not exist yet. Companies go first so the
/// obligations foreign key has something to point at.
pub async fn create_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());
    create_table(db, &schema, empresa::Entity).await?;
    create_table(db, &schema, obrigacao_acessoria::Entity).await?;
    log::info!("Schema ready (empresas, obrigacoes_acessorias)");
    Ok(())
}

/// Drops both tables, obligations first.
pub async fn drop_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let drop_obrigacoes = Table::drop()
        .table(obrigacao_acessoria::Entity)
        .if_exists()
        .to_owned();
    let drop_empresas = Table::drop().table(empresa::Entity).if_exists().to_owned();

    db.execute(backend.build(&drop_obrigacoes)).await?;
    db.execute(backend.build(&drop_empresas)).await?;
    log::info!("Schema dropped");
    Ok(())
}
