#![allow(dead_code)]

use empresas_obrigacoes::{
    config::{Config, DatabaseSettings},
    database::{self, schema},
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

/// Fresh in-memory database with the schema in place.
pub async fn test_db() -> DatabaseConnection {
    let settings = DatabaseSettings::single_connection("sqlite::memory:");
    let db = database::connect_with_settings(&settings)
        .await
        .expect("in-memory sqlite should connect");
    schema::create_all(&db).await.expect("schema should be created");
    db
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        ..Config::default()
    }
}

/// Builds the full service (routes, extractor config, middleware) on top of
/// an in-memory database, or on top of the given connection.
#[allow(unused_macros)]
macro_rules! spawn_app {
    () => {
        spawn_app!(common::test_config())
    };
    ($config:expr) => {
        spawn_app!($config, common::test_db().await)
    };
    ($config:expr, $db:expr) => {{
        let config = $config;
        let max_body_bytes = config.effective_max_body_bytes();
        let db = $db;
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .wrap(empresas_obrigacoes::api::middleware::access_logger())
                .wrap(empresas_obrigacoes::api::middleware::RequestId)
                .app_data(actix_web::web::Data::new(empresas_obrigacoes::AppState {
                    db,
                    config,
                }))
                .configure(|cfg| empresas_obrigacoes::api::init(cfg, max_body_bytes))
                .configure(empresas_obrigacoes::api::openapi::init_routes),
        )
        .await
    }};
}

pub fn empresa_a() -> Value {
    json!({
        "nome": "Empresa A",
        "cnpj": "12.345.678/0001-99",
        "endereco": "Rua A, 123",
        "email": "empresaa@exemplo.com",
        "telefone": "1234567890"
    })
}

pub fn empresa_b() -> Value {
    json!({
        "nome": "Empresa B",
        "cnpj": "98.765.432/0001-10",
        "endereco": "Rua B, 456",
        "email": "empresab@exemplo.com",
        "telefone": "0987654321"
    })
}

pub fn obrigacao(nome: &str, periodicidade: &str, empresa_id: i64) -> Value {
    json!({
        "nome": nome,
        "periodicidade": periodicidade,
        "empresa_id": empresa_id
    })
}
