use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use empresas_obrigacoes::{
    AppState,
    api::{
        self,
        middleware::{RequestId, access_logger},
        openapi::{self, SWAGGER_UI_INDEX},
    },
    config::Config,
    database,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Failed to load configuration: {}", e),
        )
    })?;

    let db = database::connect_with_settings(&config.database_settings()).await?;

    // Schema setup happens here, once, before the server accepts requests.
    database::schema::create_all(&db)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to create schema: {}", e)))?;

    if !config.obrigacao_update_checks_empresa {
        log::warn!(
            "Obrigação updates do not pre-check empresa_id; set OBRIGACAO_UPDATE_CHECKS_EMPRESA=true to enable"
        );
    }

    let host = config.host.clone();
    let port = config.port;
    let max_body_bytes = config.effective_max_body_bytes();
    let state = web::Data::new(AppState { db, config });

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Swagger UI available at http://{}:{}{}", host, port, SWAGGER_UI_INDEX);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(access_logger())
            .wrap(RequestId)
            .app_data(state.clone())
            .configure(|cfg| api::init(cfg, max_body_bytes))
            .configure(openapi::init_routes)
    })
    .bind((host, port))?
    .run()
    .await
}
