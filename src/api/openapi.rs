use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{empresas, health, obrigacoes},
    errors::{ErrorResponse, FieldError},
    services::{
        empresas::{EmpresaCreate, EmpresaResponse},
        obrigacoes::{ObrigacaoAcessoriaCreate, ObrigacaoAcessoriaResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Empresas
        empresas::get_empresas,
        empresas::get_empresa_by_id,
        empresas::create_empresa,
        empresas::update_empresa,
        empresas::delete_empresa,
        // Obrigações
        obrigacoes::get_obrigacoes,
        obrigacoes::get_obrigacao_by_id,
        obrigacoes::create_obrigacao,
        obrigacoes::update_obrigacao,
        obrigacoes::delete_obrigacao,
        health::health,
    ),
    components(
        schemas(
            EmpresaCreate,
            EmpresaResponse,
            ObrigacaoAcessoriaCreate,
            ObrigacaoAcessoriaResponse,
            ErrorResponse,
            FieldError,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Empresas", description = "Cadastro de empresas"),
        (name = "Obrigações Acessórias", description = "Obrigações acessórias de cada empresa"),
        (name = "Health", description = "Liveness of the service and its database")
    )
)]
pub struct ApiDoc;

pub const SWAGGER_UI_INDEX: &str = "/swagger-ui/index.html";

/// Serves the OpenAPI document and Swagger UI. `NormalizePath::trim` turns
/// `/swagger-ui/` into `/swagger-ui`, which the UI's own pattern does not
/// match, so that base path redirects to the index page.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::redirect("/swagger-ui", SWAGGER_UI_INDEX))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}
