use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::{
    AppState,
    api::extract::ValidatedJson,
    database::UnitOfWork,
    errors::{AppError, ErrorResponse},
    services::obrigacoes::{self, EmpresaCheck, ObrigacaoAcessoriaCreate, ObrigacaoAcessoriaResponse},
};

// --- Route Handlers ---

#[utoipa::path(
    post,
    path = "/obrigacoes/",
    tag = "Obrigações Acessórias",
    request_body = ObrigacaoAcessoriaCreate,
    responses(
        (status = 200, description = "Obrigação criada", body = ObrigacaoAcessoriaResponse),
        (status = 404, description = "Empresa não encontrada", body = ErrorResponse),
        (status = 422, description = "Dados inválidos", body = ErrorResponse)
    )
)]
#[post("")]
pub async fn create_obrigacao(
    data: web::Data<AppState>,
    payload: ValidatedJson<ObrigacaoAcessoriaCreate>,
) -> Result<HttpResponse, AppError> {
    let uow = UnitOfWork::begin(&data.db).await?;
    let created = obrigacoes::create(uow.conn(), &payload.0).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(created))
}

#[utoipa::path(
    get,
    path = "/obrigacoes/",
    tag = "Obrigações Acessórias",
    responses(
        (status = 200, description = "Todas as obrigações", body = [ObrigacaoAcessoriaResponse])
    )
)]
#[get("")]
pub async fn get_obrigacoes(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let uow = UnitOfWork::begin(&data.db).await?;
    let list = obrigacoes::list(uow.conn()).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(list))
}

#[utoipa::path(
    get,
    path = "/obrigacoes/{obrigacao_id}",
    tag = "Obrigações Acessórias",
    params(
        ("obrigacao_id" = i32, Path, description = "Obrigação ID")
    ),
    responses(
        (status = 200, description = "Obrigação encontrada", body = ObrigacaoAcessoriaResponse),
        (status = 404, description = "Obrigação Acessória não encontrada", body = ErrorResponse)
    )
)]
#[get("/{obrigacao_id}")]
pub async fn get_obrigacao_by_id(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let obrigacao_id = path.into_inner();

    let uow = UnitOfWork::begin(&data.db).await?;
    let obrigacao = obrigacoes::get(uow.conn(), obrigacao_id).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(obrigacao))
}

#[utoipa::path(
    put,
    path = "/obrigacoes/{obrigacao_id}",
    tag = "Obrigações Acessórias",
    params(
        ("obrigacao_id" = i32, Path, description = "Obrigação ID")
    ),
    request_body = ObrigacaoAcessoriaCreate,
    responses(
        (status = 200, description = "Obrigação atualizada", body = ObrigacaoAcessoriaResponse),
        (status = 404, description = "Obrigação (ou, com verificação ativa, empresa) não encontrada", body = ErrorResponse),
        (status = 409, description = "empresa_id não referencia uma empresa existente", body = ErrorResponse)
    )
)]
#[put("/{obrigacao_id}")]
pub async fn update_obrigacao(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    payload: ValidatedJson<ObrigacaoAcessoriaCreate>,
) -> Result<HttpResponse, AppError> {
    let obrigacao_id = path.into_inner();
    let empresa_check: EmpresaCheck = data.config.obrigacao_update_checks_empresa.into();

    let uow = UnitOfWork::begin(&data.db).await?;
    let updated = obrigacoes::update(uow.conn(), obrigacao_id, &payload.0, empresa_check).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/obrigacoes/{obrigacao_id}",
    tag = "Obrigações Acessórias",
    params(
        ("obrigacao_id" = i32, Path, description = "Obrigação ID")
    ),
    responses(
        (status = 200, description = "Obrigação excluída; retorna o último estado", body = ObrigacaoAcessoriaResponse),
        (status = 404, description = "Obrigação Acessória não encontrada", body = ErrorResponse)
    )
)]
#[delete("/{obrigacao_id}")]
pub async fn delete_obrigacao(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let obrigacao_id = path.into_inner();

    let uow = UnitOfWork::begin(&data.db).await?;
    let deleted = obrigacoes::delete(uow.conn(), obrigacao_id).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(deleted))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/obrigacoes")
            .service(get_obrigacoes)
            .service(get_obrigacao_by_id)
            .service(create_obrigacao)
            .service(update_obrigacao)
            .service(delete_obrigacao),
    );
}
