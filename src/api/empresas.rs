use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::{
    AppState,
    api::extract::ValidatedJson,
    database::UnitOfWork,
    errors::{AppError, ErrorResponse},
    services::empresas::{self, EmpresaCreate, EmpresaResponse},
};

// --- Route Handlers ---

#[utoipa::path(
    post,
    path = "/empresas/",
    tag = "Empresas",
    request_body = EmpresaCreate,
    responses(
        (status = 200, description = "Empresa criada", body = EmpresaResponse),
        (status = 422, description = "Dados inválidos", body = ErrorResponse)
    )
)]
#[post("")]
pub async fn create_empresa(
    data: web::Data<AppState>,
    payload: ValidatedJson<EmpresaCreate>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner();

    let uow = UnitOfWork::begin(&data.db).await?;
    let created = empresas::create(uow.conn(), &input).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(created))
}

#[utoipa::path(
    get,
    path = "/empresas/",
    tag = "Empresas",
    responses(
        (status = 200, description = "Todas as empresas com suas obrigações", body = [EmpresaResponse])
    )
)]
#[get("")]
pub async fn get_empresas(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let uow = UnitOfWork::begin(&data.db).await?;
    let list = empresas::list(uow.conn()).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(list))
}

#[utoipa::path(
    get,
    path = "/empresas/{empresa_id}",
    tag = "Empresas",
    params(
        ("empresa_id" = i32, Path, description = "Empresa ID")
    ),
    responses(
        (status = 200, description = "Empresa encontrada", body = EmpresaResponse),
        (status = 404, description = "Empresa não encontrada", body = ErrorResponse)
    )
)]
#[get("/{empresa_id}")]
pub async fn get_empresa_by_id(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let empresa_id = path.into_inner();

    let uow = UnitOfWork::begin(&data.db).await?;
    let empresa = empresas::get(uow.conn(), empresa_id).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(empresa))
}

#[utoipa::path(
    put,
    path = "/empresas/{empresa_id}",
    tag = "Empresas",
    params(
        ("empresa_id" = i32, Path, description = "Empresa ID")
    ),
    request_body = EmpresaCreate,
    responses(
        (status = 200, description = "Empresa atualizada", body = EmpresaResponse),
        (status = 404, description = "Empresa não encontrada", body = ErrorResponse),
        (status = 422, description = "Dados inválidos", body = ErrorResponse)
    )
)]
#[put("/{empresa_id}")]
pub async fn update_empresa(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    payload: ValidatedJson<EmpresaCreate>,
) -> Result<HttpResponse, AppError> {
    let empresa_id = path.into_inner();
    let input = payload.into_inner();

    let uow = UnitOfWork::begin(&data.db).await?;
    let updated = empresas::update(uow.conn(), empresa_id, &input).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/empresas/{empresa_id}",
    tag = "Empresas",
    params(
        ("empresa_id" = i32, Path, description = "Empresa ID")
    ),
    responses(
        (status = 200, description = "Empresa excluída; retorna o último estado", body = EmpresaResponse),
        (status = 404, description = "Empresa não encontrada", body = ErrorResponse),
        (status = 409, description = "Empresa possui obrigações acessórias vinculadas", body = ErrorResponse)
    )
)]
#[delete("/{empresa_id}")]
pub async fn delete_empresa(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let empresa_id = path.into_inner();

    let uow = UnitOfWork::begin(&data.db).await?;
    let deleted = empresas::delete(uow.conn(), empresa_id).await?;
    uow.commit().await?;

    Ok(HttpResponse::Ok().json(deleted))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/empresas")
            .service(get_empresas)
            .service(get_empresa_by_id)
            .service(create_empresa)
            .service(update_empresa)
            .service(delete_empresa),
    );
}
