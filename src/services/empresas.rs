use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    database::models::{empresa, obrigacao_acessoria},
    errors::AppError,
    services::{obrigacoes::ObrigacaoAcessoriaResponse, validation::{Validate, Validator}},
};

// --- DTOs (Data Transfer Objects) ---

/// Input for both create and update: every field is required and an update
/// replaces all of them.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EmpresaCreate {
    pub nome: String,
    pub cnpj: String,
    pub endereco: String,
    pub email: String,
    pub telefone: String,
}

impl Validate for EmpresaCreate {
    fn validate(&self) -> Result<(), AppError> {
        Validator::new().email("email", &self.email).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct EmpresaResponse {
    pub id: i32,
    pub nome: String,
    pub cnpj: String,
    pub endereco: String,
    pub email: String,
    pub telefone: String,
    pub obrigacoes: Vec<ObrigacaoAcessoriaResponse>,
}

impl EmpresaResponse {
    fn from_parts(model: empresa::Model, obrigacoes: Vec<obrigacao_acessoria::Model>) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            cnpj: model.cnpj,
            endereco: model.endereco,
            email: model.email,
            telefone: model.telefone,
            obrigacoes: obrigacoes.into_iter().map(Into::into).collect(),
        }
    }
}

// --- Operations ---
//
// Inputs reach these functions already validated: the HTTP layer runs
// `Validate` while extracting the body, before any unit of work is opened.

pub async fn find_model<C: ConnectionTrait>(
    db: &C,
    empresa_id: i32,
) -> Result<empresa::Model, AppError> {
    empresa::Entity::find_by_id(empresa_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            log::debug!("Empresa {} not found", empresa_id);
            AppError::empresa_not_found()
        })
}

async fn with_obrigacoes<C: ConnectionTrait>(
    db: &C,
    model: empresa::Model,
) -> Result<EmpresaResponse, AppError> {
    let obrigacoes = model
        .find_related(obrigacao_acessoria::Entity)
        .order_by_asc(obrigacao_acessoria::Column::Id)
        .all(db)
        .await?;
    Ok(EmpresaResponse::from_parts(model, obrigacoes))
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    input: &EmpresaCreate,
) -> Result<EmpresaResponse, AppError> {
    let empresa = empresa::ActiveModel {
        nome: Set(input.nome.clone()),
        cnpj: Set(input.cnpj.clone()),
        endereco: Set(input.endereco.clone()),
        email: Set(input.email.clone()),
        telefone: Set(input.telefone.clone()),
        ..Default::default()
    };

    let created = empresa.insert(db).await?;
    log::info!("Empresa {} created", created.id);
    Ok(EmpresaResponse::from_parts(created, Vec::new()))
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<EmpresaResponse>, AppError> {
    let rows = empresa::Entity::find()
        .find_with_related(obrigacao_acessoria::Entity)
        .order_by_asc(empresa::Column::Id)
        .order_by_asc(obrigacao_acessoria::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(model, obrigacoes)| EmpresaResponse::from_parts(model, obrigacoes))
        .collect())
}

pub async fn get<C: ConnectionTrait>(db: &C, empresa_id: i32) -> Result<EmpresaResponse, AppError> {
    let model = find_model(db, empresa_id).await?;
    with_obrigacoes(db, model).await
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    empresa_id: i32,
    input: &EmpresaCreate,
) -> Result<EmpresaResponse, AppError> {
    let mut active_model = find_model(db, empresa_id).await?.into_active_model();

    active_model.nome = Set(input.nome.clone());
    active_model.cnpj = Set(input.cnpj.clone());
    active_model.endereco = Set(input.endereco.clone());
    active_model.email = Set(input.email.clone());
    active_model.telefone = Set(input.telefone.clone());

    let updated = active_model.update(db).await?;
    log::info!("Empresa {} updated", updated.id);
    with_obrigacoes(db, updated).await
}

/// Deletes a company that owns no obligations and returns its last state.
/// A company still referenced by obligations is left untouched.
pub async fn delete<C: ConnectionTrait>(
    db: &C,
    empresa_id: i32,
) -> Result<EmpresaResponse, AppError> {
    let model = find_model(db, empresa_id).await?;
    let last_known = with_obrigacoes(db, model.clone()).await?;

    if !last_known.obrigacoes.is_empty() {
        log::warn!(
            "Refusing to delete empresa {}: {} obrigações still reference it",
            empresa_id,
            last_known.obrigacoes.len()
        );
        return Err(AppError::Conflict(
            "Empresa possui obrigações acessórias vinculadas".to_string(),
        ));
    }

    model.into_active_model().delete(db).await?;
    log::info!("Empresa {} deleted", empresa_id);
    Ok(last_known)
}
