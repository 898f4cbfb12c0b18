use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    database::models::obrigacao_acessoria,
    errors::AppError,
    services::{empresas, validation::Validate},
};

// --- DTOs (Data Transfer Objects) ---

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ObrigacaoAcessoriaCreate {
    pub nome: String,
    pub periodicidade: String,
    pub empresa_id: i32,
}

// Shape only: any text is a valid `periodicidade`.
impl Validate for ObrigacaoAcessoriaCreate {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ObrigacaoAcessoriaResponse {
    pub id: i32,
    pub nome: String,
    pub periodicidade: String,
    pub empresa_id: i32,
}

impl From<obrigacao_acessoria::Model> for ObrigacaoAcessoriaResponse {
    fn from(model: obrigacao_acessoria::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            periodicidade: model.periodicidade,
            empresa_id: model.empresa_id,
        }
    }
}

/// How `update` treats the referenced company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmpresaCheck {
    /// No pre-check; the storage foreign key is the only guard.
    #[default]
    Skip,
    /// Same existence check as `create`.
    Require,
}

impl From<bool> for EmpresaCheck {
    fn from(enabled: bool) -> Self {
        if enabled {
            EmpresaCheck::Require
        } else {
            EmpresaCheck::Skip
        }
    }
}

// --- Operations ---

async fn find_model<C: ConnectionTrait>(
    db: &C,
    obrigacao_id: i32,
) -> Result<obrigacao_acessoria::Model, AppError> {
    obrigacao_acessoria::Entity::find_by_id(obrigacao_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            log::debug!("Obrigação {} not found", obrigacao_id);
            AppError::obrigacao_not_found()
        })
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    input: &ObrigacaoAcessoriaCreate,
) -> Result<ObrigacaoAcessoriaResponse, AppError> {
    empresas::find_model(db, input.empresa_id).await?;

    let obrigacao = obrigacao_acessoria::ActiveModel {
        nome: Set(input.nome.clone()),
        periodicidade: Set(input.periodicidade.clone()),
        empresa_id: Set(input.empresa_id),
        ..Default::default()
    };

    let created = obrigacao.insert(db).await?;
    log::info!(
        "Obrigação {} created for empresa {}",
        created.id,
        created.empresa_id
    );
    Ok(created.into())
}

pub async fn list<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<ObrigacaoAcessoriaResponse>, AppError> {
    let obrigacoes = obrigacao_acessoria::Entity::find()
        .order_by_asc(obrigacao_acessoria::Column::Id)
        .all(db)
        .await?;
    Ok(obrigacoes.into_iter().map(Into::into).collect())
}

pub async fn get<C: ConnectionTrait>(
    db: &C,
    obrigacao_id: i32,
) -> Result<ObrigacaoAcessoriaResponse, AppError> {
    Ok(find_model(db, obrigacao_id).await?.into())
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    obrigacao_id: i32,
    input: &ObrigacaoAcessoriaCreate,
    empresa_check: EmpresaCheck,
) -> Result<ObrigacaoAcessoriaResponse, AppError> {
    let current = find_model(db, obrigacao_id).await?;

    if current.empresa_id != input.empresa_id {
        match empresa_check {
            EmpresaCheck::Require => {
                empresas::find_model(db, input.empresa_id).await?;
            }
            EmpresaCheck::Skip => {
                log::warn!(
                    "Obrigação {} moved from empresa {} to {} without an existence check",
                    obrigacao_id,
                    current.empresa_id,
                    input.empresa_id
                );
            }
        }
    }

    let mut active_model = current.into_active_model();
    active_model.nome = Set(input.nome.clone());
    active_model.periodicidade = Set(input.periodicidade.clone());
    active_model.empresa_id = Set(input.empresa_id);

    let updated = active_model.update(db).await?;
    log::info!("Obrigação {} updated", updated.id);
    Ok(updated.into())
}

pub async fn delete<C: ConnectionTrait>(
    db: &C,
    obrigacao_id: i32,
) -> Result<ObrigacaoAcessoriaResponse, AppError> {
    let model = find_model(db, obrigacao_id).await?;
    model.clone().into_active_model().delete(db).await?;
    log::info!("Obrigação {} deleted", obrigacao_id);
    Ok(model.into())
}

