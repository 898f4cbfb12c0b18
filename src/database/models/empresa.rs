use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "empresas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub cnpj: String,
    pub endereco: String,
    pub email: String,
    pub telefone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::obrigacao_acessoria::Entity")]
    ObrigacaoAcessoria,
}

impl Related<super::obrigacao_acessoria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ObrigacaoAcessoria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
