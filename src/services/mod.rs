pub mod empresas;
pub mod obrigacoes;
pub mod validation;
