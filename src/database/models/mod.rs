pub mod empresa;
pub mod obrigacao_acessoria;
