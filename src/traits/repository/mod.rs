pub mod es_blocking_repository_trait;
pub mod es_repository_trait;
