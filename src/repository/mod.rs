pub mod es_blocking_repository;
pub mod es_registry;
pub mod es_repository;
