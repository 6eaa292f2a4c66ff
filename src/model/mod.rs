pub mod configs;
pub mod elastic_dto;
