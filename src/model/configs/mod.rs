pub mod elastic_config;
