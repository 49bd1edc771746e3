// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod fishbase_client;
pub mod postgres_repository;
pub mod wire;
pub mod wire_mapper;
