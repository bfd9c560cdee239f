pub mod analytics_service;
pub mod query_builder;
pub mod query_gateway;
