pub mod app_config;
pub mod model;
