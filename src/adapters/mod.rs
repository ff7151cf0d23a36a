pub mod export_client;
pub mod http;
pub mod persistence;
