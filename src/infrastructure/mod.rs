pub mod bootstrap;
pub mod config;
pub mod grid;
pub mod llm_clients;
pub mod providers;
pub mod response;
