pub mod domain;
mod graph_use_cases;
pub mod ports;
pub mod services;

pub use graph_use_cases::GraphUseCases;
