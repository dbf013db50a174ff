pub mod assembler;
pub mod domain;
pub mod ports;
pub mod services;
mod post_use_cases;

pub use post_use_cases::PostUseCases;
