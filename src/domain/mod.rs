pub mod config;
pub mod materials;
