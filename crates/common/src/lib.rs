pub mod case_path;
pub mod inventory;
pub mod models;
pub mod sample;
