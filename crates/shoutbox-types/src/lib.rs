pub mod limits;
pub mod models;
