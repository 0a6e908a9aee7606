pub mod database;
pub mod lists;
pub mod repositories;
pub mod system;
