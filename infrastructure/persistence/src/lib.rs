pub mod db;
pub mod settings {
    pub mod entity;
    pub mod repository;
}
