pub mod db;
pub mod sql;
pub mod product {
    pub mod entity;
    pub mod fields;
    pub mod queries;
    pub mod repository;
}
