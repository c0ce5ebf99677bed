//! Acceso a PostgreSQL

pub mod autousa_repository;
pub mod car_repository;
pub mod client_repository;
pub mod location_repository;
pub mod service_repository;
pub mod unit_of_work;
