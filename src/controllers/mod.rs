//! Controladores: validan la request y coordinan repositorios y servicios

pub mod autousa_controller;
pub mod car_controller;
pub mod client_controller;
pub mod location_controller;
pub mod service_controller;
