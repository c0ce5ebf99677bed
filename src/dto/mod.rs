//! DTOs de entrada y salida de la API

pub mod autousa_dto;
pub mod car_dto;
pub mod client_dto;
pub mod common_dto;
pub mod service_dto;
