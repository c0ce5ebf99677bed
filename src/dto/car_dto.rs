//! DTOs de Car

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::car::{Car, NewCar};

// Request para crear un coche; todas las columnas son obligatorias
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 30))]
    pub mark: String,
    #[validate(length(min = 1, max = 50))]
    pub model: String,
    #[validate(range(min = 1886, max = 2100))]
    pub year: i32,
    #[validate(length(max = 200))]
    pub addi: String,
    #[validate(length(min = 1, max = 30))]
    pub transmission: String,
    #[validate(range(min = 0))]
    pub mileage: i32,
    #[validate(length(min = 1, max = 30))]
    pub fuel_type: String,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(range(min = 0))]
    pub discount: i32,
    pub quality: i32,
    #[validate(length(min = 1))]
    pub engine: String,
    #[validate(length(max = 255))]
    pub photo_url: String,
}

// Request para actualizar un coche
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 30))]
    pub mark: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub model: Option<String>,
    #[validate(range(min = 1886, max = 2100))]
    pub year: Option<i32>,
    #[validate(length(max = 200))]
    pub addi: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub transmission: Option<String>,
    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
    #[validate(length(min = 1, max = 30))]
    pub fuel_type: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    #[validate(range(min = 0))]
    pub discount: Option<i32>,
    pub quality: Option<i32>,
    #[validate(length(min = 1))]
    pub engine: Option<String>,
    #[validate(length(max = 255))]
    pub photo_url: Option<String>,
}

// Response de coche; price y discount salen como número decimal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarResponse {
    pub car_id: i32,
    pub mark: String,
    pub model: String,
    pub year: i32,
    pub addi: String,
    pub transmission: String,
    pub mileage: i32,
    pub fuel_type: String,
    pub price: f64,
    pub discount: f64,
    pub engine: String,
    pub quality: i32,
    pub photo_url: String,
}

impl From<CreateCarRequest> for NewCar {
    fn from(request: CreateCarRequest) -> Self {
        NewCar {
            mark: request.mark,
            model: request.model,
            year: request.year,
            addi: request.addi,
            transmission: request.transmission,
            mileage: request.mileage,
            fuel_type: request.fuel_type,
            price: request.price,
            discount: request.discount,
            quality: request.quality,
            engine: request.engine,
            photo_url: request.photo_url,
        }
    }
}

impl UpdateCarRequest {
    pub fn apply_to(self, car: &mut Car) {
        if let Some(mark) = self.mark {
            car.mark = mark;
        }
        if let Some(model) = self.model {
            car.model = model;
        }
        if let Some(year) = self.year {
            car.year = year;
        }
        if let Some(addi) = self.addi {
            car.addi = addi;
        }
        if let Some(transmission) = self.transmission {
            car.transmission = transmission;
        }
        if let Some(mileage) = self.mileage {
            car.mileage = mileage;
        }
        if let Some(fuel_type) = self.fuel_type {
            car.fuel_type = fuel_type;
        }
        if let Some(price) = self.price {
            car.price = price;
        }
        if let Some(discount) = self.discount {
            car.discount = discount;
        }
        if let Some(quality) = self.quality {
            car.quality = quality;
        }
        if let Some(engine) = self.engine {
            car.engine = engine;
        }
        if let Some(photo_url) = self.photo_url {
            car.photo_url = photo_url;
        }
    }
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            car_id: car.car_id,
            mark: car.mark,
            model: car.model,
            year: car.year,
            addi: car.addi,
            transmission: car.transmission,
            mileage: car.mileage,
            fuel_type: car.fuel_type,
            price: f64::from(car.price),
            discount: f64::from(car.discount),
            engine: car.engine,
            quality: car.quality,
            photo_url: car.photo_url,
        }
    }
}
