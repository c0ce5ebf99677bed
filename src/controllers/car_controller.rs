use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::car_dto::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::dto::common_dto::MessageResponse;
use crate::models::car::NewCar;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::pagination::{Paginated, Pagination};

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    pub async fn list(&self, pagination: Pagination) -> AppResult<Paginated<CarResponse>> {
        let (cars, total) = self.repository.list(&pagination).await?;
        let data = cars.into_iter().map(CarResponse::from).collect();
        Ok(Paginated::new(data, pagination, total))
    }

    pub async fn get(&self, id: i32) -> AppResult<CarResponse> {
        self.repository
            .find_by_id(id)
            .await?
            .map(CarResponse::from)
            .ok_or_else(|| not_found_error("Car"))
    }

    pub async fn create(&self, request: CreateCarRequest) -> AppResult<CarResponse> {
        request.validate()?;

        let car = self.repository.create(&NewCar::from(request)).await?;
        info!("✅ Car creado: {}", car.car_id);

        Ok(CarResponse::from(car))
    }

    pub async fn update(&self, id: i32, request: UpdateCarRequest) -> AppResult<CarResponse> {
        request.validate()?;

        let mut car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car"))?;

        request.apply_to(&mut car);
        let car = self.repository.update(&car).await?;
        info!("✅ Car actualizado: {}", id);

        Ok(CarResponse::from(car))
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Car"));
        }
        info!("🗑️ Car eliminado: {}", id);

        Ok(MessageResponse::new("Car deleted successfully"))
    }
}
