//! Repositorio de Car

use sqlx::PgPool;

use crate::models::car::{Car, NewCar};
use crate::utils::errors::AppResult;
use crate::utils::pagination::Pagination;

const CAR_COLUMNS: &str = "car_id, mark, model, year, addi, transmission, mileage, fuel_type, \
                           price, discount, quality, engine, photo_url";

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, pagination: &Pagination) -> AppResult<(Vec<Car>, i64)> {
        let cars = sqlx::query_as::<_, Car>(&format!(
            "SELECT {} FROM cars ORDER BY car_id LIMIT $1 OFFSET $2",
            CAR_COLUMNS
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;

        Ok((cars, total.0))
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>(&format!(
            "SELECT {} FROM cars WHERE car_id = $1",
            CAR_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn create(&self, car: &NewCar) -> AppResult<Car> {
        let created = sqlx::query_as::<_, Car>(&format!(
            r#"
            INSERT INTO cars (mark, model, year, addi, transmission, mileage, fuel_type,
                              price, discount, quality, engine, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            CAR_COLUMNS
        ))
        .bind(&car.mark)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.addi)
        .bind(&car.transmission)
        .bind(car.mileage)
        .bind(&car.fuel_type)
        .bind(car.price)
        .bind(car.discount)
        .bind(car.quality)
        .bind(&car.engine)
        .bind(&car.photo_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update(&self, car: &Car) -> AppResult<Car> {
        let updated = sqlx::query_as::<_, Car>(&format!(
            r#"
            UPDATE cars
            SET mark = $2, model = $3, year = $4, addi = $5, transmission = $6, mileage = $7,
                fuel_type = $8, price = $9, discount = $10, quality = $11, engine = $12,
                photo_url = $13
            WHERE car_id = $1
            RETURNING {}
            "#,
            CAR_COLUMNS
        ))
        .bind(car.car_id)
        .bind(&car.mark)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.addi)
        .bind(&car.transmission)
        .bind(car.mileage)
        .bind(&car.fuel_type)
        .bind(car.price)
        .bind(car.discount)
        .bind(car.quality)
        .bind(&car.engine)
        .bind(&car.photo_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cars WHERE car_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
