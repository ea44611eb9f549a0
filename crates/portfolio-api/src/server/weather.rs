use crate::prelude::*;
use axum::{
    extract::{rejection::PathRejection, Path},
    Json,
};
use portfolio_core::weather::{lookup, WeatherReport};
use portfolio_core::ApiError;

/// Weather needs no store: the table is static. A city segment that does not
/// decode can never name a known city.
pub async fn show(
    city: Result<Path<String>, PathRejection>,
) -> Result<Json<WeatherReport>, Error> {
    let Path(city) = city.map_err(|rejection| {
        log::debug!("rejected city segment: {rejection}");
        ApiError::CityNotFound
    })?;

    let report = lookup(&city)?;
    log::debug!("weather lookup for {}", report.city);
    Ok(Json(report))
}
