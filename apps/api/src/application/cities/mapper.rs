//! Field-for-field conversion between `City` and `CityDto`.

use super::dto::CityDto;
use crate::domain::city::City;

pub fn to_dto(city: City) -> CityDto {
    CityDto {
        id: city.id,
        name: city.name,
        state: city.state,
    }
}

/// Copies `id` as-is; a `None` id tells storage to assign a fresh one.
pub fn to_entity(dto: CityDto) -> City {
    City {
        id: dto.id,
        name: dto.name,
        state: dto.state,
    }
}
