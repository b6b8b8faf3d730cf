pub mod dto;
pub mod mapper;
pub mod service;

pub use dto::{CityDto, MessageResponse};
pub use service::CityService;
