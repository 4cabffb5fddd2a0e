//! Singers catalog: request shapes, persistence seam and business rules.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{CreateSingerInput, SingerIdQuery, SingerNames, UpdateFirstNameInput};
pub use repository::{SeaOrmSingerRepository, SingerRepository};
pub use service::SingerService;
