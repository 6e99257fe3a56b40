//! SeaORM entities.

pub mod mascota;
