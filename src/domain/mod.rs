pub mod lost_pet;

pub use lost_pet::*;
