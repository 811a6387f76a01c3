pub mod model;
pub mod query;
pub mod repository;

pub use model::{Contact, LostPetRecord, Species};
pub use query::{FilterMode, PetQuery};
pub use repository::LostPetRepository;
