pub mod database;
pub mod memory;
pub mod mongodb;

pub use database::mongo_context;
pub use memory::lost_pet_repository::InMemoryLostPetRepository;
pub use self::mongodb::lost_pet_repository::MongoLostPetRepository;
