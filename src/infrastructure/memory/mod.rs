pub mod lost_pet_repository;
