pub mod lost_pet_handlers;
pub mod page_handlers;
