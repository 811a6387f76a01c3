use actix_web::web;

use crate::api::handlers::lost_pet_handlers::{get_lost_pet, list_lost_pets};
use crate::api::handlers::page_handlers::{call_owner, detail_page, home_page, list_page, message_owner};

pub fn page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(home_page))
    );

    cfg.service(
        web::resource("/home")
            .route(web::get().to(home_page))
    );

    cfg.service(
        web::resource("/lost-pets")
            .route(web::get().to(list_page))
    );

    cfg.service(
        web::resource("/lost-pets/{pet_id}")
            .route(web::get().to(detail_page))
    );

    cfg.service(
        web::resource("/lost-pets/{pet_id}/call")
            .route(web::get().to(call_owner))
    );

    cfg.service(
        web::resource("/lost-pets/{pet_id}/message")
            .route(web::get().to(message_owner))
    );
}

pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/lost-pets")
            .route(web::get().to(list_lost_pets))
    );

    cfg.service(
        web::resource("/api/lost-pets/{pet_id}")
            .route(web::get().to(get_lost_pet))
    );
}
