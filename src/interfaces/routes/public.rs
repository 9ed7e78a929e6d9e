use actix_web::web;

use crate::handlers::{public, system};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(public::landing)
        .service(public::get_project)
        .service(public::submit_contact)
        .service(system::health_check);
}
