use actix_web::web;

mod public;
mod auth;
mod admin;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(public::config_routes)
        .configure(auth::config_routes)
        .configure(admin::config_routes);
}
