use actix_web::web;

use crate::handlers::{certifications, experiences, messages, profile, projects, skills, system, uploads};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(system::admin_dashboard)

            .service(profile::get_profile)
            .service(profile::update_profile)

            .service(experiences::list_experiences)
            .service(experiences::create_experience)
            .service(experiences::get_experience)
            .service(experiences::update_experience)
            .service(experiences::delete_experience)

            .service(skills::list_skills)
            .service(skills::create_skill)
            .service(skills::get_skill)
            .service(skills::update_skill)
            .service(skills::delete_skill)

            .service(projects::list_projects)
            .service(projects::create_project)
            .service(projects::get_project)
            .service(projects::update_project)
            .service(projects::delete_project)

            .service(certifications::list_certifications)
            .service(certifications::create_certification)
            .service(certifications::get_certification)
            .service(certifications::update_certification)
            .service(certifications::delete_certification)

            .service(messages::list_messages)
            .service(messages::mark_message_read)
            .service(messages::delete_message)

            .service(uploads::upload_image)
            .service(uploads::delete_image)
    );
}
