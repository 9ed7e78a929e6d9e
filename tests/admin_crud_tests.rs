
use actix_web::{http::StatusCode, test};
use portfolio_api::repositories::experience::ExperienceRepository;
use portfolio_api::repositories::profile::ProfileRepository;
use portfolio_api::repositories::skill::SkillRepository;
use serde_json::{json, Value};
use test_utils::{build_app, TestApp};

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn unauthenticated_admin_writes_are_rejected_without_mutating() {
    let test_app = TestApp::spawn().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/admin/experiences")
        .set_json(json!({
            "job_title": "Engineer",
            "company": "Acme",
            "start_date": "2024",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(test_app.state.experience_repo.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn every_admin_route_requires_a_token() {
    let test_app = TestApp::spawn().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    for (method, uri) in [
        ("GET", "/admin/dashboard"),
        ("GET", "/admin/profile"),
        ("GET", "/admin/experiences"),
        ("GET", "/admin/skills"),
        ("GET", "/admin/projects"),
        ("GET", "/admin/certifications"),
        ("GET", "/admin/messages"),
        ("DELETE", "/admin/experiences/1"),
        ("DELETE", "/admin/projects/1"),
    ] {
        let req = match method {
            "GET" => test::TestRequest::get(),
            "DELETE" => test::TestRequest::delete(),
            _ => unreachable!(),
        }
        .uri(uri)
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[actix_web::test]
async fn experience_crud_roundtrip() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/admin/experiences")
        .insert_header(bearer(&token))
        .set_json(json!({
            "job_title": "Associate Engineer",
            "company": "Rangsons Aerospace",
            "location": "Bengaluru",
            "start_date": "2024",
            "end_date": "Present",
            "is_current": true,
            "description": "Embedded hardware design",
            "responsibilities": ["Design boards", "Test prototypes"],
            "order_index": 1,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/admin/experiences/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["job_title"], "Associate Engineer");
    assert_eq!(body["responsibilities"], json!(["Design boards", "Test prototypes"]));

    let req = test::TestRequest::put()
        .uri(&format!("/admin/experiences/{id}"))
        .insert_header(bearer(&token))
        .set_json(json!({
            "job_title": "Senior Engineer",
            "company": "Rangsons Aerospace",
            "start_date": "2024",
            "responsibilities": [],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/admin/experiences/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["job_title"], "Senior Engineer");
    assert_eq!(body["responsibilities"], json!([]));

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/experiences/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/admin/experiences/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn blank_list_entries_are_dropped_before_storage() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/admin/experiences")
        .insert_header(bearer(&token))
        .set_json(json!({
            "job_title": "Engineer",
            "company": "Acme",
            "start_date": "2023",
            "responsibilities": ["Real work", "", "   ", "More work"],
        }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/admin/experiences/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["responsibilities"], json!(["Real work", "More work"]));
}

#[actix_web::test]
async fn missing_required_field_is_rejected_without_persisting() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    // No job_title at all.
    let req = test::TestRequest::post()
        .uri("/admin/experiences")
        .insert_header(bearer(&token))
        .set_json(json!({
            "company": "Acme",
            "start_date": "2024",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Present but blank.
    let req = test::TestRequest::post()
        .uri("/admin/experiences")
        .insert_header(bearer(&token))
        .set_json(json!({
            "job_title": "",
            "company": "Acme",
            "start_date": "2024",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(test_app.state.experience_repo.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn skill_proficiency_must_stay_within_bounds() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    for proficiency in [-5i64, 101, 150] {
        let req = test::TestRequest::post()
            .uri("/admin/skills")
            .insert_header(bearer(&token))
            .set_json(json!({
                "name": "Altium Designer",
                "category": "Tools",
                "proficiency": proficiency,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "proficiency {proficiency}");
    }
    assert_eq!(test_app.state.skill_repo.count().await.unwrap(), 0);

    let req = test::TestRequest::post()
        .uri("/admin/skills")
        .insert_header(bearer(&token))
        .set_json(json!({
            "name": "Altium Designer",
            "category": "Tools",
            "proficiency": 90,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn profile_upsert_keeps_exactly_one_row() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let base = json!({
        "name": "First Version",
        "title": "Engineer",
        "description": "Desc",
        "email": "owner@example.com",
        "years_experience": 1.5,
        "projects_completed": 10,
        "companies_worked": 1,
    });
    let req = test::TestRequest::put()
        .uri("/admin/profile")
        .insert_header(bearer(&token))
        .set_json(&base)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let mut updated = base.clone();
    updated["name"] = json!("Second Version");
    let req = test::TestRequest::put()
        .uri("/admin/profile")
        .insert_header(bearer(&token))
        .set_json(&updated)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let profile = test_app.state.profile_repo.get().await.unwrap().unwrap();
    assert_eq!(profile.id, 1);
    assert_eq!(profile.name, "Second Version");

    let req = test::TestRequest::get()
        .uri("/admin/profile")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["name"], "Second Version");
}

#[actix_web::test]
async fn message_inbox_flow_marks_read_and_deletes() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/contact")
        .set_json(json!({
            "name": "Visitor",
            "email": "v@example.com",
            "subject": "Hello",
            "message": "Nice site",
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/admin/messages")
        .insert_header(bearer(&token))
        .to_request();
    let messages: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let list = messages.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["is_read"], false);
    let id = list[0]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/admin/messages/{id}/read"))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/admin/dashboard")
        .insert_header(bearer(&token))
        .to_request();
    let dashboard: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(dashboard["unread_messages"], 0);

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/messages/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/messages/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_a_missing_entity_is_a_404() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    for uri in [
        "/admin/experiences/42",
        "/admin/skills/42",
        "/admin/projects/42",
        "/admin/certifications/42",
    ] {
        let req = test::TestRequest::delete()
            .uri(uri)
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}
