
use actix_web::{http::StatusCode, test};
use image::GenericImageView;
use serde_json::{json, Value};
use test_utils::{
    build_app, jpeg_bytes, multipart_content_type, multipart_image_body, png_bytes, TestApp,
};

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

async fn upload(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    token: &str,
    bytes: &[u8],
    filename: &str,
    category: &str,
) -> (StatusCode, Value) {
    let req = test::TestRequest::post()
        .uri("/admin/images")
        .insert_header(bearer(token))
        .insert_header(("Content-Type", multipart_content_type()))
        .set_payload(multipart_image_body(bytes, filename, category))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn png_upload_stores_original_and_square_thumbnail() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (status, body) = upload(&app, &token, &png_bytes(640, 480), "shot.png", "projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let path = body["path"].as_str().unwrap();
    assert!(path.starts_with("uploads/projects/"), "{path}");
    assert!(path.ends_with(".png"), "{path}");

    let original = test_app.on_disk(path);
    assert!(original.exists());
    assert!(image::open(&original).is_ok());

    let thumb_path = body["thumbnail"].as_str().unwrap();
    assert!(thumb_path.starts_with("uploads/thumbnails/thumb_"), "{thumb_path}");
    let thumbnail = image::open(test_app.on_disk(thumb_path)).unwrap();
    assert_eq!(thumbnail.width(), 300);
    assert_eq!(thumbnail.height(), 300);
}

#[actix_web::test]
async fn jpeg_extension_is_normalized_on_storage() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (status, body) = upload(&app, &token, &jpeg_bytes(80, 80), "scan.jpeg", "certifications").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["path"].as_str().unwrap().ends_with(".jpg"));
}

#[actix_web::test]
async fn disallowed_extension_is_rejected_with_no_file_written() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (status, body) = upload(&app, &token, &png_bytes(10, 10), "notes.txt", "projects").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    // Nothing may land under the upload root.
    assert!(!test_app.upload_root().join("projects").exists());
}

#[actix_web::test]
async fn non_image_payload_is_rejected_with_no_file_written() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (status, body) = upload(&app, &token, b"plain text in disguise", "fake.png", "projects").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(!test_app.upload_root().join("projects").exists());
}

#[actix_web::test]
async fn unknown_category_is_rejected() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (status, _) = upload(&app, &token, &png_bytes(10, 10), "shot.png", "secrets").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn upload_requires_admin_token() {
    let test_app = TestApp::spawn().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/admin/images")
        .insert_header(("Content-Type", multipart_content_type()))
        .set_payload(multipart_image_body(&png_bytes(10, 10), "shot.png", "projects"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn delete_image_endpoint_removes_files_and_is_idempotent() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (_, body) = upload(&app, &token, &png_bytes(64, 64), "temp.png", "profile").await;
    let path = body["path"].as_str().unwrap().to_string();
    let thumb = body["thumbnail"].as_str().unwrap().to_string();
    assert!(test_app.on_disk(&path).exists());
    assert!(test_app.on_disk(&thumb).exists());

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri("/admin/images")
            .insert_header(bearer(&token))
            .set_json(json!({ "path": path }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    assert!(!test_app.on_disk(&path).exists());
    assert!(!test_app.on_disk(&thumb).exists());
}

#[actix_web::test]
async fn certification_image_replacement_deletes_the_old_files() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (_, first) = upload(&app, &token, &png_bytes(64, 64), "badge.png", "certifications").await;
    let first_path = first["path"].as_str().unwrap().to_string();
    let first_thumb = first["thumbnail"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/admin/certifications")
        .insert_header(bearer(&token))
        .set_json(json!({
            "name": "PCB Design Professional",
            "issuer": "IPC",
            "issue_date": "2024",
            "image": first_path,
        }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let (_, second) = upload(&app, &token, &jpeg_bytes(64, 64), "badge2.jpg", "certifications").await;
    let second_path = second["path"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/admin/certifications/{id}"))
        .insert_header(bearer(&token))
        .set_json(json!({
            "name": "PCB Design Professional",
            "issuer": "IPC",
            "issue_date": "2024",
            "image": second_path,
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    assert!(!test_app.on_disk(&first_path).exists(), "old original must be gone");
    assert!(!test_app.on_disk(&first_thumb).exists(), "old thumbnail must be gone");
    assert!(test_app.on_disk(&second_path).exists(), "new original must exist");

    let req = test::TestRequest::get()
        .uri(&format!("/admin/certifications/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["image"], second_path);
}

#[actix_web::test]
async fn certification_delete_removes_its_stored_image() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (_, uploaded) = upload(&app, &token, &png_bytes(32, 32), "badge.png", "certifications").await;
    let path = uploaded["path"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/admin/certifications")
        .insert_header(bearer(&token))
        .set_json(json!({
            "name": "Cert",
            "issuer": "Issuer",
            "image": path,
        }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/certifications/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    assert!(!test_app.on_disk(&path).exists());
}

#[actix_web::test]
async fn deleting_a_certification_without_image_is_not_an_error() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/admin/certifications")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Cert", "issuer": "Issuer" }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/certifications/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn project_edit_reconciles_kept_uploaded_and_external_images() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (_, a) = upload(&app, &token, &png_bytes(48, 48), "a.png", "projects").await;
    let (_, b) = upload(&app, &token, &png_bytes(48, 48), "b.png", "projects").await;
    let path_a = a["path"].as_str().unwrap().to_string();
    let path_b = b["path"].as_str().unwrap().to_string();
    let external = "https://example.com/hosted.png";

    let req = test::TestRequest::post()
        .uri("/admin/projects")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "RF Antenna System",
            "description": "Antenna design",
            "images": [path_a, path_b, external],
        }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    // Drop image A, keep B and the external URL.
    let req = test::TestRequest::put()
        .uri(&format!("/admin/projects/{id}"))
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "RF Antenna System",
            "description": "Antenna design",
            "images": [path_b, external],
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    assert!(!test_app.on_disk(&path_a).exists(), "dropped image must be deleted");
    assert!(test_app.on_disk(&path_b).exists(), "kept image must survive");

    let req = test::TestRequest::get()
        .uri(&format!("/api/project/{id}"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["images"], json!([path_b, external]));
}

#[actix_web::test]
async fn project_delete_removes_owned_images_but_not_external_urls() {
    let test_app = TestApp::spawn().await;
    let token = test_app.admin_token().await;
    let app = test::init_service(build_app(test_app.state.clone())).await;

    let (_, uploaded) = upload(&app, &token, &png_bytes(48, 48), "owned.png", "projects").await;
    let path = uploaded["path"].as_str().unwrap().to_string();
    let thumb = uploaded["thumbnail"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/admin/projects")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Doomed",
            "description": "Will be deleted",
            "images": [path, "https://example.com/keep.png"],
        }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/projects/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    assert!(!test_app.on_disk(&path).exists());
    assert!(!test_app.on_disk(&thumb).exists());
}
