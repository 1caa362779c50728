//! # Example Program Text Service
//!
//! Backend logic for `GET /examples/{file_name}`: returns the raw text of one
//! program from the programs directory. The text is sent untrimmed; the
//! frontend trims it before showing it.

use std::io::ErrorKind;

use actix_web::{web, HttpResponse, Responder};
use log::error;

use super::is_valid_program_name;
use crate::config::AppConfig;

/// Actix web handler for `GET /examples/{file_name}`.
///
/// # Returns
/// - `200 OK` with the file as `text/plain; charset=utf-8`.
/// - `404 Not Found` if the name is invalid or no regular file (symlinks
///   excluded) has that name.
/// - `503 Service Unavailable` if the file exists but cannot be read.
pub async fn process(
    config: web::Data<AppConfig>,
    file_name: web::Path<String>,
) -> impl Responder {
    let file_name = file_name.into_inner();
    if !is_valid_program_name(&file_name) {
        return HttpResponse::NotFound().body("Not Found");
    }

    let path = config.programs_dir.join(&file_name);
    // Not following links keeps this in step with the catalogue listing.
    match tokio::fs::symlink_metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return HttpResponse::NotFound().body("Not Found"),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return HttpResponse::NotFound().body("Not Found")
        }
        Err(e) => return unreadable(&file_name, e),
    }

    match tokio::fs::read(&path).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(bytes),
        Err(e) => unreadable(&file_name, e),
    }
}

fn unreadable(file_name: &str, e: std::io::Error) -> HttpResponse {
    error!("Cannot read program {}: {}", file_name, e);
    HttpResponse::ServiceUnavailable().body(format!("Error reading program: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::examples::configure_program_routes;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::App;
    use std::fs;

    async fn call(dir: &std::path::Path, uri: &str) -> actix_web::dev::ServiceResponse {
        let config = AppConfig {
            programs_dir: dir.to_path_buf(),
            ..AppConfig::default()
        };
        let app = actix_web::test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(configure_program_routes()),
        )
        .await;
        actix_web::test::call_service(&app, actix_web::test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn serves_program_text_untrimmed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "  hello  \n").unwrap();

        let resp = call(dir.path(), "/examples/a.txt").await;

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = actix_web::test::read_body(resp).await;
        assert_eq!(&body[..], b"  hello  \n");
    }

    #[actix_web::test]
    async fn missing_program_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let resp = call(dir.path(), "/examples/missing.txt").await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn hidden_files_and_directories_are_not_served() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        assert_eq!(call(dir.path(), "/examples/.env").await.status(), 404);
        assert_eq!(call(dir.path(), "/examples/nested").await.status(), 404);
    }

    #[cfg(unix)]
    #[actix_web::test]
    async fn symlinked_programs_are_not_served() {
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("secret.txt"), "secret").unwrap();
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(outside.path().join("secret.txt"), dir.path().join("link.txt"))
            .unwrap();

        assert_eq!(call(dir.path(), "/examples/link.txt").await.status(), 404);
    }
}
