//! # Example Catalogue Service
//!
//! Backend logic for `GET /api/examples`.
//!
//! ## Workflow
//!
//! 1.  **Directory scan**: `list_programs` reads the configured programs
//!     directory and keeps regular files whose name passes
//!     `is_valid_program_name`.
//! 2.  **Model assembly**: each file becomes a `ProgramOption` whose label is
//!     the file stem with `_` and `-` turned into spaces, and whose value is
//!     the URL the text is served at.
//! 3.  **HTTP Response**: the options, sorted by file name, are returned as a
//!     `ProgramCatalog` JSON body. An unreadable directory yields
//!     `503 Service Unavailable`.

use std::path::Path;

use actix_web::{web, HttpResponse, Responder};
use common::model::program::{ProgramCatalog, ProgramOption};
use log::warn;

use super::{is_valid_program_name, PROGRAMS_PATH};
use crate::config::AppConfig;

pub async fn process(config: web::Data<AppConfig>) -> impl Responder {
    match list_programs(&config.programs_dir).await {
        Ok(programs) => HttpResponse::Ok().json(ProgramCatalog { programs }),
        Err(e) => {
            warn!(
                "Cannot list programs in {}: {}",
                config.programs_dir.display(),
                e
            );
            HttpResponse::ServiceUnavailable().body(format!("Error listing example programs: {}", e))
        }
    }
}

/// Lists the programs of `dir` in file name order.
pub async fn list_programs(dir: &Path) -> std::io::Result<Vec<ProgramOption>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        // Non UTF-8 names cannot be valid program names anyway.
        if let Some(name) = entry.file_name().to_str() {
            if is_valid_program_name(name) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|name| ProgramOption::new(label_for(&name), format!("{}/{}", PROGRAMS_PATH, name)))
        .collect())
}

fn label_for(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    stem.replace(['_', '-'], " ")
}
