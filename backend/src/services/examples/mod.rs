//! # Example Program Service Module
//!
//! Serves the example programs the frontend offers in its dropdown. The
//! programs are plain files in the configured programs directory.
//!
//! ## Sub-modules:
//! - `catalog`: Lists the available programs as a `ProgramCatalog`.
//! - `program`: Returns the text of one program.

mod catalog;
mod program;

use actix_web::web::{get, scope};
use actix_web::Scope;
use regex::Regex;
use std::sync::LazyLock;

/// The path the catalogue is served at.
const CATALOG_PATH: &str = "/api/examples";

/// The base path program texts are served under.
pub const PROGRAMS_PATH: &str = "/examples";

static PROGRAM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("program name pattern is valid"));

/// Configures the Actix `Scope` for the catalogue.
///
/// *   **`GET /api/examples`**:
///     - **Handler**: `catalog::process`
///     - **Description**: Returns every valid program file of the programs
///       directory as JSON, sorted by file name.
pub fn configure_catalog_routes() -> Scope {
    scope(CATALOG_PATH).route("", get().to(catalog::process))
}

/// Configures the Actix `Scope` for program texts.
///
/// *   **`GET /examples/{file_name}`**:
///     - **Handler**: `program::process`
///     - **Description**: Returns the program text as `text/plain`, or
///       `404 Not Found` for unknown or invalid names.
pub fn configure_program_routes() -> Scope {
    scope(PROGRAMS_PATH).route("/{file_name}", get().to(program::process))
}

/// A program name is a single path segment of safe characters that does not
/// start with a dot. This keeps hidden files and `..` out of reach.
pub fn is_valid_program_name(name: &str) -> bool {
    !name.starts_with('.') && PROGRAM_NAME_RE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_file_names() {
        assert!(is_valid_program_name("hello.txt"));
        assert!(is_valid_program_name("count-down_2.prog"));
        assert!(is_valid_program_name("README"));
    }

    #[test]
    fn rejects_hidden_and_traversal_names() {
        assert!(!is_valid_program_name(""));
        assert!(!is_valid_program_name(".hidden"));
        assert!(!is_valid_program_name(".."));
        assert!(!is_valid_program_name("../secret"));
        assert!(!is_valid_program_name("a/b.txt"));
        assert!(!is_valid_program_name("with space.txt"));
    }
}
