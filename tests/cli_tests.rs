use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookshelf_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"))
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    bookshelf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL API"));
}

#[test]
fn test_version() {
    bookshelf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_query_books_from_builtin_catalog() {
    bookshelf_cmd()
        .args(["query", "{ books { id name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Harry Potter and the Chamber of Secrets",
        ));
}

#[test]
fn test_query_resolves_cross_references() {
    bookshelf_cmd()
        .args(["query", "{ book(id: 4) { name author { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fellowship of the Ring"))
        .stdout(predicate::str::contains("J. R. R. Tolkien"));
}

#[test]
fn test_query_miss_returns_null() {
    bookshelf_cmd()
        .args(["query", "{ book(id: 999) { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"book\": null"));
}

#[test]
fn test_query_with_variables() {
    bookshelf_cmd()
        .args([
            "query",
            "query($id: Int) { author(id: $id) { name } }",
            "--variables",
            r#"{"id": 3}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brent Weeks"));
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn test_mutate_wraps_and_returns_record() {
    bookshelf_cmd()
        .args(["mutate", "addAuthor(name: \"Ada Lovelace\") { id name }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 4"))
        .stdout(predicate::str::contains("Ada Lovelace"));
}

#[test]
fn test_mutate_reports_validation_errors() {
    bookshelf_cmd()
        .args(["mutate", "addBook(name: \"No Author\") { id }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"))
        .stdout(predicate::str::contains("authorId"));
}

#[test]
fn test_each_invocation_starts_fresh() {
    bookshelf_cmd()
        .args(["mutate", "addAuthor(name: \"Ada Lovelace\") { id }"])
        .assert()
        .success();

    // The store lives only for the process, so the next run is seeded anew
    bookshelf_cmd()
        .args(["query", "{ authors { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brent Weeks"))
        .stdout(predicate::str::contains("Ada Lovelace").not());
}

// =============================================================================
// Seed files and config
// =============================================================================

#[test]
fn test_seed_flag_overrides_builtin_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("library.yml");
    std::fs::write(
        &seed_path,
        "authors:\n  - id: 1\n    name: Ann Leckie\nbooks:\n  - id: 1\n    name: Ancillary Justice\n    author_id: 1\n",
    )
    .unwrap();

    bookshelf_cmd()
        .args([
            "--seed",
            seed_path.to_str().unwrap(),
            "query",
            "{ books { name } }",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ancillary Justice"))
        .stdout(predicate::str::contains("Harry Potter").not());
}

#[test]
fn test_config_file_discovered_from_cwd() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("library.yml"),
        "authors:\n  - id: 1\n    name: Ann Leckie\n",
    )
    .unwrap();
    std::fs::write(temp_dir.path().join(".bookshelf.yml"), "seed: library.yml\n").unwrap();

    bookshelf_cmd()
        .args(["query", "{ authors { name } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Leckie"));
}

#[test]
fn test_config_seed_resolves_against_config_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("library.yml"),
        "authors:\n  - id: 1\n    name: Becky Chambers\n",
    )
    .unwrap();
    std::fs::write(temp_dir.path().join(".bookshelf.yml"), "seed: library.yml\n").unwrap();

    // Same discovery, invoked a directory below the config
    let sub = temp_dir.path().join("sub");
    std::fs::create_dir_all(&sub).unwrap();

    bookshelf_cmd()
        .args(["query", "{ authors { name } }"])
        .current_dir(&sub)
        .assert()
        .success()
        .stdout(predicate::str::contains("Becky Chambers"));
}

#[test]
fn test_explicit_config_flag() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("library.yml");
    std::fs::write(
        &seed_path,
        "books:\n  - id: 1\n    name: The Dispossessed\n    author_id: 1\n",
    )
    .unwrap();

    let config_path = temp_dir.path().join("custom.yml");
    std::fs::write(&config_path, format!("seed: {}\n", seed_path.display())).unwrap();

    bookshelf_cmd()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "query",
            "{ books { name } }",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Dispossessed"));
}

#[test]
fn test_missing_seed_file_fails() {
    bookshelf_cmd()
        .args([
            "--seed",
            "/nonexistent/library.yml",
            "query",
            "{ authors { id } }",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Seed error"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.yml");
    std::fs::write(&config_path, "server: [not, a, mapping]\n").unwrap();

    bookshelf_cmd()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "query",
            "{ authors { id } }",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to load bookshelf configuration",
        ));
}

// =============================================================================
// Serve
// =============================================================================

#[test]
fn test_serve_reads_port_from_environment() {
    // An unparseable PORT is rejected at flag parsing, before any bind
    bookshelf_cmd()
        .args(["serve"])
        .env("PORT", "not-a-port")
        .timeout(std::time::Duration::from_secs(5))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-port"));
}

// =============================================================================
// SDL
// =============================================================================

#[test]
fn test_sdl_prints_schema() {
    bookshelf_cmd()
        .arg("sdl")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Query"))
        .stdout(predicate::str::contains(
            "addBook(name: String!, authorId: Int!): Book!",
        ));
}
