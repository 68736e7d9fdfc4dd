//! End-to-End CLI Tests for agora

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the agora binary
fn agora() -> Command {
    cargo_bin_cmd!("agora")
}

const WELCOME_TOML: &str = r#"
title = "Welcome"
introduction = "A platform for X."

[[sections]]
heading = "A"
body = "desc A"
accent = "primary"

[[sections]]
heading = "B"
body = "desc B"
accent = "secondary"

[[sections]]
heading = "C"
body = "desc C"
accent = "tertiary"
"#;

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        agora()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("layout"));
    }

    #[test]
    fn shows_version() {
        agora()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_builtin_page_to_stdout() {
        let temp = TempDir::new().expect("temp dir");

        agora()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Добро пожаловать в АГОРА"))
            .stdout(predicate::str::contains("accent-tertiary"));
    }

    #[test]
    fn renders_content_file_to_output() {
        let temp = TempDir::new().expect("temp dir");
        let content = temp.path().join("page.toml");
        let out = temp.path().join("index.html");
        std::fs::write(&content, WELCOME_TOML).expect("write content");

        agora()
            .current_dir(temp.path())
            .args(["render", "--content"])
            .arg(&content)
            .arg("--out")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = std::fs::read_to_string(&out).expect("output written");
        assert!(html.contains("Welcome"));
        let a = html.find("desc A").expect("card A");
        let c = html.find("desc C").expect("card C");
        assert!(a < c);
    }

    #[test]
    fn honours_project_config() {
        let temp = TempDir::new().expect("temp dir");
        let agora_dir = temp.path().join(".agora");
        std::fs::create_dir_all(&agora_dir).expect("create .agora");
        std::fs::write(
            agora_dir.join("config.toml"),
            "[layout]\nbreakpoint_px = 900\nwide_columns = 2\n\n[document]\nlang = \"en\"\n",
        )
        .expect("write config");

        agora()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains("@media (min-width: 900px)"))
            .stdout(predicate::str::contains("lang=\"en\""));
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("broken.toml");
        std::fs::write(&config, "[layout").expect("write config");

        agora()
            .current_dir(temp.path())
            .args(["render", "--config"])
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("@media (min-width: 768px)"));
    }
}

// ============================================
// Check / Layout Tests
// ============================================

mod validation {
    use super::*;

    #[test]
    fn check_passes_valid_content() {
        let temp = TempDir::new().expect("temp dir");
        let content = temp.path().join("page.toml");
        std::fs::write(&content, WELCOME_TOML).expect("write content");

        agora()
            .current_dir(temp.path())
            .args(["check", "--content"])
            .arg(&content)
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: \"Welcome\""))
            .stdout(predicate::str::contains("3 card(s)"));
    }

    #[test]
    fn check_fails_on_empty_title() {
        let temp = TempDir::new().expect("temp dir");
        let content = temp.path().join("page.toml");
        std::fs::write(&content, "title = \"\"\n").expect("write content");

        agora()
            .current_dir(temp.path())
            .args(["check", "--content"])
            .arg(&content)
            .assert()
            .failure()
            .stderr(predicate::str::contains("title is empty"));
    }

    #[test]
    fn check_fails_on_null_card() {
        let temp = TempDir::new().expect("temp dir");
        let content = temp.path().join("page.json");
        std::fs::write(&content, r#"{"title":"T","sections":[{"heading":"A"},null]}"#)
            .expect("write content");

        agora()
            .current_dir(temp.path())
            .args(["check", "--content"])
            .arg(&content)
            .assert()
            .failure()
            .stderr(predicate::str::contains("sections[1]"));
    }

    #[test]
    fn layout_prints_json_tree() {
        let temp = TempDir::new().expect("temp dir");

        agora()
            .current_dir(temp.path())
            .arg("layout")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"heading\""))
            .stdout(predicate::str::contains("\"slots\""))
            .stdout(predicate::str::contains("\"accent\": \"secondary\""));
    }
}
