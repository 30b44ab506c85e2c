//! Integration tests for Packrat
//!
//! None of these spawn npm: they exercise argument handling, cache listing,
//! and the early-abort paths that fail before any external invocation.

mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn packrat() -> Command {
        Command::cargo_bin("packrat").unwrap()
    }

    #[test]
    fn help_displays() {
        packrat()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("cache-first npm package installer"));
    }

    #[test]
    fn version_displays() {
        packrat()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("packrat"));
    }

    #[test]
    fn list_empty_cache() {
        let temp = TempDir::new().unwrap();
        packrat()
            .args(["--cache-dir"])
            .arg(temp.path().join("npm-cache"))
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No cached packages"));
    }

    #[test]
    fn list_seeded_cache_plain() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("npm-cache");
        std::fs::create_dir_all(root.join("a").join("1.0.0")).unwrap();
        std::fs::create_dir_all(root.join("a").join("2.0.0")).unwrap();

        packrat()
            .arg("--cache-dir")
            .arg(&root)
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("a@1.0.0").and(predicate::str::contains("a@2.0.0")));
    }

    #[test]
    fn list_seeded_cache_json() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("npm-cache");
        std::fs::create_dir_all(root.join("left-pad").join("1.3.0")).unwrap();

        packrat()
            .arg("--cache-dir")
            .arg(&root)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"left-pad\""));
    }

    #[test]
    fn install_without_project_aborts_early() {
        // cwd has no package.json anywhere above it, so the command must
        // fail before it would ever spawn npm
        let temp = TempDir::new().unwrap();
        packrat()
            .current_dir(temp.path())
            .arg("--cache-dir")
            .arg(temp.path().join("npm-cache"))
            .args(["install", "left-pad", "--pkg-version", "1.3.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No npm project found"));
    }

    #[test]
    fn install_without_name_non_interactive() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), "{}").unwrap();
        packrat()
            .current_dir(temp.path())
            .arg("--cache-dir")
            .arg(temp.path().join("npm-cache"))
            .arg("install")
            .assert()
            .failure()
            .stderr(predicate::str::contains("package name is required"));
    }

    #[test]
    fn prune_is_a_stub() {
        packrat()
            .arg("prune")
            .assert()
            .success()
            .stdout(predicate::str::contains("not implemented"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        packrat()
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let temp = TempDir::new().unwrap();
        packrat()
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[npm]").and(predicate::str::contains("cooldown_hours")));
    }

    #[test]
    fn config_init_and_reinit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        packrat()
            .arg("--config")
            .arg(&path)
            .args(["config", "init"])
            .assert()
            .success();
        assert!(path.exists());

        packrat()
            .arg("--config")
            .arg(&path)
            .args(["config", "init"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("use --force"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "npm = [broken").unwrap();

        packrat()
            .arg("--config")
            .arg(&path)
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}
