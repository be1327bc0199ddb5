//! Dry-run integration tests

mod common;

use common::{TestProject, tailgraft_cmd};
use predicates::prelude::*;

#[test]
fn test_add_dry_run_writes_nothing() {
    let project = TestProject::angular();

    tailgraft_cmd(&project)
        .args(["add", "--no-toast", "--dry-run"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Dry run, nothing written.")
                .and(predicate::str::contains("create tailwind.config.js"))
                .and(predicate::str::contains("update src/styles.css"))
                .and(predicate::str::contains(
                    "npm install tailwindcss postcss autoprefixer",
                )),
        );

    assert!(!project.file_exists("tailwind.config.js"));
    assert!(!project.file_exists("src/app/services/theme.service.ts"));
    assert_eq!(project.read_file("src/styles.css"), "body { margin: 0; }\n");
}

#[test]
fn test_remove_dry_run_writes_nothing() {
    let project = TestProject::angular();
    tailgraft_cmd(&project)
        .args(["add", "--no-toast", "--skip-install"])
        .assert()
        .success();

    tailgraft_cmd(&project)
        .args(["remove", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("delete tailwind.config.js"));

    assert!(project.file_exists("tailwind.config.js"));
    let styles = project.read_file("src/styles.css");
    assert!(styles.contains("@tailwind base;"));
}
