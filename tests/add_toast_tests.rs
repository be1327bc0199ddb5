//! Toast add-on integration tests

mod common;

use common::{TestProject, tailgraft_cmd};
use predicates::prelude::*;

#[test]
fn test_toast_splices_providers_in_order() {
    let project = TestProject::angular();
    project.write_file("src/app/app.config.ts", common::APP_CONFIG);

    tailgraft_cmd(&project)
        .args(["add", "--toast", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding @kalees64/toast..."));

    let config = project.read_file("src/app/app.config.ts");
    let animations = config.find("provideAnimations(),").unwrap();
    let toastr = config.find("provideToastr(),").unwrap();
    let original = config.find("provideZoneChangeDetection(").unwrap();
    assert!(animations < toastr);
    assert!(toastr < original);
    assert!(config.contains("import { provideAnimations } from '@angular/platform-browser/animations';"));
    assert!(config.contains("import { provideToastr } from 'ngx-toastr';"));
}

#[test]
fn test_toast_registers_toastr_stylesheet() {
    let project = TestProject::angular();
    project.write_file("src/app/app.config.ts", common::APP_CONFIG);

    tailgraft_cmd(&project)
        .args(["add", "--toast", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "npm install ngx-toastr @angular/animations sweetalert2",
        ));

    let workspace = project.read_file("angular.json");
    assert!(workspace.contains("node_modules/ngx-toastr/toastr.css"));
}

#[test]
fn test_toast_warns_when_app_config_missing() {
    let project = TestProject::angular();

    tailgraft_cmd(&project)
        .args(["add", "--toast", "--skip-install"])
        .assert()
        .success()
        .stderr(predicate::str::contains("app.config.ts file not found"));
}

#[test]
fn test_no_toast_stages_no_addon_edits() {
    let project = TestProject::angular();
    project.write_file("src/app/app.config.ts", common::APP_CONFIG);

    tailgraft_cmd(&project)
        .args(["add", "--no-toast", "--skip-install"])
        .assert()
        .success();

    assert_eq!(project.read_file("src/app/app.config.ts"), common::APP_CONFIG);
    let workspace = project.read_file("angular.json");
    assert!(!workspace.contains("ngx-toastr"));
}

#[test]
fn test_prompt_defaults_to_declined_without_terminal() {
    // Piped stdin/stdout: the confirmation cannot be asked, so the add-on
    // is skipped rather than hanging the pipeline.
    let project = TestProject::angular();
    project.write_file("src/app/app.config.ts", common::APP_CONFIG);

    tailgraft_cmd(&project)
        .args(["add", "--skip-install"])
        .assert()
        .success();

    assert_eq!(project.read_file("src/app/app.config.ts"), common::APP_CONFIG);
}
