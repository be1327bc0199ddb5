//! Common test utilities for tailgraft integration tests

use std::path::PathBuf;
use tempfile::TempDir;

#[allow(dead_code)]
pub const ANGULAR_JSON: &str = r#"{
  "version": 1,
  "projects": {
    "demo": {
      "architect": {
        "build": {
          "options": {
            "styles": []
          }
        }
      }
    }
  }
}"#;

#[allow(dead_code)]
pub const PACKAGE_JSON: &str = r#"{
  "name": "demo",
  "dependencies": {
    "@angular/core": "^18.0.0"
  },
  "devDependencies": {}
}"#;

#[allow(dead_code)]
pub const APP_COMPONENT: &str = "import { Component } from '@angular/core';

@Component({
  selector: 'app-root',
  templateUrl: './app.component.html'
})
export class AppComponent {
  title = 'demo';
}
";

#[allow(dead_code)]
pub const APP_CONFIG: &str = "import { ApplicationConfig, provideZoneChangeDetection } from '@angular/core';

export const appConfig: ApplicationConfig = {
  providers: [
    provideZoneChangeDetection({ eventCoalescing: true })
  ]
};
";

/// A scratch Angular project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create an empty project directory
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a minimal Angular project layout
    pub fn angular() -> Self {
        let project = Self::empty();
        project.write_file("angular.json", ANGULAR_JSON);
        project.write_file("package.json", PACKAGE_JSON);
        project.write_file("src/styles.css", "body { margin: 0; }\n");
        project.write_file("src/app/app.component.ts", APP_COMPONENT);
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// A tailgraft command targeting a test project
#[allow(dead_code)]
pub fn tailgraft_cmd(project: &TestProject) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("tailgraft").expect("binary builds");
    cmd.arg("-p").arg(&project.path);
    cmd
}
