//! Fixed-content files emitted into the project
//!
//! Config files and the theme helper service are created only when absent,
//! never overwritten, so a hand-edited file survives re-installation. The
//! removal side deletes them unconditionally when present.

use crate::error::Result;
use crate::pipeline::RuleCtx;
use crate::rules::paths::{
    POSTCSS_CONFIG, SERVICES_DIR, SERVICES_KEEP, TAILWIND_CONFIG, THEME_SERVICE,
};
use crate::tree::Tree;
use crate::ui;

const TAILWIND_CONFIG_BODY: &str = "module.exports = {
  darkMode: 'class',
  content: ['./src/**/*.{html,ts}'],
  theme: {
    extend: {},
  },
  plugins: [],
};";

const POSTCSS_CONFIG_BODY: &str = "module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};";

const THEME_SERVICE_BODY: &str = "import { Injectable } from '@angular/core';

@Injectable({
  providedIn: 'root',
})
export class ThemeService {
  private readonly darkThemeClass = 'dark';

  toggleTheme(): void {
    const body = document.body;
    if (body.classList.contains(this.darkThemeClass)) {
      body.classList.remove(this.darkThemeClass);
      localStorage.setItem('theme', 'light');
    } else {
      body.classList.add(this.darkThemeClass);
      localStorage.setItem('theme', 'dark');
    }
  }

  initializeTheme(): void {
    const savedTheme = localStorage.getItem('theme');
    if (savedTheme === 'dark') {
      document.body.classList.add(this.darkThemeClass);
    } else {
      document.body.classList.remove(this.darkThemeClass);
    }
  }
}";

fn emit_if_absent(tree: &mut Tree, path: &str, body: &str) -> Result<()> {
    if tree.exists(path) {
        ui::info(format!("{path} already present, leaving as is"));
        return Ok(());
    }
    tree.create(path, body)?;
    ui::info(format!("Created {path}"));
    Ok(())
}

fn delete_if_present(tree: &mut Tree, path: &str) -> Result<()> {
    if tree.exists(path) {
        tree.delete(path)?;
        ui::info(format!("Deleted {path}"));
    } else {
        ui::info(format!("{path} not present, nothing to delete"));
    }
    Ok(())
}

pub fn emit_tailwind_config(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    emit_if_absent(tree, TAILWIND_CONFIG, TAILWIND_CONFIG_BODY)
}

pub fn emit_postcss_config(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    emit_if_absent(tree, POSTCSS_CONFIG, POSTCSS_CONFIG_BODY)
}

/// Emit the theme helper service, representing its directory first
///
/// The tree has no mkdir primitive, so an absent services directory is
/// represented by staging an empty `.gitkeep` inside it.
pub fn emit_theme_service(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    if !tree.exists(SERVICES_DIR) {
        tree.create(SERVICES_KEEP, "")?;
    }
    emit_if_absent(tree, THEME_SERVICE, THEME_SERVICE_BODY)
}

pub fn delete_tailwind_config(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    delete_if_present(tree, TAILWIND_CONFIG)
}

pub fn delete_postcss_config(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    delete_if_present(tree, POSTCSS_CONFIG)
}

/// Delete the theme helper service and its directory placeholder
pub fn delete_theme_service(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    delete_if_present(tree, THEME_SERVICE)?;
    if tree.exists(SERVICES_KEEP) {
        tree.delete(SERVICES_KEEP)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskQueue;
    use tempfile::TempDir;

    fn empty_tree() -> (TempDir, Tree) {
        let temp = TempDir::new().unwrap();
        let tree = Tree::open(temp.path()).unwrap();
        (temp, tree)
    }

    #[test]
    fn test_config_emission_creates_once() {
        let (_temp, mut tree) = empty_tree();
        let mut tasks = TaskQueue::default();
        let mut ctx = RuleCtx { tasks: &mut tasks };

        emit_tailwind_config(&mut tree, &mut ctx).unwrap();
        assert_eq!(
            tree.read(TAILWIND_CONFIG).unwrap().unwrap(),
            TAILWIND_CONFIG_BODY
        );
    }

    #[test]
    fn test_config_emission_never_overwrites() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(TAILWIND_CONFIG), "// hand edited").unwrap();
        let mut tree = Tree::open(temp.path()).unwrap();
        let mut tasks = TaskQueue::default();
        let mut ctx = RuleCtx { tasks: &mut tasks };

        emit_tailwind_config(&mut tree, &mut ctx).unwrap();
        assert_eq!(
            tree.read(TAILWIND_CONFIG).unwrap().unwrap(),
            "// hand edited"
        );
        assert!(tree.is_empty());
    }

    #[test]
    fn test_theme_service_stages_directory_placeholder() {
        let (_temp, mut tree) = empty_tree();
        let mut tasks = TaskQueue::default();
        let mut ctx = RuleCtx { tasks: &mut tasks };

        emit_theme_service(&mut tree, &mut ctx).unwrap();
        assert!(tree.exists(SERVICES_KEEP));
        assert!(tree.exists(THEME_SERVICE));
    }

    #[test]
    fn test_theme_service_skips_placeholder_when_dir_present() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join(SERVICES_DIR)).unwrap();
        std::fs::write(temp.path().join(SERVICES_DIR).join("other.service.ts"), "x").unwrap();
        let mut tree = Tree::open(temp.path()).unwrap();
        let mut tasks = TaskQueue::default();
        let mut ctx = RuleCtx { tasks: &mut tasks };

        emit_theme_service(&mut tree, &mut ctx).unwrap();
        assert!(!tree.exists(SERVICES_KEEP));
        assert!(tree.exists(THEME_SERVICE));
    }

    #[test]
    fn test_delete_is_total_on_absence() {
        let (_temp, mut tree) = empty_tree();
        let mut tasks = TaskQueue::default();
        let mut ctx = RuleCtx { tasks: &mut tasks };

        delete_tailwind_config(&mut tree, &mut ctx).unwrap();
        delete_theme_service(&mut tree, &mut ctx).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_delete_removes_generated_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(TAILWIND_CONFIG), "x").unwrap();
        std::fs::create_dir_all(temp.path().join(SERVICES_DIR)).unwrap();
        std::fs::write(temp.path().join(THEME_SERVICE), "y").unwrap();
        std::fs::write(temp.path().join(SERVICES_KEEP), "").unwrap();
        let mut tree = Tree::open(temp.path()).unwrap();
        let mut tasks = TaskQueue::default();
        let mut ctx = RuleCtx { tasks: &mut tasks };

        delete_tailwind_config(&mut tree, &mut ctx).unwrap();
        delete_theme_service(&mut tree, &mut ctx).unwrap();
        assert!(!tree.exists(TAILWIND_CONFIG));
        assert!(!tree.exists(THEME_SERVICE));
        assert!(!tree.exists(SERVICES_KEEP));
    }
}
