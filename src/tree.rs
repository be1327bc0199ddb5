//! Staged file tree over an Angular project root
//!
//! All rule mutations are staged in memory and applied to disk in one
//! `commit` pass at the end of a run. Files that a commit overwrites or
//! deletes are backed up first; if any write fails, every already-applied
//! operation is rolled back and the error is returned, so a run either
//! lands completely or leaves the project untouched.
//!
//! Paths are project-root-relative. A leading slash is accepted and
//! normalized away, so `/src/styles.css` and `src/styles.css` address the
//! same entry. There is no mkdir primitive: directories are inferred from
//! file paths, and an empty directory is represented by a placeholder file
//! staged inside it.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TailgraftError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Staged {
    Create(String),
    Overwrite(String),
    Delete,
}

/// Kind of staged change, for dry-run listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Overwrite,
    Delete,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Create => write!(f, "create"),
            ChangeKind::Overwrite => write!(f, "update"),
            ChangeKind::Delete => write!(f, "delete"),
        }
    }
}

/// Staged view of a project directory
#[derive(Debug)]
pub struct Tree {
    root: PathBuf,
    staged: BTreeMap<String, Staged>,
}

impl Tree {
    /// Open a tree over an existing project root
    pub fn open(root: &Path) -> Result<Self> {
        let root = dunce::canonicalize(root).map_err(|e| TailgraftError::FileReadFailed {
            path: root.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            root,
            staged: BTreeMap::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn normalize(path: &str) -> String {
        path.trim_start_matches('/').to_string()
    }

    fn disk_path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Whether a file (or a directory containing staged or on-disk files)
    /// exists at `path`, staged state shadowing disk state
    pub fn exists(&self, path: &str) -> bool {
        let rel = Self::normalize(path);
        match self.staged.get(&rel) {
            Some(Staged::Delete) => return false,
            Some(_) => return true,
            None => {}
        }
        let prefix = format!("{rel}/");
        let staged_below = self
            .staged
            .iter()
            .any(|(k, op)| k.starts_with(&prefix) && *op != Staged::Delete);
        staged_below || self.disk_path(&rel).exists()
    }

    /// Read the current (staged or on-disk) content of a file
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn read(&self, path: &str) -> Result<Option<String>> {
        let rel = Self::normalize(path);
        match self.staged.get(&rel) {
            Some(Staged::Create(content) | Staged::Overwrite(content)) => {
                return Ok(Some(content.clone()));
            }
            Some(Staged::Delete) => return Ok(None),
            None => {}
        }
        let disk = self.disk_path(&rel);
        if !disk.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&disk).map_err(|e| TailgraftError::FileReadFailed {
            path: rel,
            reason: e.to_string(),
        })?;
        Ok(Some(content))
    }

    /// Stage creation of a new file
    pub fn create(&mut self, path: &str, content: &str) -> Result<()> {
        let rel = Self::normalize(path);
        match self.staged.get(&rel) {
            // A staged delete followed by a create is an overwrite of the
            // on-disk file.
            Some(Staged::Delete) => {
                self.staged.insert(rel, Staged::Overwrite(content.to_string()));
                return Ok(());
            }
            Some(_) => {
                return Err(TailgraftError::PathAlreadyExists { path: rel });
            }
            None => {}
        }
        if self.disk_path(&rel).exists() {
            return Err(TailgraftError::PathAlreadyExists { path: rel });
        }
        self.staged.insert(rel, Staged::Create(content.to_string()));
        Ok(())
    }

    /// Stage replacement of an existing file's content
    pub fn overwrite(&mut self, path: &str, content: &str) -> Result<()> {
        let rel = Self::normalize(path);
        match self.staged.get(&rel) {
            Some(Staged::Create(_)) => {
                self.staged.insert(rel, Staged::Create(content.to_string()));
                return Ok(());
            }
            Some(Staged::Overwrite(_)) => {
                self.staged.insert(rel, Staged::Overwrite(content.to_string()));
                return Ok(());
            }
            Some(Staged::Delete) | None => {}
        }
        if !self.disk_path(&rel).is_file() || self.staged.get(&rel) == Some(&Staged::Delete) {
            return Err(TailgraftError::FileNotFound { path: rel });
        }
        self.staged.insert(rel, Staged::Overwrite(content.to_string()));
        Ok(())
    }

    /// Stage deletion of an existing file
    pub fn delete(&mut self, path: &str) -> Result<()> {
        let rel = Self::normalize(path);
        match self.staged.get(&rel) {
            // The file only ever existed in staging; forget it.
            Some(Staged::Create(_)) => {
                self.staged.remove(&rel);
                return Ok(());
            }
            Some(Staged::Overwrite(_)) => {
                self.staged.insert(rel, Staged::Delete);
                return Ok(());
            }
            Some(Staged::Delete) => {
                return Err(TailgraftError::FileNotFound { path: rel });
            }
            None => {}
        }
        if !self.disk_path(&rel).is_file() {
            return Err(TailgraftError::FileNotFound { path: rel });
        }
        self.staged.insert(rel, Staged::Delete);
        Ok(())
    }

    /// Staged changes in path order, for dry-run listings
    pub fn changes(&self) -> Vec<(String, ChangeKind)> {
        self.staged
            .iter()
            .map(|(path, op)| {
                let kind = match op {
                    Staged::Create(_) => ChangeKind::Create,
                    Staged::Overwrite(_) => ChangeKind::Overwrite,
                    Staged::Delete => ChangeKind::Delete,
                };
                (path.clone(), kind)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Apply all staged operations to disk
    ///
    /// Returns the paths that were changed. On failure, already-applied
    /// operations are rolled back from backups taken during the pass.
    pub fn commit(self) -> Result<Vec<String>> {
        let mut applied: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::new();
        let mut changed = Vec::new();

        for (rel, op) in &self.staged {
            let disk = self.disk_path(rel);
            let backup = if disk.is_file() {
                match fs::read(&disk) {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        rollback(&applied);
                        return Err(TailgraftError::FileReadFailed {
                            path: rel.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            } else {
                None
            };

            let result = match op {
                Staged::Create(content) | Staged::Overwrite(content) => {
                    ensure_parent_dir(&disk).and_then(|()| {
                        fs::write(&disk, content).map_err(|e| TailgraftError::FileWriteFailed {
                            path: rel.clone(),
                            reason: e.to_string(),
                        })
                    })
                }
                Staged::Delete => {
                    fs::remove_file(&disk).map_err(|e| TailgraftError::FileWriteFailed {
                        path: rel.clone(),
                        reason: e.to_string(),
                    })
                }
            };

            match result {
                Ok(()) => {
                    applied.push((disk, backup));
                    changed.push(rel.clone());
                }
                Err(e) => {
                    rollback(&applied);
                    return Err(e);
                }
            }
        }

        Ok(changed)
    }
}

/// Ensure parent directory exists for a path
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TailgraftError::FileWriteFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// Best-effort restore of already-applied operations, in reverse order
fn rollback(applied: &[(PathBuf, Option<Vec<u8>>)]) {
    for (path, backup) in applied.iter().rev() {
        let restored = match backup {
            Some(bytes) => fs::write(path, bytes),
            None => match fs::remove_file(path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            },
        };
        if let Err(e) = restored {
            eprintln!("Warning: Failed to restore {}: {}", path.display(), e);
        }
    }
}
