use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use crate::browser::arena::NameArena;

/// Name of the parent-directory entry every listing starts with.
pub const PARENT_ENTRY: &str = "..";

/// Directory enumeration and classification used by the browser.
pub trait DirectorySource {
    /// Replace the contents of `arena` with the entries of `path`, starting
    /// with [`PARENT_ENTRY`].
    fn list(&self, path: &str, arena: &mut NameArena);

    fn is_directory(&self, path: &str) -> bool;
}

/// [`DirectorySource`] backed by the host filesystem.
///
/// The empty path denotes the filesystem root. Hidden entries are skipped;
/// directories are listed before files, each group sorted case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectory;

impl FsDirectory {
    fn resolve(path: &str) -> &Path {
        if path.is_empty() {
            Path::new("/")
        } else {
            Path::new(path)
        }
    }
}

impl DirectorySource for FsDirectory {
    fn list(&self, path: &str, arena: &mut NameArena) {
        arena.clear();
        arena.push(PARENT_ENTRY);

        let read = match fs::read_dir(Self::resolve(path)) {
            Ok(read) => read,
            Err(e) => {
                tracing::warn!("Cannot list directory '{}': {}", path, e);
                return;
            }
        };

        let mut entries: Vec<(bool, String)> = read
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                if name.starts_with('.') {
                    return None;
                }
                let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                Some((is_dir, name))
            })
            .collect();
        entries.sort_by(|a, b| match b.0.cmp(&a.0) {
            Ordering::Equal => a.1.to_lowercase().cmp(&b.1.to_lowercase()),
            other => other,
        });

        let total = entries.len();
        let stored = entries
            .iter()
            .take_while(|(_, name)| arena.push(name))
            .count();
        if stored < total {
            tracing::warn!(
                "Directory '{}' truncated: {} of {} entries listed",
                path,
                stored,
                total
            );
        }
    }

    fn is_directory(&self, path: &str) -> bool {
        Self::resolve(path).is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_parent_then_dirs_then_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.gba"), b"").unwrap();
        fs::write(dir.path().join("A.gb"), b"").unwrap();
        fs::write(dir.path().join(".hidden"), b"").unwrap();
        fs::create_dir(dir.path().join("saves")).unwrap();

        let mut arena = NameArena::new();
        FsDirectory.list(dir.path().to_str().unwrap(), &mut arena);

        assert_eq!(
            arena.iter().collect::<Vec<_>>(),
            vec!["..", "saves", "A.gb", "b.gba"]
        );
    }

    #[test]
    fn missing_directory_lists_only_parent() {
        let mut arena = NameArena::new();
        arena.push("stale");
        FsDirectory.list("/definitely/not/here", &mut arena);
        assert_eq!(arena.iter().collect::<Vec<_>>(), vec![".."]);
    }

    #[test]
    fn empty_path_is_root() {
        assert!(FsDirectory.is_directory(""));
    }
}
