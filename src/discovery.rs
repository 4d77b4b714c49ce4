use std::collections::HashSet;
use std::path::{Path, PathBuf};

use miette::Result;
use walkdir::WalkDir;

use crate::input::GraphFileFormat;
use crate::progress::ProgressReporter;

const SKIPPED_DIRS: &[&str] = &["target", ".git", "node_modules"];

/// Expands CLI paths into the list of graph files to analyse
pub struct GraphDiscovery {
    seen: HashSet<PathBuf>,
    warnings: Vec<String>,
}

impl Default for GraphDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphDiscovery {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            warnings: Vec::new(),
        }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Resolve files, directories and glob patterns into graph files
    ///
    /// Explicitly named files are kept whatever their extension so that an
    /// unsupported format is reported instead of silently skipped. Directory
    /// walks only pick up `.toml` and `.json` files.
    pub fn discover_all(
        &mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in paths {
            let pattern = path.to_string_lossy();
            if pattern.contains(['*', '?', '[']) {
                self.discover_glob(&pattern, &mut files, progress);
                continue;
            }

            if !path.exists() {
                self.warnings
                    .push(format!("Path '{}' does not exist", path.display()));
                continue;
            }

            if path.is_dir() {
                self.discover_in_dir(path, &mut files, progress);
            } else {
                self.record(path.to_path_buf(), &mut files);
            }
        }

        // Sort by path for consistent output
        files.sort();

        Ok(files)
    }

    fn discover_glob(
        &mut self,
        pattern: &str,
        files: &mut Vec<PathBuf>,
        progress: Option<&ProgressReporter>,
    ) {
        match glob::glob(pattern) {
            Ok(paths) => {
                let mut matched = false;
                for path in paths.flatten() {
                    matched = true;
                    if path.is_dir() {
                        self.discover_in_dir(&path, files, progress);
                    } else if GraphFileFormat::from_path(&path).is_some() {
                        self.record(path, files);
                    }
                }
                if !matched {
                    self.warnings
                        .push(format!("Pattern '{pattern}' matched no files"));
                }
            }
            Err(e) => {
                self.warnings
                    .push(format!("Invalid glob pattern '{pattern}': {e}"));
            }
        }
    }

    fn discover_in_dir(
        &mut self,
        dir: &Path,
        files: &mut Vec<PathBuf>,
        progress: Option<&ProgressReporter>,
    ) {
        let found: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name();
                !SKIPPED_DIRS.iter().any(|skipped| name == *skipped)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| GraphFileFormat::from_path(path).is_some())
            .collect();

        for path in found {
            if let Some(p) = progress {
                p.found_graph_file(&path);
            }
            self.record(path, files);
        }
    }

    fn record(&mut self, path: PathBuf, files: &mut Vec<PathBuf>) {
        if self.seen.insert(path.clone()) {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn create_graph_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("cycles/nested")).unwrap();
        fs::create_dir_all(root.join("target")).unwrap();
        fs::write(root.join("cycles/triangle.toml"), "vertices = 3").unwrap();
        fs::write(root.join("cycles/nested/loop.json"), r#"{"vertices": 1}"#).unwrap();
        fs::write(root.join("cycles/notes.md"), "# not a graph").unwrap();
        fs::write(root.join("target/ignored.toml"), "vertices = 1").unwrap();

        temp
    }

    #[test]
    fn test_directory_walk_picks_graph_files() {
        let temp = create_graph_tree();
        let mut discovery = GraphDiscovery::new();

        let files = discovery
            .discover_all(&[temp.path().to_path_buf()], None)
            .unwrap();

        assert_eq!(
            files,
            vec![
                temp.path().join("cycles/nested/loop.json"),
                temp.path().join("cycles/triangle.toml"),
            ]
        );
        assert!(discovery.warnings().is_empty());
    }

    #[test]
    fn test_missing_path_is_a_warning() {
        let mut discovery = GraphDiscovery::new();
        let files = discovery
            .discover_all(&[PathBuf::from("/definitely/not/here")], None)
            .unwrap();

        assert!(files.is_empty());
        assert_eq!(discovery.warnings().len(), 1);
        assert!(discovery.warnings()[0].contains("does not exist"));
    }

    #[test]
    fn test_glob_and_duplicates() {
        let temp = create_graph_tree();
        let pattern = temp.path().join("cycles/*.toml");
        let explicit = temp.path().join("cycles/triangle.toml");
        let mut discovery = GraphDiscovery::new();

        let files = discovery.discover_all(&[pattern, explicit], None).unwrap();

        assert_eq!(files, vec![temp.path().join("cycles/triangle.toml")]);
    }

    #[test]
    fn test_explicit_file_kept_regardless_of_extension() {
        let temp = create_graph_tree();
        let notes = temp.path().join("cycles/notes.md");
        let mut discovery = GraphDiscovery::new();

        let files = discovery.discover_all(&[notes.clone()], None).unwrap();
        assert_eq!(files, vec![notes]);
    }
}
