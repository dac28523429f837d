//! Scan-based adapter loading: executable files in the plugin directory.

use std::{
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use super::error::DispatchError;

/// Finds notifier plugins: regular files under `dir` whose name ends in
/// `suffix` and which carry an execute permission bit.
///
/// A missing directory yields an empty set; running without any plugins
/// installed is a normal deployment state. Results are sorted so log output
/// is stable; invocation order carries no contract.
pub fn discover_scripts(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, DispatchError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(DispatchError::Scan { path: dir.to_path_buf(), source }),
    };

    let mut scripts = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|source| DispatchError::Scan { path: dir.to_path_buf(), source })?;
        let path = entry.path();
        let named_like_plugin =
            path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.ends_with(suffix));
        if !named_like_plugin {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() || metadata.permissions().mode() & 0o111 == 0 {
            continue;
        }
        scripts.push(path);
    }
    scripts.sort();
    Ok(scripts)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(path: &Path, mode: u32) {
        fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn finds_only_executable_files_with_the_suffix() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("notify-a.sh"), 0o755);
        touch(&dir.path().join("notify-b.sh"), 0o644); // not executable
        touch(&dir.path().join("notes.txt"), 0o755); // wrong suffix
        fs::create_dir(dir.path().join("subdir.sh")).unwrap(); // not a file

        let scripts = discover_scripts(dir.path(), ".sh").unwrap();
        assert_eq!(scripts, vec![dir.path().join("notify-a.sh")]);
    }

    #[test]
    fn missing_directory_is_an_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let scripts = discover_scripts(&dir.path().join("absent"), ".sh").unwrap();
        assert!(scripts.is_empty());
    }

    #[test]
    fn results_are_sorted_for_stable_logs() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.sh"), 0o755);
        touch(&dir.path().join("a.sh"), 0o755);

        let scripts = discover_scripts(dir.path(), ".sh").unwrap();
        assert_eq!(scripts, vec![dir.path().join("a.sh"), dir.path().join("b.sh")]);
    }
}
