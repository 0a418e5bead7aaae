use std::path::Path;

use clean_path::Clean;

/// Absolute path of the filesystem root.
pub const ROOT: &str = "/";

/// Iterate over the non-empty segments of a `/` separated path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Resolve `target` against `current` without touching the filesystem.
///
/// Absolute targets start over from the root, relative ones from `current`.
/// `.` segments are dropped and `..` pops a segment, never climbing above the
/// root. A bare `.` hands `current` back exactly as it was given.
pub fn normalize(current: &str, target: &str) -> String {
    if target == "." {
        return current.to_owned();
    }

    Path::new(ROOT)
        .join(current)
        .join(target)
        .clean()
        .to_string_lossy()
        .into_owned()
}

/// User facing rendering of a path, with the root shown as `~`.
pub fn display(path: &str) -> &str {
    if path == ROOT {
        "~"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_relative_and_absolute() {
        // Arrange
        let cases = [
            ("/", "projects", "/projects"),
            ("/projects", "dream-store.txt", "/projects/dream-store.txt"),
            ("/projects", "/experience", "/experience"),
            ("/projects", "../experience/", "/experience"),
            ("/", "//projects//", "/projects"),
            ("/experience", "./FirstByte.txt", "/experience/FirstByte.txt"),
            ("/", "/", "/"),
            ("/projects", "", "/projects"),
            ("/projects/", "./../projects/./mini-shell.txt", "/projects/mini-shell.txt"),
            ("projects", "dream-store.txt", "/projects/dream-store.txt"),
        ];

        for (current, target, expected) in cases {
            // Act
            let result = normalize(current, target);

            // Assert
            assert_eq!(result, expected, "normalize({current:?}, {target:?})");
        }
    }

    #[test]
    fn test_parent_of_root_is_root() {
        assert_eq!(normalize("/", ".."), "/");
        assert_eq!(normalize("/", "../../.."), "/");
        assert_eq!(normalize("/projects", ".."), "/");
        assert_eq!(normalize("/projects", "../.."), "/");
    }

    #[test]
    fn test_dot_returns_current_unchanged() {
        for current in ["/", "/projects", "/projects/", "not/normalized//"] {
            assert_eq!(normalize(current, "."), current);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(display("/"), "~");
        assert_eq!(display("/experience"), "/experience");
    }
}
