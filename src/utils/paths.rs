use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

/// Extension used for every part file
pub const PART_EXTENSION: &str = "txt";

/// Name of the `index`-th part file (1-based), zero-padded to at least two digits
///
/// # Examples
///
/// ```
/// use chat_export_splitter::utils::part_file_name;
///
/// assert_eq!(part_file_name("export", 1), "export_part01.txt");
/// assert_eq!(part_file_name("export", 120), "export_part120.txt");
/// ```
pub fn part_file_name(stem: &str, index: usize) -> String {
    format!("{}_part{:02}.{}", stem, index, PART_EXTENSION)
}

/// Directory and file stem the part files are derived from.
///
/// The directory is the archive's own parent (`.` for a bare file name) and the stem is
/// the file name without its final extension.
pub fn output_location(archive: &Path) -> (PathBuf, String) {
    let dir = match archive.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let stem = archive.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    (dir, stem)
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use chat_export_splitter::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Downloads");
/// // Returns "~/Downloads" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref()).filter(|h| !h.is_empty());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_file_name_padding() {
        assert_eq!(part_file_name("export", 1), "export_part01.txt");
        assert_eq!(part_file_name("export", 10), "export_part10.txt");
        assert_eq!(part_file_name("my chats", 7), "my chats_part07.txt");
    }

    #[test]
    fn test_output_location_with_directory() {
        let (dir, stem) = output_location(Path::new("/data/exports/conversations.json"));
        assert_eq!(dir, PathBuf::from("/data/exports"));
        assert_eq!(stem, "conversations");
    }

    #[test]
    fn test_output_location_bare_file_name() {
        let (dir, stem) = output_location(Path::new("export.json"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(stem, "export");
    }

    #[test]
    fn test_output_location_strips_only_final_extension() {
        let (_, stem) = output_location(Path::new("backup/chat.2024.json"));
        assert_eq!(stem, "chat.2024");

        let (_, stem) = output_location(Path::new("noext"));
        assert_eq!(stem, "noext");
    }

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/Users/testuser/Downloads/export");
        let formatted = format_path_with_tilde_internal(&path, Some("/Users/testuser"));
        assert_eq!(formatted, "~/Downloads/export");

        // Path not under home
        let path2 = PathBuf::from("/opt/local/bin");
        let formatted2 = format_path_with_tilde_internal(&path2, Some("/Users/testuser"));
        assert_eq!(formatted2, "/opt/local/bin");

        // Sibling directory sharing a prefix is not under home
        let path3 = PathBuf::from("/Users/testuser2/x");
        let formatted3 = format_path_with_tilde_internal(&path3, Some("/Users/testuser"));
        assert_eq!(formatted3, "/Users/testuser2/x");

        let path4 = PathBuf::from(".");
        assert_eq!(format_path_with_tilde_internal(&path4, None), ".");
    }
}
