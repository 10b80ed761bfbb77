use std::path::Path;

/// Extensions the counter accepts. Matching is ASCII case-insensitive.
const SUPPORTED_EXTENSIONS: [&str; 3] = ["md", "mdx", "txt"];

/// Returns true iff the filename's final extension is a supported one.
///
/// The suffix is taken from the last `.` in the name, so a file named exactly
/// `.md` matches while an extensionless name never does.
pub fn matches(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        SUPPORTED_EXTENSIONS
            .iter()
            .any(|s| ext.eq_ignore_ascii_case(s))
    })
}

/// Extension filter applied to a whole path.
pub fn path_matches(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| matches(&name.to_string_lossy()))
}
