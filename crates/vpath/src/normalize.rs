//! Separator normalization, textual joining and `.`/`..` reduction.
//!
//! All operations are lexical: nothing here touches a real filesystem. Paths
//! use `/` as the sole separator once normalized, and a path's components are
//! the ordered sequence `[root, seg1, seg2, ...]` where the root may be empty
//! for a relative path.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::{
    compare::{equate_strings_case_insensitive, equate_strings_case_sensitive},
    root::{has_trailing_directory_separator, root_length},
};

/// Component lists are almost always short; keep them inline.
pub(crate) type PathParts<'a> = SmallVec<[&'a str; 16]>;

/// Replaces every `\` with `/`. Returns the input unchanged (borrowed) when it
/// contains no backslash.
#[must_use]
pub fn normalize_slashes(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Combines paths textually. A rooted path replaces everything accumulated
/// before it; empty parts are skipped; `.`/`..` segments are not simplified.
///
/// ```
/// use vpath::combine_paths;
///
/// assert_eq!(combine_paths("path", &["to", "file.ext"]), "path/to/file.ext");
/// assert_eq!(combine_paths("path", &["dir", "..", "to", "file.ext"]), "path/dir/../to/file.ext");
/// assert_eq!(combine_paths("/path", &["/to", "file.ext"]), "/to/file.ext");
/// assert_eq!(combine_paths("c:/path", &["c:/to", "file.ext"]), "c:/to/file.ext");
/// assert_eq!(combine_paths("file:///path", &["file:///to", "file.ext"]), "file:///to/file.ext");
/// ```
#[must_use]
pub fn combine_paths(first_path: &str, paths: &[&str]) -> String {
    let mut result = normalize_slashes(first_path).into_owned();

    for &trailing_path in paths {
        if trailing_path.is_empty() {
            continue;
        }
        let trailing_path = normalize_slashes(trailing_path);
        if result.is_empty() || root_length(&trailing_path) != 0 {
            // `trailing_path` is rooted and replaces the accumulated result.
            result = trailing_path.into_owned();
        } else {
            if !has_trailing_directory_separator(&result) {
                result.push('/');
            }
            result.push_str(&trailing_path);
        }
    }
    result
}

/// Detects `//` and `.`/`..` segments (bounded by start, end or `/`) in a
/// slash-normalized path. Paths without any of these need no reduction, which
/// is the common case on resolution hot paths.
#[must_use]
pub fn has_relative_path_segments(path: &str) -> bool {
    let bytes = path.as_bytes();
    let len = bytes.len();
    let mut segment_start = 0;
    for i in 0..=len {
        if i == len || bytes[i] == b'/' {
            let segment = &bytes[segment_start..i];
            // an empty segment between two separators is a `//`
            let doubled = i < len && i == segment_start && segment_start > 0;
            if doubled || segment == b"." || segment == b".." {
                return true;
            }
            segment_start = i + 1;
        }
    }
    false
}

/// Normalizes slashes and collapses `.`/`..` segments without consulting the
/// filesystem. Idempotent.
///
/// A relative path may keep leading `..` segments (there is nothing to pop
/// them into), while an absolute path clamps `..` at its root.
///
/// ```
/// use vpath::normalize_path;
///
/// assert_eq!(normalize_path("/a/b/../c/./d"), "/a/c/d");
/// assert_eq!(normalize_path("../../a"), "../../a");
/// assert_eq!(normalize_path("a\\b\\c"), "a/b/c");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let path = normalize_slashes(path);
    // Most paths don't require normalization
    if !has_relative_path_segments(&path) {
        return path.into_owned();
    }
    // Some paths only require cleanup of `/./` or a leading `./`
    let mut simplified = path.replace("/./", "/");
    if let Some(stripped) = simplified.strip_prefix("./") {
        simplified = stripped.to_owned();
    }
    if simplified != *path && !has_relative_path_segments(&simplified) {
        return simplified;
    }
    // Other paths require full reduction
    let normalized = join_parts(&reduced_components(&path));
    if !normalized.is_empty() && has_trailing_directory_separator(&path) {
        ensure_trailing_directory_separator(&normalized).into_owned()
    } else {
        normalized
    }
}

/// Combines and resolves paths: a rooted later path replaces earlier ones, and
/// `.`/`..` segments are collapsed. Trailing separators are preserved.
#[must_use]
pub fn resolve_path(path: &str, paths: &[&str]) -> String {
    let combined = if paths.is_empty() {
        normalize_slashes(path).into_owned()
    } else {
        combine_paths(path, paths)
    };
    normalize_path(&combined)
}

/// Splits a path into `[root, seg1, seg2, ...]` after combining it with
/// `current_directory`. A trailing separator produces no trailing empty
/// component.
#[must_use]
pub fn get_path_components(path: &str, current_directory: &str) -> Vec<String> {
    let path = combine_paths(current_directory, &[path]);
    let root_length = root_length(&path);
    path_components(&path, root_length)
}

fn path_components(path: &str, root_length: usize) -> Vec<String> {
    let root = &path[..root_length];
    let mut rest: Vec<&str> = path[root_length..].split('/').collect();
    if rest.last() == Some(&"") {
        rest.pop();
    }
    let mut components = Vec::with_capacity(rest.len() + 1);
    components.push(root.to_owned());
    components.extend(rest.into_iter().map(str::to_owned));
    components
}

/// Splits a slash-normalized path into its root and reduced segments, borrowed
/// from the input. Empty and `.` segments are dropped; `..` pops the previous
/// segment unless that segment is itself `..`, or the path is relative and has
/// nothing left to pop (leading `..` then accumulates).
pub(crate) fn reduced_components(path: &str) -> PathParts<'_> {
    let root_length = root_length(path);
    let mut parts = PathParts::new();
    parts.push(&path[..root_length]);

    for segment in path[root_length..].split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            if parts.len() > 1 {
                if parts.last() != Some(&"..") {
                    parts.pop();
                    continue;
                }
            } else if !parts[0].is_empty() {
                // absolute: clamp `..` at the root
                continue;
            }
        }
        parts.push(segment);
    }
    parts
}

/// Combines with `current_directory` and reduces: the component form of
/// [`get_normalized_absolute_path`].
#[must_use]
pub fn get_normalized_path_components(path: &str, current_directory: &str) -> Vec<String> {
    let combined = combine_paths(current_directory, &[path]);
    reduced_components(&combined).iter().map(|&s| s.to_owned()).collect()
}

/// Joins `[root, seg1, seg2, ...]` back into a path string. A non-empty root
/// gets a trailing separator; segments are joined with `/`.
#[must_use]
pub fn get_path_from_path_components<S: AsRef<str>>(components: &[S]) -> String {
    let parts: PathParts<'_> = components.iter().map(|component| component.as_ref()).collect();
    join_parts(&parts)
}

fn join_parts(parts: &[&str]) -> String {
    let Some((&root, rest)) = parts.split_first() else {
        return String::new();
    };
    let mut result = String::with_capacity(root.len() + 1 + rest.iter().map(|s| s.len() + 1).sum::<usize>());
    result.push_str(root);
    if !root.is_empty() && !has_trailing_directory_separator(root) {
        result.push('/');
    }
    for (i, segment) in rest.iter().enumerate() {
        if i > 0 {
            result.push('/');
        }
        result.push_str(segment);
    }
    result
}

/// Resolves a file name against a directory and normalizes the result.
#[must_use]
pub fn get_normalized_absolute_path(file_name: &str, current_directory: &str) -> String {
    let combined = combine_paths(current_directory, &[file_name]);
    join_parts(&reduced_components(&combined))
}

/// Appends a `/` when the path does not already end with a separator.
#[must_use]
pub fn ensure_trailing_directory_separator(path: &str) -> Cow<'_, str> {
    if has_trailing_directory_separator(path) {
        Cow::Borrowed(path)
    } else {
        let mut owned = String::with_capacity(path.len() + 1);
        owned.push_str(path);
        owned.push('/');
        Cow::Owned(owned)
    }
}

/// Strips a single trailing `/` or `\`, if present.
#[must_use]
pub fn remove_trailing_directory_separator(path: &str) -> &str {
    if has_trailing_directory_separator(path) {
        &path[..path.len() - 1]
    } else {
        path
    }
}

/// Returns the directory portion of a path: everything up to, but not
/// including, the last non-terminal separator. A path that is only a root is
/// its own directory, which makes this the fixed point of ancestor walks.
///
/// ```
/// use vpath::get_directory_path;
///
/// assert_eq!(get_directory_path("/a/b/c"), "/a/b");
/// assert_eq!(get_directory_path("/a/"), "/a");
/// assert_eq!(get_directory_path("/"), "/");
/// assert_eq!(get_directory_path("file:///c:/x"), "file:///c:/");
/// ```
#[must_use]
pub fn get_directory_path(path: &str) -> String {
    let path = normalize_slashes(path);

    // If the path provided is itself a root, then return it.
    let root_length = root_length(&path);
    if root_length == path.len() {
        return path.into_owned();
    }

    let path = remove_trailing_directory_separator(&path);
    let end = path.rfind('/').map_or(root_length, |i| i.max(root_length));
    path[..end].to_owned()
}

/// Returns the portion of a path after the last non-terminal separator, with
/// URL support. A bare root has no base name.
///
/// ```
/// use vpath::get_base_file_name;
///
/// assert_eq!(get_base_file_name("/path/to/file.ext"), "file.ext");
/// assert_eq!(get_base_file_name("/path/to/"), "to");
/// assert_eq!(get_base_file_name("c:/"), "");
/// assert_eq!(get_base_file_name("http://server/a/b"), "b");
/// assert_eq!(get_base_file_name("file:///"), "");
/// ```
#[must_use]
pub fn get_base_file_name(path: &str) -> String {
    let path = normalize_slashes(path);

    // if the path provided is itself the root, then it has no file name.
    let root_length = root_length(&path);
    if root_length == path.len() {
        return String::new();
    }

    let path = remove_trailing_directory_separator(&path);
    let start = path.rfind('/').map_or(0, |i| i + 1).max(crate::root::root_length(path));
    path[start..].to_owned()
}

/// Returns the extension (from the final `.` onwards) of a path's base name,
/// or the empty string. When `extensions` is non-empty, only those extensions
/// are recognized, equated case-insensitively when `ignore_case` is set.
///
/// ```
/// use vpath::get_any_extension_from_path;
///
/// assert_eq!(get_any_extension_from_path("/path/to/file.ext", &[], false), ".ext");
/// assert_eq!(get_any_extension_from_path("/path/to.ext/file", &[], false), "");
/// assert_eq!(get_any_extension_from_path("/path/to/file.js", &[".ext"], true), "");
/// assert_eq!(get_any_extension_from_path("/path/to/file.js", &[".ext", ".js"], true), ".js");
/// assert_eq!(get_any_extension_from_path("/path/to/file.ext", &[".EXT"], false), "");
/// ```
#[must_use]
pub fn get_any_extension_from_path(path: &str, extensions: &[&str], ignore_case: bool) -> String {
    if !extensions.is_empty() {
        let equate = if ignore_case {
            equate_strings_case_insensitive
        } else {
            equate_strings_case_sensitive
        };
        return get_any_extension_from_path_worker(remove_trailing_directory_separator(path), extensions, equate);
    }

    let base_file_name = get_base_file_name(path);
    base_file_name
        .rfind('.')
        .map_or_else(String::new, |i| base_file_name[i..].to_owned())
}

fn get_any_extension_from_path_worker(
    path: &str,
    extensions: &[&str],
    equate: fn(&str, &str) -> bool,
) -> String {
    for extension in extensions {
        let result = try_get_extension_from_path(path, extension, equate);
        if !result.is_empty() {
            return result;
        }
    }
    String::new()
}

fn try_get_extension_from_path(path: &str, extension: &str, equate: fn(&str, &str) -> bool) -> String {
    let extension = if extension.starts_with('.') {
        Cow::Borrowed(extension)
    } else {
        Cow::Owned(format!(".{extension}"))
    };
    if path.len() >= extension.len() {
        let start = path.len() - extension.len();
        // a `.` at the candidate start is ASCII, so the slice below is on a
        // character boundary
        if path.as_bytes()[start] == b'.' {
            let path_extension = &path[start..];
            if equate(path_extension, &extension) {
                return path_extension.to_owned();
            }
        }
    }
    String::new()
}

/// Returns whether a path ends with the given extension, compared exactly.
#[must_use]
pub fn file_extension_is(path: &str, extension: &str) -> bool {
    path.len() > extension.len() && path.ends_with(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slashes() {
        assert_eq!(normalize_slashes("a\\b\\c"), "a/b/c");
        assert_eq!(normalize_slashes("a/b"), "a/b");
        assert!(matches!(normalize_slashes("a/b"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_combine_paths() {
        assert_eq!(combine_paths("", &[]), "");
        assert_eq!(combine_paths("path", &["to", "file.ext"]), "path/to/file.ext");
        assert_eq!(combine_paths("/path", &["to", "file.ext"]), "/path/to/file.ext");
        assert_eq!(combine_paths("/path", &["/to", "file.ext"]), "/to/file.ext");
        assert_eq!(combine_paths("/path/", &["to"]), "/path/to");
        assert_eq!(combine_paths("c:\\path", &["to"]), "c:/path/to");
        assert_eq!(combine_paths("", &["/abs", "rel"]), "/abs/rel");
        assert_eq!(combine_paths("a", &["", "b"]), "a/b");
    }

    #[test]
    fn test_has_relative_path_segments() {
        assert!(has_relative_path_segments("a//b"));
        assert!(has_relative_path_segments("//server/x"));
        assert!(has_relative_path_segments("./a"));
        assert!(has_relative_path_segments("a/./b"));
        assert!(has_relative_path_segments("a/.."));
        assert!(has_relative_path_segments(".."));
        assert!(has_relative_path_segments("."));
        assert!(!has_relative_path_segments(""));
        assert!(!has_relative_path_segments("/"));
        assert!(!has_relative_path_segments("/a/b"));
        assert!(!has_relative_path_segments("a/b/"));
        assert!(!has_relative_path_segments("a.b/..c/.d."));
        assert!(!has_relative_path_segments("...three"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/a/b/../c/./d"), "/a/c/d");
        assert_eq!(normalize_path("a/b/c"), "a/b/c");
        assert_eq!(normalize_path("a\\b"), "a/b");
        assert_eq!(normalize_path("/a//b"), "/a/b");
        assert_eq!(normalize_path("./a/b"), "a/b");
        assert_eq!(normalize_path("/a/./b"), "/a/b");
        assert_eq!(normalize_path("/a/.."), "/");
        assert_eq!(normalize_path("a/.."), "");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_normalize_path_relative_dotdot_accumulates() {
        // relative paths keep leading `..`; absolute paths clamp at the root
        assert_eq!(normalize_path("../../a"), "../../a");
        assert_eq!(normalize_path("../a/../../b"), "../../b");
        assert_eq!(normalize_path("/../../a"), "/a");
        assert_eq!(normalize_path("c:/../a"), "c:/a");
        assert_eq!(normalize_path("c:/.."), "c:/");
    }

    #[test]
    fn test_normalize_path_trailing_separator() {
        assert_eq!(normalize_path("/a/b/../c/"), "/a/c/");
        assert_eq!(normalize_path("a/b/"), "a/b/");
        assert_eq!(normalize_path("a/../"), "");
    }

    #[test]
    fn test_normalize_path_unc() {
        assert_eq!(normalize_path("//server/share/./x"), "//server/share/x");
        assert_eq!(normalize_path("//server/share/a/../b"), "//server/share/b");
    }

    #[test]
    fn test_normalize_path_idempotent() {
        for path in [
            "/a/b/../c/./d", "../../a", "a//b", "//server/share/./x", "c:\\x\\..\\y", "file:///c:/a/../b", "", ".",
            "./", "/a/b/", "a/../..",
        ] {
            let once = normalize_path(path);
            assert_eq!(normalize_path(&once), once, "not idempotent for {path:?}");
        }
    }

    #[test]
    fn test_get_path_components() {
        assert_eq!(get_path_components("/a/b/c", ""), ["/", "a", "b", "c"]);
        assert_eq!(get_path_components("/a/b/c/", ""), ["/", "a", "b", "c"]);
        assert_eq!(get_path_components("c:/a", ""), ["c:/", "a"]);
        assert_eq!(get_path_components("c:", ""), ["c:"]);
        assert_eq!(get_path_components("a/b", "/root"), ["/", "root", "a", "b"]);
        assert_eq!(get_path_components("", ""), [""]);
        // internal empty segments survive; only the trailing one is dropped
        assert_eq!(get_path_components("/a//b", ""), ["/", "a", "", "b"]);
    }

    #[test]
    fn test_components_round_trip() {
        for path in ["/a/b/c", "c:/x/y", "//server/share/f", "file:///c:/m", "rel/seg", ""] {
            let normalized = normalize_path(path);
            let components = get_path_components(&normalized, "");
            assert_eq!(get_path_from_path_components(&components), normalized);
        }
    }

    #[test]
    fn test_get_path_from_path_components() {
        assert_eq!(get_path_from_path_components::<String>(&[]), "");
        assert_eq!(get_path_from_path_components(&["/", "a", "b"]), "/a/b");
        assert_eq!(get_path_from_path_components(&["", "a", "b"]), "a/b");
        assert_eq!(get_path_from_path_components(&["c:/"]), "c:/");
        assert_eq!(get_path_from_path_components(&["", "..", "x"]), "../x");
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(resolve_path("/path", &["to", "file.ext"]), "/path/to/file.ext");
        assert_eq!(resolve_path("/path", &["to", "file.ext/"]), "/path/to/file.ext/");
        assert_eq!(resolve_path("/path", &["dir", "..", "to", "file.ext"]), "/path/to/file.ext");
        assert_eq!(resolve_path("a\\b", &[]), "a/b");
    }

    #[test]
    fn test_get_normalized_absolute_path() {
        assert_eq!(get_normalized_absolute_path("b/../c", "/a"), "/a/c");
        assert_eq!(get_normalized_absolute_path("/x/./y", "/a"), "/x/y");
        assert_eq!(get_normalized_absolute_path("file.ext", "c:/dir"), "c:/dir/file.ext");
    }

    #[test]
    fn test_trailing_separator_helpers() {
        assert_eq!(ensure_trailing_directory_separator("/a"), "/a/");
        assert_eq!(ensure_trailing_directory_separator("/a/"), "/a/");
        assert_eq!(remove_trailing_directory_separator("/a/"), "/a");
        assert_eq!(remove_trailing_directory_separator("/a"), "/a");
        assert_eq!(remove_trailing_directory_separator("a\\"), "a");
    }

    #[test]
    fn test_get_directory_path() {
        assert_eq!(get_directory_path("/a/b/c"), "/a/b");
        assert_eq!(get_directory_path("/a"), "/");
        assert_eq!(get_directory_path("/"), "/");
        assert_eq!(get_directory_path("c:/a/b"), "c:/a");
        assert_eq!(get_directory_path("c:/a"), "c:/");
        assert_eq!(get_directory_path("c:/"), "c:/");
        assert_eq!(get_directory_path("//server/share/x"), "//server/share");
        assert_eq!(get_directory_path("//server/"), "//server/");
        assert_eq!(get_directory_path("file:///c:/a"), "file:///c:/");
        assert_eq!(get_directory_path("a"), "");
        assert_eq!(get_directory_path(""), "");
    }

    #[test]
    fn test_get_base_file_name() {
        assert_eq!(get_base_file_name("/path/to/file.ext"), "file.ext");
        assert_eq!(get_base_file_name("/path/to/"), "to");
        assert_eq!(get_base_file_name("/"), "");
        assert_eq!(get_base_file_name("c:/path/to/file.ext"), "file.ext");
        assert_eq!(get_base_file_name("c:"), "");
        assert_eq!(get_base_file_name("http://server/path/to/file.ext"), "file.ext");
        assert_eq!(get_base_file_name("http://server/"), "");
        assert_eq!(get_base_file_name("http://server"), "");
        assert_eq!(get_base_file_name("file:///"), "");
        assert_eq!(get_base_file_name("file://"), "");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(get_any_extension_from_path("/path/to/file.ext", &[], false), ".ext");
        assert_eq!(get_any_extension_from_path("/path/to/file.ext/", &[], false), ".ext");
        assert_eq!(get_any_extension_from_path("/path/to/file", &[], false), "");
        assert_eq!(get_any_extension_from_path("/path/to.ext/file", &[], false), "");
        assert_eq!(get_any_extension_from_path("/path/to/file.ext", &[".ext"], true), ".ext");
        assert_eq!(get_any_extension_from_path("/path/to/file.ext", &["ext"], true), ".ext");
        assert_eq!(get_any_extension_from_path("/path/to/file.js", &[".ext"], true), "");
        assert_eq!(get_any_extension_from_path("/path/to/file.js", &[".ext", ".js"], true), ".js");
        assert_eq!(get_any_extension_from_path("/path/to/file.EXT", &[".ext"], true), ".EXT");
        assert_eq!(get_any_extension_from_path("/path/to/file.ext", &[".EXT"], false), "");

        assert!(file_extension_is("/a/b.ts", ".ts"));
        assert!(!file_extension_is("/a/b.ts", ".d.ts"));
        assert!(!file_extension_is(".ts", ".ts"));
    }
}
