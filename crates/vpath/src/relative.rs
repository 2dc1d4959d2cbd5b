//! Relative-path derivation and upward ancestor traversal.

use crate::{
    compare::{ComparePathsOptions, equate_strings_case_insensitive},
    normalize::{combine_paths, get_directory_path, get_path_from_path_components, reduced_components},
    root::{is_rooted_disk_path, root_length},
};

/// Computes the components of the minimal relative path from `from` to `to`.
///
/// Both inputs are absolutized against the options' current directory and
/// reduced. The shared prefix is found comparing the root case-insensitively
/// and the remaining components under the policy. When nothing is shared,
/// `to`'s own components are returned unchanged (no amount of `..` helps
/// across roots); otherwise the result is an empty root component, one `..`
/// per unshared `from` component, then `to`'s unshared components.
#[must_use]
pub fn get_path_components_relative_to(from: &str, to: &str, options: &ComparePathsOptions) -> Vec<String> {
    let from = combine_paths(&options.current_directory, &[from]);
    let to = combine_paths(&options.current_directory, &[to]);
    let from_components = reduced_components(&from);
    let to_components = reduced_components(&to);

    let equate = options.equality_comparer();
    let max_common_components = from_components.len().min(to_components.len());
    let mut start = 0;
    while start < max_common_components {
        let from_component = from_components[start];
        let to_component = to_components[start];
        let equal = if start == 0 {
            equate_strings_case_insensitive(from_component, to_component)
        } else {
            equate(from_component, to_component)
        };
        if !equal {
            break;
        }
        start += 1;
    }

    if start == 0 {
        return to_components.iter().map(|&component| component.to_owned()).collect();
    }

    let num_dot_dot_slashes = from_components.len() - start;
    let mut result = Vec::with_capacity(1 + num_dot_dot_slashes + to_components.len() - start);
    // empty root component: the result is relative
    result.push(String::new());
    for _ in 0..num_dot_dot_slashes {
        result.push("..".to_owned());
    }
    for &component in &to_components[start..] {
        result.push(component.to_owned());
    }
    result
}

/// Computes the minimal relative path from a directory to a target.
///
/// ```
/// use vpath::{CaseSensitivity, ComparePathsOptions, get_relative_path_from_directory};
///
/// let options = ComparePathsOptions::new(CaseSensitivity::CaseSensitive, "/");
/// assert_eq!(get_relative_path_from_directory("/a/b", "/a/b/c/d", &options), "c/d");
/// assert_eq!(get_relative_path_from_directory("/a/b/c", "/a/x", &options), "../../x");
/// ```
///
/// # Panics
///
/// Panics when exactly one of the inputs is rooted; mixing an absolute path
/// with a relative one here is a caller bug.
#[must_use]
pub fn get_relative_path_from_directory(from_directory: &str, to: &str, options: &ComparePathsOptions) -> String {
    assert!(
        (root_length(from_directory) > 0) == (root_length(to) > 0),
        "paths must either both be absolute or both be relative"
    );
    let path_components = get_path_components_relative_to(from_directory, to, options);
    get_path_from_path_components(&path_components)
}

/// Rewrites a rooted path as relative to the options' current directory;
/// returns non-rooted input unchanged.
#[must_use]
pub fn convert_to_relative_path(absolute_or_relative_path: &str, options: &ComparePathsOptions) -> String {
    if !is_rooted_disk_path(absolute_or_relative_path) {
        return absolute_or_relative_path.to_owned();
    }
    get_relative_path_to_directory_or_url(&options.current_directory, absolute_or_relative_path, false, options)
}

/// Computes a path from a directory to a target, keeping the target absolute
/// when no prefix is shared. With `is_absolute_path_an_url`, a rooted result
/// is prefixed into a `file://` URL.
#[must_use]
pub fn get_relative_path_to_directory_or_url(
    directory_path_or_url: &str,
    relative_or_absolute_path: &str,
    is_absolute_path_an_url: bool,
    options: &ComparePathsOptions,
) -> String {
    let mut path_components =
        get_path_components_relative_to(directory_path_or_url, relative_or_absolute_path, options);

    if is_absolute_path_an_url {
        if let Some(first_component) = path_components.first_mut() {
            if is_rooted_disk_path(first_component) {
                let prefix = if first_component.starts_with('/') {
                    "file://"
                } else {
                    "file:///"
                };
                *first_component = format!("{prefix}{first_component}");
            }
        }
    }

    get_path_from_path_components(&path_components)
}

/// Walks upward from `directory` through its ancestors, invoking `callback` on
/// each (including `directory` itself), until the callback yields a result.
/// Returns `None` once the root is reached (the directory that is its own
/// parent) without a hit. Purely lexical; no filesystem is consulted.
pub fn for_each_ancestor_directory<T>(directory: &str, mut callback: impl FnMut(&str) -> Option<T>) -> Option<T> {
    let mut directory = directory.to_owned();
    loop {
        if let Some(result) = callback(&directory) {
            return Some(result);
        }

        let parent_path = get_directory_path(&directory);
        if parent_path == directory {
            return None;
        }

        directory = parent_path;
    }
}
