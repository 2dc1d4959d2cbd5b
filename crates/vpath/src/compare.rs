//! Ordering and containment of virtual paths.
//!
//! Comparisons are policy-driven: the caller supplies the case sensitivity of
//! the host filesystem and the current directory used to absolutize relative
//! inputs. Roots are always compared case-insensitively, mirroring drive
//! letter and host name conventions, regardless of the policy.

use std::cmp::Ordering;

use crate::{
    canonical::CaseSensitivity,
    normalize::{combine_paths, has_relative_path_segments, reduced_components},
    root::root_length,
};

/// Returns whether two strings are equal ignoring case, using per-character
/// lower-case folding.
#[must_use]
pub fn equate_strings_case_insensitive(a: &str, b: &str) -> bool {
    a == b || a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}

/// Returns whether two strings are byte-for-byte equal.
#[must_use]
pub fn equate_strings_case_sensitive(a: &str, b: &str) -> bool {
    a == b
}

/// Orders two strings ignoring case, using per-character lower-case folding.
#[must_use]
pub fn compare_strings_case_insensitive(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase))
}

/// Orders two strings byte-for-byte.
#[must_use]
pub fn compare_strings_case_sensitive(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Configuration for path comparison: the case policy and the directory used
/// to absolutize relative inputs. Both are always explicit; there is no
/// implied default policy at the comparison sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComparePathsOptions {
    /// Case behavior of the host filesystem.
    pub case_sensitivity: CaseSensitivity,
    /// Directory against which relative inputs are resolved.
    pub current_directory: String,
}

impl ComparePathsOptions {
    /// Creates options from a policy and a current directory.
    #[must_use]
    pub fn new(case_sensitivity: CaseSensitivity, current_directory: impl Into<String>) -> Self {
        Self {
            case_sensitivity,
            current_directory: current_directory.into(),
        }
    }

    /// Returns the segment ordering function for this policy.
    #[must_use]
    pub fn comparer(&self) -> fn(&str, &str) -> Ordering {
        if self.case_sensitivity.is_case_sensitive() {
            compare_strings_case_sensitive
        } else {
            compare_strings_case_insensitive
        }
    }

    /// Returns the segment equality function for this policy.
    #[must_use]
    pub fn equality_comparer(&self) -> fn(&str, &str) -> bool {
        if self.case_sensitivity.is_case_sensitive() {
            equate_strings_case_sensitive
        } else {
            equate_strings_case_insensitive
        }
    }
}

/// Orders two paths under the given options. Total and consistent with
/// equality: equal canonical paths compare as `Equal`, and swapping the
/// arguments reverses the result.
///
/// ```
/// use std::cmp::Ordering;
/// use vpath::{CaseSensitivity, ComparePathsOptions, compare_paths};
///
/// let insensitive = ComparePathsOptions::new(CaseSensitivity::CaseInsensitive, "");
/// assert_eq!(compare_paths("/A/b", "/a/B", &insensitive), Ordering::Equal);
///
/// let sensitive = ComparePathsOptions::new(CaseSensitivity::CaseSensitive, "");
/// assert_ne!(compare_paths("/A/b", "/a/B", &sensitive), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_paths(a: &str, b: &str, options: &ComparePathsOptions) -> Ordering {
    let a = combine_paths(&options.current_directory, &[a]);
    let b = combine_paths(&options.current_directory, &[b]);

    if a == b {
        return Ordering::Equal;
    }
    if a.is_empty() {
        return Ordering::Less;
    }
    if b.is_empty() {
        return Ordering::Greater;
    }

    // Shortcut: when the roots differ there is no need to reduce anything.
    // Roots are compared case-insensitively regardless of policy.
    let a_root = &a[..root_length(&a)];
    let b_root = &b[..root_length(&b)];
    let result = compare_strings_case_insensitive(a_root, b_root);
    if result != Ordering::Equal {
        return result;
    }

    // Shortcut: no relative segments in either non-root portion means the
    // remainders can be compared directly.
    let a_rest = &a[a_root.len()..];
    let b_rest = &b[b_root.len()..];
    if !has_relative_path_segments(a_rest) && !has_relative_path_segments(b_rest) {
        return options.comparer()(a_rest, b_rest);
    }

    // A relative segment is present: reduce and compare component by
    // component. A strict prefix sorts first.
    let a_components = reduced_components(&a);
    let b_components = reduced_components(&b);
    let shared_length = a_components.len().min(b_components.len());
    let comparer = options.comparer();
    for i in 1..shared_length {
        let result = comparer(a_components[i], b_components[i]);
        if result != Ordering::Equal {
            return result;
        }
    }
    a_components.len().cmp(&b_components.len())
}

/// Orders two paths comparing segments exactly.
#[must_use]
pub fn compare_paths_case_sensitive(a: &str, b: &str, current_directory: &str) -> Ordering {
    compare_paths(a, b, &ComparePathsOptions::new(CaseSensitivity::CaseSensitive, current_directory))
}

/// Orders two paths ignoring segment case.
#[must_use]
pub fn compare_paths_case_insensitive(a: &str, b: &str, current_directory: &str) -> Ordering {
    compare_paths(a, b, &ComparePathsOptions::new(CaseSensitivity::CaseInsensitive, current_directory))
}

/// Returns whether `child` lies within (or equals) `parent` after both are
/// absolutized and reduced. The root component is always compared
/// case-insensitively; the rest follow the policy.
///
/// ```
/// use vpath::{CaseSensitivity, ComparePathsOptions, contains_path};
///
/// let options = ComparePathsOptions::new(CaseSensitivity::CaseSensitive, "");
/// assert!(contains_path("/a/b", "/a/b/c", &options));
/// assert!(!contains_path("/a/b/c", "/a/b", &options));
/// ```
#[must_use]
pub fn contains_path(parent: &str, child: &str, options: &ComparePathsOptions) -> bool {
    let parent = combine_paths(&options.current_directory, &[parent]);
    let child = combine_paths(&options.current_directory, &[child]);
    if parent.is_empty() || child.is_empty() {
        return false;
    }
    if parent == child {
        return true;
    }
    let parent_components = reduced_components(&parent);
    let child_components = reduced_components(&child);
    if child_components.len() < parent_components.len() {
        return false;
    }

    let equate = options.equality_comparer();
    for (i, parent_component) in parent_components.iter().enumerate() {
        let equal = if i == 0 {
            equate_strings_case_insensitive(parent_component, child_components[i])
        } else {
            equate(parent_component, child_components[i])
        };
        if !equal {
            return false;
        }
    }
    true
}
