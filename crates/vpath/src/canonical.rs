//! Canonical lookup keys for case-insensitive path storage.
//!
//! On a case-insensitive volume two spellings of one file must map to one map
//! key. The fold applied here is partial: a handful of characters whose case
//! mappings are ambiguous on real filesystems keep their original case, so
//! that file names legitimately differing only by one of them stay distinct.

use std::{borrow::Cow, fmt};

use crate::{
    normalize::{
        ensure_trailing_directory_separator, get_directory_path, get_normalized_absolute_path, normalize_path,
        remove_trailing_directory_separator,
    },
    relative::for_each_ancestor_directory,
    root::is_rooted_disk_path,
};

/// Case behavior of the host filesystem, supplied by the caller; this crate
/// never inspects the real filesystem to infer it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, serde::Serialize, serde::Deserialize,
)]
pub enum CaseSensitivity {
    /// Paths differing only in case identify the same file.
    #[default]
    CaseInsensitive,
    /// Paths are compared exactly.
    CaseSensitive,
}

impl CaseSensitivity {
    /// Returns whether paths are compared exactly.
    #[must_use]
    pub fn is_case_sensitive(self) -> bool {
        matches!(self, Self::CaseSensitive)
    }
}

/// Characters the file-name fold leaves untouched.
///
/// `a-z`, `0-9`, `\ / : - _ .` and space never participate in case folding and
/// are skipped for performance. Three characters are excluded for correctness:
///
/// - U+0130 (Latin capital I with dot above): its lower-case form `i`+U+0307
///   has its own distinct upper-case form, so folding it would conflate
///   distinct file names;
/// - U+0131 (Latin small dotless i): already lower case, upper-cases to plain
///   `I`;
/// - U+00DF (Latin small sharp s): already lower case.
fn is_fold_exempt(ch: char) -> bool {
    matches!(
        ch,
        'a'..='z' | '0'..='9' | '\\' | '/' | ':' | '-' | '_' | '.' | ' ' | '\u{0130}' | '\u{0131}' | '\u{00DF}'
    )
}

/// Lower-cases a file name for use as a case-insensitive key, leaving the
/// exempt characters (see [`is_fold_exempt`]) untouched. Returns the input
/// unchanged (borrowed) when nothing needs folding.
#[must_use]
pub fn to_file_name_lower_case(file_name: &str) -> Cow<'_, str> {
    if file_name.chars().all(is_fold_exempt) {
        return Cow::Borrowed(file_name);
    }
    let mut lowered = String::with_capacity(file_name.len());
    for ch in file_name.chars() {
        if is_fold_exempt(ch) {
            lowered.push(ch);
        } else {
            lowered.extend(ch.to_lowercase());
        }
    }
    Cow::Owned(lowered)
}

/// Maps a file name to its canonical spelling under the given policy:
/// identity when case-sensitive, the partial fold otherwise.
#[must_use]
pub fn get_canonical_file_name(file_name: &str, case_sensitivity: CaseSensitivity) -> Cow<'_, str> {
    if case_sensitivity.is_case_sensitive() {
        Cow::Borrowed(file_name)
    } else {
        to_file_name_lower_case(file_name)
    }
}

/// A normalized, canonicalized path: the stable identity of a file for map and
/// set lookups. Constructed via [`to_canonical_path`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Wraps an already-canonical string. Prefer [`to_canonical_path`] for raw
    /// input.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the canonical path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps into the canonical path string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the directory portion, which is `self` once the root is
    /// reached.
    #[must_use]
    pub fn get_directory_path(&self) -> Self {
        Self(get_directory_path(&self.0))
    }

    /// Strips a single trailing separator, if present.
    #[must_use]
    pub fn remove_trailing_directory_separator(&self) -> Self {
        Self(remove_trailing_directory_separator(&self.0).to_owned())
    }

    /// Appends a separator when not already present.
    #[must_use]
    pub fn ensure_trailing_directory_separator(&self) -> Self {
        Self(ensure_trailing_directory_separator(&self.0).into_owned())
    }

    /// Walks upward through this path's ancestors until `callback` yields a
    /// result; see [`for_each_ancestor_directory`].
    pub fn for_each_ancestor_directory<T>(&self, mut callback: impl FnMut(&Self) -> Option<T>) -> Option<T> {
        for_each_ancestor_directory(&self.0, |directory| callback(&Self(directory.to_owned())))
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for CanonicalPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<CanonicalPath> for String {
    fn from(path: CanonicalPath) -> Self {
        path.0
    }
}

/// Derives the canonical key for a file name: rooted input is normalized
/// directly, relative input is resolved against `base_path` first, and the
/// result is canonicalized under the policy.
#[must_use]
pub fn to_canonical_path(file_name: &str, base_path: &str, case_sensitivity: CaseSensitivity) -> CanonicalPath {
    let non_canonicalized = if is_rooted_disk_path(file_name) {
        normalize_path(file_name)
    } else {
        get_normalized_absolute_path(file_name, base_path)
    };
    CanonicalPath(get_canonical_file_name(&non_canonicalized, case_sensitivity).into_owned())
}
