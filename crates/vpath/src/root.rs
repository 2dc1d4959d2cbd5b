//! Root classification for virtual paths.
//!
//! A path's root is the leading substring that identifies its authority,
//! volume, or scheme: `/` for POSIX, `//server/` for UNC, `c:/` for DOS and
//! `file:///` (and friends) for URLs. [`encoded_root_length`] finds where the
//! root ends in a single scan over the raw bytes; everything else in this
//! crate builds on that boundary.

/// Separator used internally once a path's slashes have been normalized.
pub const DIRECTORY_SEPARATOR: char = '/';

const URL_SCHEME_SEPARATOR: &str = "://";

/// Length and provenance of a path's root segment.
///
/// `is_encoded` records that the boundary was found by URL scheme/authority
/// parsing rather than a literal separator or drive-letter scan. Callers that
/// slice the root off a path use [`RootLength::length`]; callers that need to
/// know whether the boundary coincides with a literal `/` (a drive-style URL
/// root like `file:///c:` has no trailing separator) check
/// [`RootLength::is_encoded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RootLength {
    length: usize,
    is_encoded: bool,
}

impl RootLength {
    /// A root found by separator or drive-letter scanning (0 means relative).
    #[must_use]
    pub(crate) fn plain(length: usize) -> Self {
        Self {
            length,
            is_encoded: false,
        }
    }

    /// A root found by URL scheme/authority parsing.
    #[must_use]
    pub(crate) fn encoded(length: usize) -> Self {
        Self {
            length,
            is_encoded: true,
        }
    }

    /// Returns the root length in bytes, regardless of provenance.
    #[must_use]
    pub fn length(self) -> usize {
        self.length
    }

    /// Returns whether the root boundary was derived from URL parsing.
    #[must_use]
    pub fn is_encoded(self) -> bool {
        self.is_encoded
    }

    /// Returns whether the path starts with any absolute component at all.
    #[must_use]
    pub fn is_rooted(self) -> bool {
        self.is_encoded || self.length > 0
    }
}

/// Returns whether a byte is `/` or `\`.
#[must_use]
pub fn is_any_directory_separator(byte: u8) -> bool {
    byte == b'/' || byte == b'\\'
}

#[must_use]
fn is_volume_character(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Finds the end of a drive-volume separator in a file URL, starting at
/// `start`: either a literal `:` or the percent-encoded `%3A`/`%3a`.
fn file_url_volume_separator_end(url: &[u8], start: usize) -> Option<usize> {
    match url.get(start)? {
        b':' => Some(start + 1),
        b'%' if url.get(start + 1) == Some(&b'3') && matches!(url.get(start + 2), Some(b'a' | b'A')) => {
            Some(start + 3)
        }
        _ => None,
    }
}

/// Classifies the root of a path across POSIX, UNC, DOS and URL syntaxes.
///
/// Total over any input, including the empty string; a relative path yields a
/// plain root of length 0. The scan is byte-level: all root-significant
/// characters are ASCII, so multi-byte UTF-8 sequences can never be confused
/// with a boundary.
///
/// ```
/// use vpath::encoded_root_length;
///
/// assert_eq!(encoded_root_length("/etc/hosts").length(), 1);
/// assert_eq!(encoded_root_length("//server/share").length(), 9);
/// assert_eq!(encoded_root_length("c:/dir").length(), 3);
/// assert_eq!(encoded_root_length("c:d").length(), 0);
/// let url = encoded_root_length("file:///c:");
/// assert_eq!(url.length(), 10);
/// assert!(url.is_encoded());
/// ```
#[must_use]
pub fn encoded_root_length(path: &str) -> RootLength {
    let bytes = path.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return RootLength::plain(0);
    }
    let ch0 = bytes[0];

    // POSIX or UNC
    if ch0 == b'/' || ch0 == b'\\' {
        if len == 1 || bytes[1] != ch0 {
            return RootLength::plain(1); // POSIX: "/" (or non-normalized "\")
        }

        return match bytes[2..].iter().position(|&b| b == ch0) {
            // UNC: "//server" or "\\server"
            None => RootLength::plain(len),
            // UNC: "//server/" or "\\server\"
            Some(p) => RootLength::plain(p + 3),
        };
    }

    // DOS
    if is_volume_character(ch0) && len > 1 && bytes[1] == b':' {
        if len == 2 {
            return RootLength::plain(2); // DOS: "c:" (but not "c:d")
        }
        if is_any_directory_separator(bytes[2]) {
            return RootLength::plain(3); // DOS: "c:/" or "c:\"
        }
    }

    // URL
    if let Some(scheme_end) = path.find(URL_SCHEME_SEPARATOR) {
        let authority_start = scheme_end + URL_SCHEME_SEPARATOR.len();
        let Some(authority_length) = path[authority_start..].find('/') else {
            return RootLength::encoded(len); // URL: "file://server", "http://server"
        };

        // URL: "file:///", "file://server/", "file://server/path"
        let authority_end = authority_start + authority_length;

        // For local "file" URLs, include the leading DOS volume (if present).
        // Per RFC 1738, a host of "" or "localhost" means "the machine from
        // which the URL is being interpreted".
        let scheme = &path[..scheme_end];
        let authority = &path[authority_start..authority_end];
        if scheme == "file"
            && (authority.is_empty() || authority == "localhost")
            && len > authority_end + 2
            && is_volume_character(bytes[authority_end + 1])
        {
            if let Some(volume_separator_end) = file_url_volume_separator_end(bytes, authority_end + 2) {
                if volume_separator_end == len {
                    // URL: "file:///c:", "file://localhost/c%3a"
                    // but not "file:///c:d" or "file:///c%3ad"
                    return RootLength::encoded(volume_separator_end);
                }
                if bytes[volume_separator_end] == b'/' {
                    // URL: "file:///c:/", "file://localhost/c%3a/"
                    return RootLength::encoded(volume_separator_end + 1);
                }
            }
        }
        return RootLength::encoded(authority_end + 1); // URL: "file://server/", "http://server/"
    }

    // relative
    RootLength::plain(0)
}

/// Returns the plain root length of a path, the common-case accessor.
#[must_use]
pub fn root_length(path: &str) -> usize {
    encoded_root_length(path).length()
}

/// Returns whether a path starts with a URL scheme (`http://`, `file://`, ...).
#[must_use]
pub fn is_url(path: &str) -> bool {
    encoded_root_length(path).is_encoded()
}

/// Returns whether a path is an absolute disk path (`/`, `c:`, `c:/`, `c:\`,
/// `//server/`).
#[must_use]
pub fn is_rooted_disk_path(path: &str) -> bool {
    let root = encoded_root_length(path);
    !root.is_encoded() && root.length() > 0
}

/// Returns whether a path consists only of a disk path root.
#[must_use]
pub fn is_disk_path_root(path: &str) -> bool {
    let root = encoded_root_length(path);
    !root.is_encoded() && root.length() > 0 && root.length() == path.len()
}

/// Returns whether a path starts with an absolute component of any syntax
/// (`/`, `c:/`, `file://`, ...).
///
/// ```
/// use vpath::path_is_absolute;
///
/// assert!(path_is_absolute("/path/to/file.ext"));
/// assert!(path_is_absolute("c:/path/to/file.ext"));
/// assert!(path_is_absolute("file:///path/to/file.ext"));
/// assert!(!path_is_absolute("path/to/file.ext"));
/// assert!(!path_is_absolute("./path/to/file.ext"));
/// ```
#[must_use]
pub fn path_is_absolute(path: &str) -> bool {
    encoded_root_length(path).is_rooted()
}

/// Returns whether a path begins with a `.` or `..` segment.
#[must_use]
pub fn path_is_relative(path: &str) -> bool {
    let bytes = path.as_bytes();
    if bytes.first() != Some(&b'.') {
        return false;
    }
    let rest = if bytes.get(1) == Some(&b'.') { 2 } else { 1 };
    match bytes.get(rest) {
        None => true,
        Some(&byte) => is_any_directory_separator(byte),
    }
}

/// Returns whether a module specifier names a location rather than a bare
/// package: it starts with `.`/`..`, or is a rooted disk path (a specifier
/// like `C:\foo` is never searched for in package directories).
#[must_use]
pub fn is_external_module_name_relative(module_name: &str) -> bool {
    path_is_relative(module_name) || is_rooted_disk_path(module_name)
}

/// Returns whether a path ends with `/` or `\`.
#[must_use]
pub fn has_trailing_directory_separator(path: &str) -> bool {
    path.as_bytes().last().is_some_and(|&byte| is_any_directory_separator(byte))
}
