#![doc = include_str!("../../../README.md")]

mod canonical;
mod compare;
mod normalize;
mod relative;
mod root;

pub use crate::{
    canonical::{
        CanonicalPath, CaseSensitivity, get_canonical_file_name, to_canonical_path, to_file_name_lower_case,
    },
    compare::{
        ComparePathsOptions, compare_paths, compare_paths_case_insensitive, compare_paths_case_sensitive,
        compare_strings_case_insensitive, compare_strings_case_sensitive, contains_path,
        equate_strings_case_insensitive, equate_strings_case_sensitive,
    },
    normalize::{
        combine_paths, ensure_trailing_directory_separator, file_extension_is, get_any_extension_from_path,
        get_base_file_name, get_directory_path, get_normalized_absolute_path, get_normalized_path_components,
        get_path_components, get_path_from_path_components, has_relative_path_segments, normalize_path,
        normalize_slashes, remove_trailing_directory_separator, resolve_path,
    },
    relative::{
        convert_to_relative_path, for_each_ancestor_directory, get_path_components_relative_to,
        get_relative_path_from_directory, get_relative_path_to_directory_or_url,
    },
    root::{
        DIRECTORY_SEPARATOR, RootLength, encoded_root_length, has_trailing_directory_separator,
        is_any_directory_separator, is_disk_path_root, is_external_module_name_relative, is_rooted_disk_path,
        is_url, path_is_absolute, path_is_relative, root_length,
    },
};
