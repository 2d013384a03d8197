//! Normalization of the remote paths before they are inserted in a url.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but the RFC 3986 unreserved characters and the slash.
const RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Normalizes a remote path.
///
/// Runs of slashes are collapsed, the result starts with a single slash and
/// never ends with one. The root folder is therefore the empty string.
/// When `escape` is set, every character outside of `[A-Za-z0-9-._~/]` is percent encoded.
///
/// ```
/// use dropbox::path::format_path;
///
/// assert_eq!(format_path("a//b/", false), "/a/b");
/// assert_eq!(format_path("/", false), "");
/// assert_eq!(format_path("my docs/été.txt", true), "/my%20docs/%C3%A9t%C3%A9.txt");
/// ```
pub fn format_path(path: &str, escape: bool) -> String {
    let mut result = String::with_capacity(path.len() + 1);
    result.push('/');
    for c in path.chars() {
        if c == '/' && result.ends_with('/') {
            continue;
        }
        result.push(c);
    }
    if result.ends_with('/') {
        result.pop();
    }
    if escape {
        utf8_percent_encode(&result, RESERVED).to_string()
    } else {
        result
    }
}

/// Builds the path of a method taking a remote path, like `/files/auto/my%20file.txt`.
///
/// The slash after the root is always present, the root folder is `/metadata/auto/`.
pub(crate) fn method_path(method: &str, root: crate::Root, path: &str) -> String {
    let path = format_path(path, true);
    format!(
        "/{method}/{}/{}",
        root.as_str(),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::{format_path, method_path};
    use crate::Root;
    use rand::seq::SliceRandom;
    use rand::Rng;

    const ALPHABET: &[char] = &['a', 'B', '0', '/', '/', '-', '.', '_', '~', ' ', '%', 'é', '?'];

    fn random_path() -> String {
        let mut rng = rand::thread_rng();
        let size = rng.gen_range(0..32);
        (0..size)
            .map(|_| *ALPHABET.choose(&mut rng).unwrap())
            .collect()
    }

    #[test]
    fn should_collapse_slashes() {
        assert_eq!(format_path("a//b/", false), "/a/b");
        assert_eq!(format_path("///a///b///", false), "/a/b");
        assert_eq!(format_path("/a/b", false), "/a/b");
    }

    #[test]
    fn should_handle_root() {
        assert_eq!(format_path("", false), "");
        assert_eq!(format_path("/", false), "");
        assert_eq!(format_path("////", true), "");
    }

    #[test]
    fn should_escape_reserved_characters() {
        assert_eq!(format_path("/a b/c?d", true), "/a%20b/c%3Fd");
        assert_eq!(format_path("100%", true), "/100%25");
        assert_eq!(format_path("/été", true), "/%C3%A9t%C3%A9");
        assert_eq!(format_path("/a b", false), "/a b");
    }

    #[test]
    fn should_keep_unreserved_characters() {
        let path = "/Photos/2011-07_trip~v1.2/IMG_0001.JPG";
        assert_eq!(format_path(path, true), path);
        assert_eq!(format_path(&format_path(path, true), true), path);
    }

    #[test]
    fn should_build_method_path() {
        assert_eq!(
            method_path("files", Root::Auto, "folder//my file.txt"),
            "/files/auto/folder/my%20file.txt"
        );
        assert_eq!(
            method_path("files_put", Root::Sandbox, "/a/"),
            "/files_put/sandbox/a"
        );
    }

    #[test]
    fn should_keep_separator_for_root_folder() {
        assert_eq!(method_path("metadata", Root::Dropbox, "/"), "/metadata/dropbox/");
        assert_eq!(method_path("metadata", Root::Auto, ""), "/metadata/auto/");
        assert_eq!(method_path("metadata", Root::Sandbox, "///"), "/metadata/sandbox/");
    }

    #[test]
    fn should_normalize_random_paths() {
        for _ in 0..500 {
            let input = random_path();
            for escape in [false, true] {
                let output = format_path(&input, escape);
                assert!(!output.contains("//"), "{input:?} gave {output:?}");
                assert!(!output.ends_with('/'), "{input:?} gave {output:?}");
                assert!(
                    output.is_empty() || output.starts_with('/'),
                    "{input:?} gave {output:?}"
                );
            }
            let escaped = format_path(&input, true);
            assert!(escaped
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "-._~/%".contains(c)));
        }
    }
}
