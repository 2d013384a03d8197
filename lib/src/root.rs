//! The root namespace a [`Client`](crate::Client) operates against.

use std::str::FromStr;

/// Error returned when parsing an unknown root namespace.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("root must be \"dropbox\", \"app_folder\", or \"auto\", got {0:?}")]
pub struct InvalidRoot(String);

impl InvalidRoot {
    /// The rejected value.
    pub fn value(&self) -> &str {
        self.0.as_str()
    }
}

/// Selects which portion of the user's storage is accessed.
///
/// `app_folder` is the name of the access type but, for historical reasons,
/// the URL component is `sandbox`.
///
/// ```
/// use dropbox::Root;
///
/// let root: Root = "app_folder".parse().unwrap();
/// assert_eq!(root, Root::Sandbox);
/// assert_eq!(root.as_str(), "sandbox");
/// assert!("other".parse::<Root>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Root {
    /// Full access to the user's storage
    Dropbox,
    /// Restricted to the application folder
    Sandbox,
    /// Let the server pick based on the access type of the token
    #[default]
    Auto,
}

impl Root {
    /// The value used as URL component.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dropbox => "dropbox",
            Self::Sandbox => "sandbox",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for Root {
    type Err = InvalidRoot;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dropbox" => Ok(Self::Dropbox),
            "app_folder" => Ok(Self::Sandbox),
            "auto" => Ok(Self::Auto),
            other => Err(InvalidRoot(other.to_string())),
        }
    }
}

impl std::fmt::Display for Root {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
