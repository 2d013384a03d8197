//! The metadata describing files and folders.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// The fields shared by files and folders
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct EntryBase {
    /// Canonical path to the entry
    pub path: String,
    pub is_dir: bool,
    /// Unique identifier of the current revision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    /// Deprecated numeric revision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    /// Size in bytes
    #[serde(default)]
    pub bytes: u64,
    /// Human readable size, like `225.4KB`
    #[serde(default)]
    pub size: String,
    /// Last time the entry was modified on the server, absent on the root folder
    #[serde(default, with = "crate::date::optional")]
    pub modified: Option<DateTime<Utc>>,
    /// Either `dropbox` or `app_folder`
    pub root: String,
    pub icon: String,
    #[serde(default)]
    pub thumb_exists: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

impl EntryBase {
    /// The last component of the path
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }
}

/// Media metadata that may still be computed by the server
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum MediaInfo<T> {
    Available(T),
    /// The server sends the `pending` string
    Pending(String),
}

impl<T> MediaInfo<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Self::Available(inner) => Some(inner),
            Self::Pending(_) => None,
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct PhotoInfo {
    #[serde(default, with = "crate::date::optional")]
    pub time_taken: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lat_long: Option<[f64; 2]>,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct VideoInfo {
    #[serde(default, with = "crate::date::optional")]
    pub time_taken: Option<DateTime<Utc>>,
    /// Duration in milliseconds
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub lat_long: Option<[f64; 2]>,
}

/// A structure representing a file, also returned when uploading a file
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct File {
    #[serde(flatten)]
    pub base: EntryBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Modification time set by the desktop client when the file was added
    #[serde(default, with = "crate::date::optional")]
    pub client_mtime: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_info: Option<MediaInfo<PhotoInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_info: Option<MediaInfo<VideoInfo>>,
}

/// A structure representing a folder
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Folder {
    #[serde(flatten)]
    pub base: EntryBase,
    /// Hash of the listing, to provide in later calls to avoid fetching an unchanged folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Only provided when the folder has been listed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<Entry>>,
}

impl Folder {
    pub fn find_entry(&self, name: &str) -> Option<&Entry> {
        self.contents
            .as_ref()
            .and_then(|list| list.iter().find(|item| item.base().name() == name))
    }
}

/// A file or a folder, discriminated by the `is_dir` field
#[derive(Clone, Debug, serde::Serialize)]
#[serde(untagged)]
pub enum Entry {
    File(File),
    Folder(Folder),
}

impl<'de> serde::Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        let is_dir = value
            .get("is_dir")
            .and_then(serde_json::Value::as_bool)
            .ok_or_else(|| D::Error::missing_field("is_dir"))?;
        if is_dir {
            serde_json::from_value(value)
                .map(Self::Folder)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(Self::File)
                .map_err(D::Error::custom)
        }
    }
}

impl From<File> for Entry {
    fn from(value: File) -> Self {
        Self::File(value)
    }
}

impl From<Folder> for Entry {
    fn from(value: Folder) -> Self {
        Self::Folder(value)
    }
}

impl Entry {
    pub fn base(&self) -> &EntryBase {
        match self {
            Self::File(file) => &file.base,
            Self::Folder(folder) => &folder.base,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Self::File(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn into_file(self) -> Option<File> {
        match self {
            Self::File(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Self::Folder(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn into_folder(self) -> Option<Folder> {
        match self {
            Self::Folder(inner) => Some(inner),
            _ => None,
        }
    }
}

impl Eq for Entry {}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.is_folder() == other.is_folder()
            && self.base().path == other.base().path
            && self.base().rev == other.base().rev
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Folder(_), Self::File(_)) => Ordering::Less,
            (Self::File(_), Self::Folder(_)) => Ordering::Greater,
            _ => self.base().path.cmp(&other.base().path),
        }
    }
}
