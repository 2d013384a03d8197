use dropbox::entry::Entry;
use dropbox::metadata::MetadataParams;

#[derive(Default)]
struct ColumnWidths {
    kind: usize,
    size: usize,
    path: usize,
}

impl ColumnWidths {
    fn from_lines<'a>(iter: impl Iterator<Item = &'a EntryLine<'a>>) -> Self {
        iter.fold(Self::default(), |mut res, item| {
            res.kind = res.kind.max(item.kind.len());
            res.size = res.size.max(item.size.len());
            res.path = res.path.max(item.path.len());
            res
        })
    }
}

struct EntryLine<'a> {
    kind: &'static str,
    size: &'a str,
    path: &'a str,
    modified: String,
}

impl<'a> From<&'a Entry> for EntryLine<'a> {
    fn from(entry: &'a Entry) -> Self {
        let base = entry.base();
        Self {
            kind: match entry {
                Entry::Folder(_) => "directory",
                Entry::File(_) if base.is_deleted => "deleted",
                Entry::File(_) => "file",
            },
            size: if entry.is_folder() { "-" } else { base.size.as_str() },
            path: base.path.as_str(),
            modified: base
                .modified
                .map(|value| value.to_rfc3339())
                .unwrap_or_else(|| "-".into()),
        }
    }
}

fn write(out: &mut impl std::io::Write, entries: &[Entry]) -> std::io::Result<()> {
    let lines = entries.iter().map(EntryLine::from).collect::<Vec<_>>();
    let widths = ColumnWidths::from_lines(lines.iter());
    for line in lines {
        writeln!(
            out,
            "{:<kw$}  {:>sw$}  {:pw$}  {}",
            line.kind,
            line.size,
            line.path,
            line.modified,
            kw = widths.kind,
            sw = widths.size,
            pw = widths.path,
        )?;
    }
    Ok(())
}

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Print the raw metadata as JSON
    #[clap(long)]
    json: bool,
    /// Maximum number of files listed in a folder
    #[clap(long)]
    file_limit: Option<u32>,
    /// Hash of a previous listing, to detect changes
    #[clap(long)]
    hash: Option<String>,
    /// Don't list the folder contents
    #[clap(long)]
    no_list: bool,
    /// Include deleted children in the listing
    #[clap(long)]
    include_deleted: bool,
    /// Revision to describe
    #[clap(long)]
    rev: Option<String>,
    /// Include photo and video information
    #[clap(long)]
    include_media_info: bool,
    /// Remote path to describe
    #[clap(default_value = "/")]
    path: String,
}

impl Command {
    fn params(&self) -> MetadataParams<'_> {
        let mut params = MetadataParams::default();
        if let Some(value) = self.file_limit {
            params.set_file_limit(value);
        }
        if let Some(ref value) = self.hash {
            params.set_hash(value.as_str());
        }
        if self.no_list {
            params.set_list(false);
        }
        if self.include_deleted {
            params.set_include_deleted(true);
        }
        if let Some(ref value) = self.rev {
            params.set_rev(value.as_str());
        }
        if self.include_media_info {
            params.set_include_media_info(true);
        }
        params
    }

    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &dropbox::Client) -> anyhow::Result<()> {
        let entry = match client.metadata_with_params(&self.path, self.params()).await {
            Ok(value) => value,
            Err(dropbox::Error::NotModified) => {
                tracing::info!("{:?} didn't change", self.path);
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        if self.json {
            return super::print_json(&entry);
        }
        let mut stdout = std::io::stdout().lock();
        match entry {
            Entry::Folder(folder) => {
                let mut contents = folder.contents.unwrap_or_default();
                contents.sort();
                write(&mut stdout, &contents)?;
            }
            file => write(&mut stdout, std::slice::from_ref(&file))?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{write, Command};
    use clap::Parser;
    use dropbox::entry::Entry;

    const FOLDER: &str = r#"{
    "size": "0 bytes",
    "hash": "efdac89c4da886a9cece1927e6c22977",
    "bytes": 0,
    "path": "/Photos",
    "is_dir": true,
    "icon": "folder",
    "root": "dropbox",
    "contents": [
        {"size": "2.3MB", "bytes": 2453963, "path": "/Photos/flower.jpg", "is_dir": false, "icon": "page_white_picture", "root": "dropbox", "modified": "Mon, 07 Apr 2014 23:13:16 +0000"},
        {"size": "0 bytes", "bytes": 0, "path": "/Photos/2014", "is_dir": true, "icon": "folder", "root": "dropbox"}
    ]
}"#;

    #[test]
    fn should_write_table_with_folders_first() {
        let entry: Entry = serde_json::from_str(FOLDER).unwrap();
        let mut contents = entry.into_folder().unwrap().contents.unwrap();
        contents.sort();
        let mut out = Vec::new();
        write(&mut out, &contents).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "directory      -  /Photos/2014        -",
                "file       2.3MB  /Photos/flower.jpg  2014-04-07T23:13:16+00:00",
            ]
        );
    }

    #[test]
    fn should_map_flags_to_params() {
        let cmd = Command::try_parse_from([
            "metadata",
            "--no-list",
            "--file-limit",
            "100",
            "--hash",
            "abc",
            "/Photos",
        ])
        .unwrap();
        assert!(!cmd.json);
        assert_eq!(cmd.path, "/Photos");
        let params = serde_json::to_value(cmd.params()).unwrap();
        assert_eq!(
            params,
            serde_json::json!({"file_limit": 100, "hash": "abc", "list": false})
        );
    }

    #[test]
    fn should_default_to_root_folder() {
        let cmd = Command::try_parse_from(["metadata", "--json"]).unwrap();
        assert!(cmd.json);
        assert_eq!(cmd.path, "/");
        let params = serde_json::to_value(cmd.params()).unwrap();
        assert_eq!(params, serde_json::json!({}));
    }
}
