use dropbox::file::upload::PutFileParams;
use std::path::PathBuf;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Rename the uploaded file instead of replacing an existing one
    #[clap(long)]
    no_overwrite: bool,
    /// Revision of the remote file being replaced
    #[clap(long)]
    parent_rev: Option<String>,
    /// Local file to upload
    path: PathBuf,
    /// Remote path of the created file
    remote: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &dropbox::Client) -> anyhow::Result<()> {
        let content = tokio::fs::read(&self.path).await?;
        tracing::info!("uploading {} bytes to {:?}", content.len(), self.remote);
        let mut params = PutFileParams::default();
        if self.no_overwrite {
            params.set_overwrite(false);
        }
        if let Some(ref rev) = self.parent_rev {
            params.set_parent_rev(rev.as_str());
        }
        let file = client
            .put_file_with_params(&self.remote, params, content)
            .await?;
        if file.base.path != dropbox::path::format_path(&self.remote, false) {
            tracing::warn!("file stored as {:?}", file.base.path);
        }
        super::print_json(&file)
    }
}
