use dropbox::file::download::GetFileParams;
use std::path::PathBuf;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Revision of the file to download, the latest by default
    #[clap(long)]
    rev: Option<String>,
    /// Remote path of the file
    remote: String,
    /// Local path to write the file to
    path: PathBuf,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &dropbox::Client) -> anyhow::Result<()> {
        let mut params = GetFileParams::default();
        if let Some(ref rev) = self.rev {
            params.set_rev(rev.as_str());
        }
        let download = client.get_file_with_params(&self.remote, params).await?;
        tokio::fs::write(&self.path, &download.content).await?;
        let rev = download
            .metadata
            .get("rev")
            .and_then(|value| value.as_str())
            .unwrap_or("unknown");
        tracing::info!(
            "downloaded {} bytes from {:?} (rev {rev}) to {:?}",
            download.content.len(),
            self.remote,
            self.path
        );
        Ok(())
    }
}
