#[derive(clap::Parser)]
pub(crate) struct Command {}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &dropbox::Client) -> anyhow::Result<()> {
        let info = client.account_info().await?;
        tracing::info!("connected as {}", info.display_name);
        super::print_json(&info)
    }
}
