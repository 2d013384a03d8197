mod account;
mod download;
mod metadata;
mod upload;

#[derive(clap::Subcommand)]
pub(crate) enum Command {
    /// Display the account information
    Account(account::Command),
    /// Download a remote file
    Download(download::Command),
    /// Display the metadata of a remote file or folder
    Metadata(metadata::Command),
    /// Upload a local file
    Upload(upload::Command),
}

impl Command {
    pub(crate) async fn execute(self, client: &dropbox::Client) -> anyhow::Result<()> {
        match self {
            Self::Account(inner) => inner.execute(client).await,
            Self::Download(inner) => inner.execute(client).await,
            Self::Metadata(inner) => inner.execute(client).await,
            Self::Upload(inner) => inner.execute(client).await,
        }
    }
}

/// Maps the failure of a command to the process exit code.
pub(crate) fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<std::io::Error>().is_some() {
        return exitcode::IOERR;
    }
    match err.downcast_ref::<dropbox::Error>() {
        Some(dropbox::Error::Auth) => exitcode::NOPERM,
        Some(dropbox::Error::Api { status: 404, .. }) => exitcode::NOINPUT,
        Some(dropbox::Error::Server { .. }) | Some(dropbox::Error::Reqwest(_)) => {
            exitcode::UNAVAILABLE
        }
        Some(dropbox::Error::Metadata { .. }) | Some(dropbox::Error::Json(_)) => {
            exitcode::PROTOCOL
        }
        _ => exitcode::DATAERR,
    }
}

/// Prints a value as pretty JSON on the standard output.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
