use crate::request::NoParams;
use crate::Server;

/// Storage usage of the account, in bytes
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct QuotaInfo {
    /// Total quota allocation
    pub quota: u64,
    /// Used by files that aren't shared
    pub normal: u64,
    /// Used by shared folders
    pub shared: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datastores: Option<u64>,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct NameDetails {
    pub familiar_name: String,
    pub given_name: String,
    pub surname: String,
}

/// The team the account belongs to, for business accounts
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Team {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

/// Information about the user's account
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct AccountInfo {
    pub uid: u64,
    pub display_name: String,
    pub referral_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Two-letter country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_paired: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_details: Option<NameDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    pub quota_info: QuotaInfo,
}

impl crate::Client {
    /// Get user account information.
    ///
    /// # Returns
    ///
    /// The [`AccountInfo`] of the user owning the access token.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the request fails or the response cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropbox::Client) -> Result<(), dropbox::Error> {
    /// let info = client.account_info().await?;
    /// println!("{} uses {} bytes", info.display_name, info.quota_info.normal);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn account_info(&self) -> crate::Result<AccountInfo> {
        let res = self
            .get_request(Server::Api, "/account/info", NoParams::default())
            .await?;
        crate::request::read_json(res).await
    }
}
