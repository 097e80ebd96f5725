use serde_json::Value;
use snafu::ResultExt;
use url::Url;

use crate::{
    config::ClientConfig,
    error,
    model::{Bot, CategoryQuery, VoteOutcome},
    service::{
        mapper,
        transport::{HttpTransport, Transport},
    },
    util,
};

/// BotsArchive API client.
///
/// Every method issues exactly one GET; nothing is cached or retried. The
/// client can be shared across tasks, concurrency is up to the transport.
#[derive(Debug)]
pub struct Client<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl Client<HttpTransport> {
    /// Client against the production endpoints.
    pub fn new() -> util::Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> util::Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        tracing::info!("client::with_transport | API {}", config.api_base());
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> util::Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.config.api_base(), path))
            .context(error::URLSnafu)?;
        url.query_pairs_mut().extend_pairs(params);

        Ok(url)
    }

    async fn fetch(&self, url: Url) -> util::Result<Value> {
        tracing::debug!("client::fetch | GET {}", url);
        self.transport.get(url).await
    }

    /// Look a bot up by its username.
    ///
    /// Fails with [`error::Error::BotNotFound`] when the directory has no such bot.
    pub async fn get_bot_by_id(&self, username: &str) -> util::Result<Bot> {
        let url = self.endpoint("getBotID.php", &[("username", username)])?;
        let body = self.fetch(url).await?;
        mapper::ensure_bot_found(&body)?;

        mapper::map_bot(mapper::result_field(&body)?, self.config.photo_base())
    }

    /// Vote `user_id` gave to the bot `bot_id`.
    pub async fn get_user_vote(&self, bot_id: i64, user_id: i64) -> util::Result<VoteOutcome> {
        let (bot_id, user_id) = (bot_id.to_string(), user_id.to_string());
        let url = self.endpoint(
            "getUserVote.php",
            &[("bot_id", bot_id.as_str()), ("user_id", user_id.as_str())],
        )?;
        let body = self.fetch(url).await?;
        mapper::ensure_bot_found(&body)?;

        mapper::interpret_vote(&body)
    }

    /// Search bots by name or username. `None` when nothing matched.
    pub async fn search(&self, query: &str) -> util::Result<Option<Vec<Bot>>> {
        let url = self.endpoint("search.php", &[("q", query)])?;
        let body = self.fetch(url).await?;
        let photo_base = self.config.photo_base();

        let bots = mapper::result_list(&body)?
            .map(|list| {
                list.iter()
                    .map(|info| mapper::map_bot(info, photo_base))
                    .collect::<util::Result<Vec<_>>>()
            })
            .transpose()?;
        tracing::debug!(
            "client::search | {} result(s) for {:?}",
            bots.as_ref().map_or(0, Vec::len),
            query
        );

        Ok(bots)
    }

    /// List the bots of a category, either a [`Category`](crate::model::Category)
    /// or a raw code. `None` when the category is empty or unknown.
    ///
    /// Bots from this endpoint never have `photo_url` set.
    pub async fn search_by_category(
        &self,
        category: impl Into<CategoryQuery>,
    ) -> util::Result<Option<Vec<Bot>>> {
        let category = category.into();
        let url = self.endpoint("getCategory.php", &[("category", category.code())])?;
        let body = self.fetch(url).await?;

        let bots = mapper::result_list(&body)?
            .map(|list| {
                list.iter()
                    .map(mapper::map_category_bot)
                    .collect::<util::Result<Vec<_>>>()
            })
            .transpose()?;
        tracing::debug!(
            "client::search_by_category | {} result(s) for {}",
            bots.as_ref().map_or(0, Vec::len),
            category.code()
        );

        Ok(bots)
    }

    /// Release the transport. Taking `self` rules out any use after close.
    pub fn close(self) {
        tracing::info!("client::close | Closing client");
        self.transport.close();
    }
}
