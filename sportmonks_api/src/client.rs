//! Request builder and dispatcher for the Sportmonks Football API.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::Config,
    query::{join_trimmed, FilterSpec, QueryParams},
    transport::{HttpTransport, Transport},
    Error,
};

/// Root every request path is resolved against.
pub const BASE_URL: &str = "https://api.sportmonks.com/v3/football/";

/// Accumulates query parameters and sends them with every [`call`](Client::call).
///
/// Setters mutate the client in place and return it, so they chain:
///
/// ```no_run
/// # async fn run() -> Result<(), sportmonks_api::Error> {
/// use sportmonks_api::{Client, Config};
///
/// let mut client = Client::new(Config::new("my-token"))?;
/// client
///     .set_include("events;lineups")
///     .set_filters([("eventTypes", vec!["14", "19"])])
///     .set_per_page(25);
/// let fixtures = client.call("fixtures").await?;
/// # Ok(())
/// # }
/// ```
///
/// Parameters persist across calls; a setter called twice keeps only the
/// second value.
pub struct Client<T = HttpTransport> {
    transport: T,
    query: QueryParams,
}

impl Client<HttpTransport> {
    /// Creates a client for the production API.
    pub fn new(config: Config) -> Result<Self, Error> {
        Self::with_base_url(config, BASE_URL)
    }

    /// Creates a client rooted at a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(config: Config, base_url: &str) -> Result<Self, Error> {
        let query = initial_query(&config)?;
        Ok(Self {
            transport: HttpTransport::new(base_url)?,
            query,
        })
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(config: Config, transport: T) -> Result<Self, Error> {
        Ok(Self {
            query: initial_query(&config)?,
            transport,
        })
    }

    /// The parameters the next call will send.
    pub fn params(&self) -> &QueryParams {
        &self.query
    }

    /// Encodes `value` and stores it under `name`.
    pub fn set_param(&mut self, name: &str, value: impl Into<FilterSpec>) -> &mut Self {
        self.query.set(name, value.into().encode());
        self
    }

    pub fn set_include(&mut self, include: impl Into<FilterSpec>) -> &mut Self {
        self.set_param("include", include)
    }

    pub fn set_filters(&mut self, filters: impl Into<FilterSpec>) -> &mut Self {
        self.set_param("filters", filters)
    }

    /// Restricts the returned fields. Blank names are dropped.
    pub fn set_select<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.query.set("select", join_trimmed(fields));
        self
    }

    /// Sets the page number. Not range-checked; the API reports bad values.
    pub fn set_page(&mut self, page: i64) -> &mut Self {
        self.query.set("page", page);
        self
    }

    /// Sets the number of results per page. Not range-checked.
    pub fn set_per_page(&mut self, per_page: i64) -> &mut Self {
        self.query.set("per_page", per_page);
        self
    }

    /// Sends one GET for `path` with the current parameters and returns the
    /// decoded JSON body.
    pub async fn call(&self, path: &str) -> Result<Value, Error> {
        self.call_as::<Value>(path).await
    }

    /// Like [`call`](Client::call), but decodes the body into `R`.
    pub async fn call_as<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        let body = self
            .transport
            .get(path, &self.query.to_pairs())
            .await
            .map_err(|e| {
                tracing::error!("Request to {} failed: {}", path, e);
                Error::from(e)
            })?;

        serde_json::from_str::<R>(&body).map_err(|e| {
            tracing::error!("Failed to parse response from {}: {}", path, e);
            Error::Api {
                message: format!("failed to decode response from \"{}\": {}", path, e),
                code: 0,
            }
        })
    }
}

fn initial_query(config: &Config) -> Result<QueryParams, Error> {
    if config.api_token.is_empty() {
        return Err(Error::Configuration(
            "missing API token (set SPORTMONKS_API_TOKEN)".to_string(),
        ));
    }
    let mut query = QueryParams::new();
    query.set("api_token", config.api_token.as_str());
    if let Some(timezone) = &config.timezone {
        query.set("timezone", timezone.as_str());
    }
    Ok(query)
}
