use {
    crate::domain::error::ApruveError,
    std::{env, fmt, time::Duration},
    url::Url,
};

const API_ROOT: &str = "api/v3/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Test,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Test => "test",
            Self::Prod => "prod",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Local => "http://localhost:3000",
            Self::Test => "https://test.apruve.com",
            Self::Prod => "https://app.apruve.com",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Environment {
    type Error = ApruveError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "local" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(ApruveError::Config(format!("unknown environment: {other}"))),
        }
    }
}

/// Connection settings handed to the transport once, read-only afterwards.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    environment: Environment,
    base_url: Url,
    timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Result<Self, ApruveError> {
        Ok(Self {
            api_key: api_key.into(),
            environment,
            base_url: parse_base_url(environment.base_url())?,
            timeout: None,
        })
    }

    /// Point at a different host than the environment default.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ApruveError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load from the process environment (and `.env`, if present).
    ///
    /// `APRUVE_API_KEY` is required. `APRUVE_ENV` defaults to `local`;
    /// `APRUVE_BASE_URL` and `APRUVE_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, ApruveError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ApruveError> {
        let api_key = lookup("APRUVE_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ApruveError::Config("APRUVE_API_KEY must be set".into()))?;
        let environment = match lookup("APRUVE_ENV") {
            Some(name) => Environment::try_from(name.as_str())?,
            None => Environment::Local,
        };

        let mut config = Self::new(api_key, environment)?;
        if let Some(base_url) = lookup("APRUVE_BASE_URL") {
            config = config.with_base_url(&base_url)?;
        }
        if let Some(secs) = lookup("APRUVE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ApruveError::Config(format!("APRUVE_TIMEOUT_SECS must be an integer, got: {secs}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute URL for a path relative to `/api/v3/`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApruveError> {
        self.base_url
            .join(API_ROOT)
            .and_then(|root| root.join(path.trim_start_matches('/')))
            .map_err(|e| ApruveError::Config(format!("invalid endpoint {path}: {e}")))
    }
}

// Keeps the api key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApruveError> {
    let mut url =
        Url::parse(raw).map_err(|e| ApruveError::Config(format!("invalid base url {raw}: {e}")))?;
    // Url::join drops the last segment unless the path ends with a slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
