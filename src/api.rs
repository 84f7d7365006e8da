use log::{error, info};
use serde::Deserialize;

use crate::config::{self, ConfigSource, EnvSource};
use crate::endpoint::{self, EndpointSource};
use crate::environment::{AppEnvironment, Args};
use crate::errors::EndpointError;

/// Runtime counterpart of the compile-time `VITE_API_BASE_URL` override.
pub const RUNTIME_OVERRIDE_VAR: &str = "API_BASE_URL";

const HEALTH_PATH: &str = "health";

/// The one value the rest of the app needs: the prefix for outgoing API
/// requests. Built once at startup and passed by reference, never mutated.
pub struct ApiConfig {
    base_url: String,
    source: EndpointSource,
    development: bool,
}

impl ApiConfig {
    pub fn new_from_env(args: &Args) -> Self {
        let stored = match config::base_url_override() {
            Ok(value) => value,
            Err(e) => {
                error!("Cannot read base url from config: {:#?}", e);
                None
            }
        };

        let override_url = Self::override_from_sources(
            args,
            &EnvSource {},
            stored,
            AppEnvironment::compiled_base_url_override(),
        );

        let mode = AppEnvironment::build_mode();
        let development = args.local_backend || mode.is_development();

        Self::new(override_url.as_deref(), development)
    }

    pub fn new(override_url: Option<&str>, development: bool) -> Self {
        let (base_url, source) = endpoint::resolve_with_source(override_url, development);
        info!("resolved api base url: {} ({:?})", base_url, source);

        Self {
            base_url,
            source,
            development,
        }
    }

    // First present, non-blank layer wins: explicit argv, then the process
    // environment, then the config file, then the compile-time constant.
    fn override_from_sources(
        args: &Args,
        env: &dyn ConfigSource,
        stored: Option<String>,
        compiled: Option<&str>,
    ) -> Option<String> {
        if let Some(url) = present(args.use_api_url.clone()) {
            info!("api base url taken from command line: {}", url);
            return Some(url);
        }

        if let Some(url) = present(env.get_string(RUNTIME_OVERRIDE_VAR)) {
            info!(
                "api base url taken from {} environment variable",
                RUNTIME_OVERRIDE_VAR
            );
            return Some(url);
        }

        if let Some(url) = present(stored) {
            info!("api base url taken from config file");
            return Some(url);
        }

        if let Some(url) = present(compiled.map(ToOwned::to_owned)) {
            info!("api base url baked in at build time");
            return Some(url);
        }

        None
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn source(&self) -> EndpointSource {
        self.source
    }

    pub const fn is_development(&self) -> bool {
        self.development
    }

    /// Joins a relative path onto the base URL. The only place the prefix is
    /// applied, so separators never double or go missing.
    #[must_use]
    pub fn request_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|url| !url.trim().is_empty())
}

pub struct ProbeReport {
    pub url: String,
    pub code: u16,
}

#[derive(Deserialize, Debug)]
struct HealthStatus {
    #[allow(dead_code)]
    status: Option<String>,
}

/// Startup diagnostic: asks the resolved endpoint for its health. A relative
/// base URL is same-origin and has nothing to probe standalone.
pub async fn probe(api: &ApiConfig) -> Result<Option<ProbeReport>, EndpointError> {
    if api.base_url().starts_with('/') {
        info!(
            "base url {} is same-origin relative, nothing to probe",
            api.base_url()
        );
        return Ok(None);
    }

    let url = api.request_url(HEALTH_PATH);
    info!("probing api endpoint: {}", url);

    let response = reqwest::get(&url).await?;
    let code: u16 = response.status().into();

    if !response.status().is_success() {
        return Err(EndpointError::ProbeHttpCode { url, code });
    }

    match response.json::<HealthStatus>().await {
        Ok(body) => info!("health endpoint answered: {:?}", body),
        Err(_) => info!("health endpoint answered with a non-json body"),
    }

    Ok(Some(ProbeReport { url, code }))
}
