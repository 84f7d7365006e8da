use log::info;

use crate::config;

const API_BASE_URL_OVERRIDE: Option<&str> = option_env!("VITE_API_BASE_URL");
const APP_ENVIRONMENT: Option<&str> = option_env!("APP_ENVIRONMENT");

const ARG_USE_API_URL: &str = "use-api-url";
const ARG_LOCAL_BACKEND: &str = "local-backend";
const ARG_SKIP_PROBE: &str = "skip-probe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Production,
    Development,
    Unknown,
}

impl BuildMode {
    /// Maps the build mode to the flag the resolver takes. `Unknown` follows
    /// the compilation profile.
    #[must_use]
    pub const fn is_development(self) -> bool {
        match self {
            Self::Development => true,
            Self::Production => false,
            Self::Unknown => cfg!(debug_assertions),
        }
    }
}

pub struct AppEnvironment {}

#[derive(Debug, Default)]
pub struct Args {
    pub use_api_url: Option<String>,
    pub local_backend: bool,
    pub skip_probe: bool,
}

impl Args {
    #[must_use]
    pub fn merge_with(&self, other: &Self) -> Self {
        Self {
            use_api_url: self
                .use_api_url
                .clone()
                .or_else(|| other.use_api_url.clone()),
            local_backend: self.local_backend || other.local_backend,
            skip_probe: self.skip_probe || other.skip_probe,
        }
    }

    pub fn parse(iterator: impl Iterator<Item = String>) -> Self {
        let vector: Vec<String> = iterator.collect();

        Self {
            use_api_url: Self::value_by_flag(ARG_USE_API_URL, &vector),
            local_backend: Self::has_flag(ARG_LOCAL_BACKEND, &vector),
            skip_probe: Self::has_flag(ARG_SKIP_PROBE, &vector),
        }
    }

    fn has_flag(flag: &str, i: &[String]) -> bool {
        i.iter().any(|e| {
            if e.starts_with("--") {
                let without_dashes = e.trim_start_matches("--");
                flag == without_dashes
            } else {
                false
            }
        })
    }

    fn value_by_flag(flag: &str, i: &[String]) -> Option<String> {
        let mut iter = i.iter().peekable();

        while let Some(arg) = iter.next() {
            if arg.trim_start_matches("--") == flag {
                if let Some(next) = iter.peek() {
                    if !next.starts_with("--") {
                        return Some(next.to_owned().to_owned());
                    }
                }
                return None;
            }
        }

        None
    }
}

impl AppEnvironment {
    pub const fn compiled_base_url_override() -> Option<&'static str> {
        API_BASE_URL_OVERRIDE
    }

    pub fn build_mode() -> BuildMode {
        match APP_ENVIRONMENT {
            Some(raw) => match raw {
                "prod" => BuildMode::Production,
                "dev" => BuildMode::Development,
                _ => BuildMode::Unknown,
            },
            None => BuildMode::Unknown,
        }
    }

    fn args_sources() -> (impl Iterator<Item = String>, impl Iterator<Item = String>) {
        let from_cmd = std::env::args();
        info!("cmd args: {:?}", from_cmd);
        let from_config = config::cmd_arguments();
        info!("config args: {:?}", from_config);

        (from_cmd, from_config.into_iter())
    }

    pub fn cmd_args() -> Args {
        let (from_cmd, from_config) = Self::args_sources();
        let cmd_args = Args::parse(from_cmd);
        let config_args = Args::parse(from_config);
        let args = cmd_args.merge_with(&config_args);
        log::info!("parsed args: {:#?}", args);
        args
    }
}
