use anyhow::Result;
use log::info;

use crate::api::ApiConfig;
use crate::environment::{AppEnvironment, Args};
use crate::{logs, utils};

pub struct AppState {
    pub api: ApiConfig,
    pub args: Args,
}

impl AppState {
    pub fn setup() -> Result<Self> {
        logs::dispatch_logs()?;

        info!("Application setup start, version {}", utils::app_version());

        let args = AppEnvironment::cmd_args();
        let api = ApiConfig::new_from_env(&args);

        info!("Application setup complete");

        Ok(AppState { api, args })
    }
}
