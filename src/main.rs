use anyhow::{Context, Result};
use api_config_core::api;
use api_config_core::app::AppState;
use api_config_core::types::{Status, StatusSink};
use log::{error, info};

struct ConsoleSink();

impl StatusSink for ConsoleSink {
    fn send(&self, status: Status) -> Result<()> {
        let s = serde_json::to_string_pretty(&status)?;
        info!("{}", s);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let app_state = AppState::setup().context("Cannot setup state")?;
    let sink = ConsoleSink();

    sink.send(Status::Resolved {
        base_url: app_state.api.base_url().to_owned(),
        source: app_state.api.source(),
        development: app_state.api.is_development(),
    })?;

    if app_state.args.skip_probe {
        info!("probe skipped by --skip-probe");
        return Ok(());
    }

    match api::probe(&app_state.api).await {
        Ok(Some(report)) => sink.send(Status::Probe {
            healthy: true,
            code: Some(report.code),
        })?,
        Ok(None) => info!("base url is same-origin relative, probe does not apply"),
        Err(e) => {
            error!("probe failed: {:#?}", e);
            sink.send(Status::Error {
                message: e.user_message(),
            })?;
        }
    }

    Ok(())
}
