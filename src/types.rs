use anyhow::Result;
use serde::Serialize;

use crate::endpoint::EndpointSource;

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "event", content = "data")]
pub enum Status {
    #[serde(rename_all = "camelCase")]
    Resolved {
        base_url: String,
        source: EndpointSource,
        development: bool,
    },
    #[serde(rename_all = "camelCase")]
    Probe { healthy: bool, code: Option<u16> },
    #[serde(rename_all = "camelCase")]
    Error { message: String },
}

pub trait StatusSink {
    fn send(&self, status: Status) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_event_wire_shape() {
        let status = Status::Resolved {
            base_url: "/api".to_owned(),
            source: EndpointSource::ProductionDefault,
            development: false,
        };

        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["event"], "resolved");
        assert_eq!(value["data"]["baseUrl"], "/api");
        assert_eq!(value["data"]["source"], "productionDefault");
        assert_eq!(value["data"]["development"], false);
    }
}
