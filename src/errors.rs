use thiserror::Error;

#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("request to {url:?} failed")]
    ProbeFailed {
        url: Option<String>,
        #[source]
        error: reqwest::Error,
    },

    #[error("endpoint {url} answered with http status {code}")]
    ProbeHttpCode { url: String, code: u16 },
}

impl EndpointError {
    // migrate to json config for i18n later
    pub fn user_message(&self) -> String {
        match self {
            Self::ProbeFailed { .. } => {
                "Could not reach the backend API. Check your connection or the configured base URL."
                    .to_owned()
            }
            Self::ProbeHttpCode { code, .. } => {
                format!("The backend API responded with HTTP {}.", code)
            }
        }
    }
}

impl From<reqwest::Error> for EndpointError {
    fn from(value: reqwest::Error) -> Self {
        let url: Option<String> = value.url().map(|e| e.as_str().to_owned());
        EndpointError::ProbeFailed { url, error: value }
    }
}
