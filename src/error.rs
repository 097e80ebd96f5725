use snafu::{prelude::*, Report};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("bot not found: {message}"))]
    BotNotFound { message: String },
    #[snafu(display("Transport error"))]
    TransportError { source: reqwest::Error },
    #[snafu(display("serde json error"))]
    SerdeJsonError { source: serde_json::Error },
    #[snafu(display("URL Parsing error"))]
    URLError { source: url::ParseError },
    #[snafu(display("missing field `{field}`"))]
    MissingField { field: &'static str },
    #[snafu(display("invalid field `{field}`, expected {expected}"))]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[snafu(display("invalid bot payload"))]
    BotPayloadError { source: serde_json::Error },
}

impl Error {
    /// The remote body decoded fine but did not have the shape we rely on.
    pub fn is_mapping(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. } | Error::InvalidField { .. } | Error::BotPayloadError { .. }
        )
    }

    /// The request failed before a usable JSON body arrived: network,
    /// non-2xx status, timeout or an undecodable body.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::TransportError { .. } | Error::SerdeJsonError { .. }
        )
    }

    /// Log the full error chain at error level.
    pub fn report(&self) {
        tracing::error!("error: error_msg {}", Report::from_error(self));
    }
}
