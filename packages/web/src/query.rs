use std::fmt;

use dioxus::router::FromQuery;
use dioxus::router::exports::percent_encoding::percent_decode_str;

/// Query string of the apply route: `?jobId=<id>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyQuery {
    pub job_id: Option<String>,
}

impl FromQuery for ApplyQuery {
    fn from_query(query: &str) -> Self {
        let job_id = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "jobId")
            .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
            .filter(|value| !value.is_empty());

        Self { job_id }
    }
}

impl fmt::Display for ApplyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.job_id {
            Some(id) => write!(f, "jobId={}", ui::encode_query_value(id)),
            None => Ok(()),
        }
    }
}
