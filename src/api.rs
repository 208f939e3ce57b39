use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use thiserror::Error;

use crate::config;
use crate::state::contact_form::ContactFormData;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server rejected the message (status {status})")]
    Rejected { status: u16 },
    #[error("could not encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where contact messages go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitChannel {
    /// Waits a fixed delay and always succeeds.
    Simulated { delay_ms: u32 },
    /// POSTs `{name, email, message}` as JSON.
    Http { endpoint: &'static str },
}

impl SubmitChannel {
    pub fn from_config() -> Self {
        match config::contact_endpoint() {
            Some(endpoint) => SubmitChannel::Http { endpoint },
            None => SubmitChannel::Simulated {
                delay_ms: config::SIMULATED_SUBMIT_MS,
            },
        }
    }

    pub async fn send(self, data: ContactFormData) -> Result<(), SubmitError> {
        match self {
            SubmitChannel::Simulated { delay_ms } => {
                debug!("Simulating contact submission ({} ms)", delay_ms);
                TimeoutFuture::new(delay_ms).await;
                Ok(())
            }
            SubmitChannel::Http { endpoint } => {
                let body = serde_json::to_string(&data)?;
                info!("Posting contact message to {}", endpoint);
                let response = Request::post(endpoint)
                    .header("Content-Type", "application/json")
                    .body(body)
                    .send()
                    .await
                    .map_err(|e| SubmitError::Network(e.to_string()))?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(SubmitError::Rejected {
                        status: response.status(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_has_exactly_the_three_fields() {
        let data = ContactFormData {
            name: "A".into(),
            email: "a@b.co".into(),
            message: "hi".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({"name": "A", "email": "a@b.co", "message": "hi"}));
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(
            SubmitError::Rejected { status: 502 }.to_string(),
            "server rejected the message (status 502)"
        );
    }
}
