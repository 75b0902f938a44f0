use std::cell::RefCell;

use chrono::{SecondsFormat, Utc};
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

use crate::forms::session::{FormSession, SubmitRejected};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request could not be sent: {0}")]
    Transport(String),
    #[error("endpoint responded with status {0}")]
    Rejected(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
    /// No request was made.
    Ignored(SubmitRejected),
}

/// Sends one JSON POST and reports the response status.
pub trait Transport {
    fn post_json<'a>(&'a self, url: &'a str, body: &'a Value) -> LocalBoxFuture<'a, Result<u16, SubmitError>>;
}

pub struct GlooTransport;

impl Transport for GlooTransport {
    fn post_json<'a>(&'a self, url: &'a str, body: &'a Value) -> LocalBoxFuture<'a, Result<u16, SubmitError>> {
        Box::pin(async move {
            let request = Request::post(url)
                .header("Content-Type", "application/json")
                .json(body)
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            Ok(response.status())
        })
    }
}

pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn with_timestamp(mut body: Value, timestamp: String) -> Value {
    if let Value::Object(map) = &mut body {
        map.insert("timestamp".to_string(), Value::String(timestamp));
    }
    body
}

pub struct SubmissionClient<T: Transport> {
    endpoint: String,
    transport: T,
}

impl SubmissionClient<GlooTransport> {
    pub fn browser(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, GlooTransport)
    }
}

impl<T: Transport> SubmissionClient<T> {
    pub fn new(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    async fn send(&self, body: &Value) -> Result<(), SubmitError> {
        let status = self.transport.post_json(&self.endpoint, body).await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(SubmitError::Rejected(status))
        }
    }

    /// Moves the session into Submitting and returns the timestamped body.
    /// Fails without side effects while another submit is in flight.
    pub fn prepare(&self, session: &RefCell<FormSession>) -> Result<Value, SubmitRejected> {
        let body = session.borrow_mut().begin_submit()?;
        Ok(with_timestamp(body, timestamp_now()))
    }

    /// Posts a prepared body. Every failure collapses into `false`.
    pub async fn deliver(&self, flow_id: &str, body: &Value) -> bool {
        match self.send(body).await {
            Ok(()) => {
                log::info!("{} form submitted", flow_id);
                true
            }
            Err(e) => {
                log::error!("Error submitting {} form: {}", flow_id, e);
                false
            }
        }
    }

    /// Runs one submission for the session. A call made while another is in
    /// flight returns `Ignored` without touching the network.
    pub async fn submit(&self, session: &RefCell<FormSession>) -> SubmitOutcome {
        let body = match self.prepare(session) {
            Ok(body) => body,
            Err(reason) => {
                log::debug!("submit ignored: {:?}", reason);
                return SubmitOutcome::Ignored(reason);
            }
        };
        let flow_id = session.borrow().flow().id;

        let succeeded = self.deliver(flow_id, &body).await;
        session.borrow_mut().finish_submit(succeeded);
        if succeeded {
            SubmitOutcome::Succeeded
        } else {
            SubmitOutcome::Failed
        }
    }
}
