use std::future::Future;
use std::rc::Rc;

use futures::future::{self, Either, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use serde::Deserialize;

use super::error::SubmitError;
use super::model::ContactRequest;
use crate::config;

/// Whatever actually delivers a contact message. The page never learns more
/// than "it worked" or "it didn't".
#[cfg_attr(test, mockall::automock)]
pub trait ContactSubmitter {
    fn submit(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// POSTs the request as JSON. Any 2xx counts as delivered.
pub struct HttpSubmitter {
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ContactSubmitter for HttpSubmitter {
    fn submit(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let response = Request::post(&endpoint)
                .json(&request)
                .map_err(|e| SubmitError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;

            if response.ok() {
                debug!("Contact endpoint accepted submission with status {}", response.status());
                return Ok(());
            }

            let status = response.status();
            let reason = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => response.status_text(),
            };
            Err(SubmitError::Rejected { status, reason })
        })
    }
}

/// Stands in for a real endpoint: waits, then reports success.
pub struct SimulatedSubmitter {
    delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            debug!("Simulating contact submission from {} ({} ms)", request.email, delay_ms);
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        })
    }
}

/// Builds the future that completes once `timeout_ms` has passed.
pub type Deadline = fn(u32) -> LocalBoxFuture<'static, ()>;

fn timer_deadline(timeout_ms: u32) -> LocalBoxFuture<'static, ()> {
    Box::pin(TimeoutFuture::new(timeout_ms))
}

/// Fails the submission with [`SubmitError::Timeout`] if the inner
/// capability has not answered within `timeout_ms`.
pub struct TimeoutSubmitter<S> {
    inner: S,
    timeout_ms: u32,
    deadline: Deadline,
}

impl<S: ContactSubmitter> TimeoutSubmitter<S> {
    pub fn new(inner: S, timeout_ms: u32) -> Self {
        Self::with_deadline(inner, timeout_ms, timer_deadline)
    }

    pub fn with_deadline(inner: S, timeout_ms: u32, deadline: Deadline) -> Self {
        Self {
            inner,
            timeout_ms,
            deadline,
        }
    }
}

impl<S: ContactSubmitter> ContactSubmitter for TimeoutSubmitter<S> {
    fn submit(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let timeout_ms = self.timeout_ms;
        let submission = self.inner.submit(request);
        let deadline = (self.deadline)(timeout_ms);
        Box::pin(race_deadline(submission, deadline, timeout_ms))
    }
}

/// Resolves with the submission's outcome unless `deadline` completes first.
/// When both are ready on the same poll the submission wins.
pub async fn race_deadline<F, D>(submission: F, deadline: D, timeout_ms: u32) -> Result<(), SubmitError>
where
    F: Future<Output = Result<(), SubmitError>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(submission);
    futures::pin_mut!(deadline);

    match future::select(submission, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(SubmitError::Timeout(timeout_ms)),
    }
}

/// Shared handle so a submitter can be passed around as a component property.
#[derive(Clone)]
pub struct SubmitterHandle(Rc<dyn ContactSubmitter>);

impl SubmitterHandle {
    pub fn new(submitter: impl ContactSubmitter + 'static) -> Self {
        Self(Rc::new(submitter))
    }
}

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ContactSubmitter for SubmitterHandle {
    fn submit(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.0.submit(request)
    }
}

pub fn default_submitter() -> SubmitterHandle {
    match config::contact_endpoint() {
        Some(endpoint) => {
            info!("Contact form will post to {}", endpoint);
            SubmitterHandle::new(TimeoutSubmitter::new(
                HttpSubmitter::new(endpoint),
                config::SUBMIT_TIMEOUT_MS,
            ))
        }
        None => {
            info!("No contact endpoint configured, submissions are simulated");
            SubmitterHandle::new(TimeoutSubmitter::new(
                SimulatedSubmitter::new(config::SIMULATED_SUBMIT_DELAY_MS),
                config::SUBMIT_TIMEOUT_MS,
            ))
        }
    }
}
