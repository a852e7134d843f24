use futures::future::LocalBoxFuture;
use log::{debug, info, warn};

use super::error::{ContactError, SubmitError};
use super::model::{ContactField, ContactRequest, SubmissionStatus};
use super::submitter::ContactSubmitter;
use super::validation;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

/// State of one contact form: the input buffer, where the last submission
/// attempt stands and the message describing it.
///
/// The presentation layer reads it through the accessors and changes it only
/// through the edit methods, [`start_submission`](Self::start_submission) and
/// [`finish_submit`](Self::finish_submit). While a submission is in flight the
/// buffer is frozen and further submits are refused, so one instance never
/// has two requests outstanding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    request: ContactRequest,
    status: SubmissionStatus,
    message: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &ContactRequest {
        &self.request
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Overwrites one field. Leaving Success or Error this way drops the
    /// status message and goes back to Idle.
    pub fn update_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), ContactError> {
        if self.is_submitting() {
            debug!("Ignoring edit to {} while submitting", field);
            return Err(ContactError::Busy);
        }

        self.request.set(field, value.into());
        if self.status.is_settled() {
            self.status = SubmissionStatus::Idle;
            self.message = None;
        }
        Ok(())
    }

    /// Same as [`update_field`](Self::update_field), addressed by the input's
    /// `name` attribute.
    pub fn update_named_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ContactError> {
        let field: ContactField = name.parse()?;
        self.update_field(field, value)
    }

    /// Validates the buffer and, if it passes, moves to Submitting and
    /// returns the snapshot to hand to the submitter.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, ContactError> {
        if self.is_submitting() {
            debug!("Submit ignored, previous submission still pending");
            return Err(ContactError::Busy);
        }

        if let Err(err) = validation::validate(&self.request) {
            info!("Contact form rejected: {:?}", err);
            self.status = SubmissionStatus::Error;
            self.message = Some(err.to_string());
            return Err(err.into());
        }

        self.status = SubmissionStatus::Submitting;
        self.message = None;
        Ok(self.request.clone())
    }

    /// Begins a submission and calls the submitter exactly once. The returned
    /// future resolves to the outcome to feed back into
    /// [`finish_submit`](Self::finish_submit).
    pub fn start_submission<S>(
        &mut self,
        submitter: &S,
    ) -> Result<LocalBoxFuture<'static, Result<(), SubmitError>>, ContactError>
    where
        S: ContactSubmitter + ?Sized,
    {
        let request = self.begin_submit()?;
        info!("Sending contact message");
        Ok(submitter.submit(request))
    }

    /// Applies the submitter's answer. A failure is handed back as
    /// [`ContactError::SubmissionFailed`] after the form has recorded it.
    /// Outcomes that arrive when nothing is pending are dropped.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Result<(), ContactError> {
        if !self.is_submitting() {
            warn!("Dropping submission outcome received in state {}", self.status.as_str());
            return Ok(());
        }

        match outcome {
            Ok(()) => {
                info!("Contact message delivered");
                self.status = SubmissionStatus::Success;
                self.message = Some(SUCCESS_MESSAGE.to_string());
                self.request = ContactRequest::default();
                Ok(())
            }
            Err(err) => {
                self.status = SubmissionStatus::Error;
                self.message = Some(FAILURE_MESSAGE.to_string());
                Err(ContactError::SubmissionFailed(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::error::{UnknownField, ValidationError};
    use crate::contact::submitter::MockContactSubmitter;
    use futures::future::ready;

    // What the form component does between a submit click and the answer.
    async fn send(
        form: &mut ContactForm,
        submitter: &MockContactSubmitter,
    ) -> Result<(), ContactError> {
        let pending = form.start_submission(submitter)?;
        form.finish_submit(pending.await)
    }

    fn alice() -> ContactRequest {
        ContactRequest::new("Alice", "alice@example.com", "Hi")
    }

    fn filled(request: &ContactRequest) -> ContactForm {
        let mut form = ContactForm::new();
        for field in ContactField::ALL {
            form.update_field(field, request.get(field)).unwrap();
        }
        form
    }

    fn never_called() -> MockContactSubmitter {
        let mut mock = MockContactSubmitter::new();
        mock.expect_submit().never();
        mock
    }

    fn answering(outcome: Result<(), SubmitError>) -> MockContactSubmitter {
        let mut mock = MockContactSubmitter::new();
        mock.expect_submit()
            .times(1)
            .returning(move |_| Box::pin(ready(outcome.clone())));
        mock
    }

    #[test]
    fn starts_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.message(), None);
        assert!(form.request().is_empty());
    }

    #[tokio::test]
    async fn blank_fields_never_reach_submitter() {
        let blanks = [
            ContactRequest::new("", "alice@example.com", "Hi"),
            ContactRequest::new("Alice", "   ", "Hi"),
            ContactRequest::new("Alice", "alice@example.com", "\n\t"),
            ContactRequest::default(),
        ];

        for request in blanks {
            let mut form = filled(&request);
            let result = send(&mut form, &never_called()).await;

            assert!(matches!(
                result,
                Err(ContactError::Validation(ValidationError::EmptyField(_)))
            ));
            assert_eq!(form.status(), SubmissionStatus::Error);
            assert_eq!(form.request(), &request);
            assert!(form.message().unwrap().starts_with("Please fill in your"));
        }
    }

    #[tokio::test]
    async fn malformed_email_reports_invalid_email() {
        for email in ["foo", "foo@bar", "foo@bar."] {
            let mut form = filled(&ContactRequest::new("Alice", email, "Hi"));
            let result = send(&mut form, &never_called()).await;

            assert_eq!(
                result,
                Err(ContactError::Validation(ValidationError::InvalidEmail))
            );
            assert_eq!(form.status(), SubmissionStatus::Error);
            assert_eq!(form.message(), Some("Please enter a valid email address."));
            assert_eq!(form.request().email, email);
        }
    }

    #[tokio::test]
    async fn successful_submission_goes_through_submitting_and_clears_buffer() {
        let mut form = filled(&alice());

        let pending = form.start_submission(&answering(Ok(()))).unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(form.message(), None);
        assert_eq!(form.request(), &alice());

        assert_eq!(form.finish_submit(pending.await), Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.message(), Some(SUCCESS_MESSAGE));
        assert!(form.request().is_empty());
    }

    #[tokio::test]
    async fn submit_calls_submitter_once_with_snapshot() {
        let mut mock = MockContactSubmitter::new();
        mock.expect_submit()
            .withf(|request| *request == alice())
            .times(1)
            .returning(|_| Box::pin(ready(Ok(()))));

        let mut form = filled(&alice());
        assert_eq!(send(&mut form, &mock).await, Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.request().is_empty());
    }

    #[tokio::test]
    async fn failed_submission_keeps_input() {
        let mut form = filled(&alice());
        let offline = answering(Err(SubmitError::Network("offline".to_string())));
        let result = send(&mut form, &offline).await;

        assert_eq!(
            result,
            Err(ContactError::SubmissionFailed(SubmitError::Network(
                "offline".to_string()
            )))
        );
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.message(), Some(FAILURE_MESSAGE));
        assert_eq!(form.request(), &alice());
    }

    #[tokio::test]
    async fn timeout_is_reported_like_any_failure() {
        let mut form = filled(&alice());
        let result = send(&mut form, &answering(Err(SubmitError::Timeout(15_000)))).await;

        assert!(matches!(result, Err(ContactError::SubmissionFailed(_))));
        assert_eq!(form.message(), Some(FAILURE_MESSAGE));
        assert_eq!(form.request(), &alice());
    }

    #[tokio::test]
    async fn second_submit_while_pending_is_refused() {
        let mut form = filled(&alice());
        let pending = form.start_submission(&answering(Ok(()))).unwrap();

        assert_eq!(form.begin_submit(), Err(ContactError::Busy));
        assert_eq!(send(&mut form, &never_called()).await, Err(ContactError::Busy));
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        assert_eq!(form.finish_submit(pending.await), Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn edits_are_refused_while_submitting() {
        let mut form = filled(&alice());
        form.begin_submit().unwrap();

        assert_eq!(
            form.update_field(ContactField::Message, "changed my mind"),
            Err(ContactError::Busy)
        );
        assert_eq!(form.request(), &alice());
    }

    #[test]
    fn named_edit_updates_the_matching_field() {
        let mut form = ContactForm::new();
        form.update_named_field("email", "alice@example.com").unwrap();
        form.update_named_field("message", "Hi").unwrap();

        assert_eq!(form.request().email, "alice@example.com");
        assert_eq!(form.request().message, "Hi");
        assert_eq!(form.request().name, "");
    }

    #[test]
    fn unknown_input_name_leaves_form_alone() {
        let mut form = filled(&alice());
        let before = form.clone();

        let err = form.update_named_field("phone", "555-0100").unwrap_err();
        assert_eq!(err, ContactError::UnknownField(UnknownField("phone".to_string())));
        assert!(err.left_form_unchanged());
        assert_eq!(form, before);
    }

    #[test]
    fn only_refusals_leave_the_form_unchanged() {
        let mut form = filled(&alice());
        form.begin_submit().unwrap();
        let before = form.clone();

        let busy = form.begin_submit().unwrap_err();
        assert!(busy.left_form_unchanged());
        assert_eq!(form, before);

        let mut blank = ContactForm::new();
        let invalid = blank.begin_submit().unwrap_err();
        assert!(!invalid.left_form_unchanged());
        assert_eq!(blank.status(), SubmissionStatus::Error);

        let failed = ContactError::SubmissionFailed(SubmitError::Timeout(1));
        assert!(!failed.left_form_unchanged());
    }

    #[test]
    fn editing_after_error_returns_to_idle() {
        let mut form = filled(&ContactRequest::new("Alice", "foo", "Hi"));
        assert!(form.begin_submit().is_err());
        assert_eq!(form.status(), SubmissionStatus::Error);

        form.update_field(ContactField::Email, "alice@example.com").unwrap();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.message(), None);
        assert_eq!(form.request(), &alice());
    }

    #[tokio::test]
    async fn editing_after_success_returns_to_idle() {
        let mut form = filled(&alice());
        send(&mut form, &answering(Ok(()))).await.unwrap();

        form.update_field(ContactField::Name, "Bob").unwrap();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.message(), None);
        assert_eq!(form.request().name, "Bob");
    }

    #[tokio::test]
    async fn resubmitting_after_success_validates_the_empty_buffer() {
        let mut form = filled(&alice());
        send(&mut form, &answering(Ok(()))).await.unwrap();

        assert_eq!(
            send(&mut form, &never_called()).await,
            Err(ContactError::Validation(ValidationError::EmptyField(
                ContactField::Name
            )))
        );
        assert_eq!(form.status(), SubmissionStatus::Error);
    }

    #[tokio::test]
    async fn manual_retry_after_failure_succeeds() {
        let mut form = filled(&alice());
        let rejected = answering(Err(SubmitError::Rejected {
            status: 500,
            reason: "boom".to_string(),
        }));
        assert!(send(&mut form, &rejected).await.is_err());
        assert_eq!(form.status(), SubmissionStatus::Error);

        assert_eq!(send(&mut form, &answering(Ok(()))).await, Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let mut form = filled(&alice());
        let before = form.clone();

        assert_eq!(form.finish_submit(Err(SubmitError::Timeout(1))), Ok(()));
        assert_eq!(form, before);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }
}
