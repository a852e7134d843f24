//! Contact form state, validation and the submission capability it talks to.
//!
//! Nothing in here touches the DOM, so the whole lifecycle can be driven from
//! plain unit tests.

pub mod error;
pub mod form;
pub mod model;
pub mod submitter;
pub mod validation;

pub use error::SubmitError;
pub use form::ContactForm;
pub use model::{ContactField, SubmissionStatus};
pub use submitter::SubmitterHandle;
