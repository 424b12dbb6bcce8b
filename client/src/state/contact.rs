//! Contact form state and the submission flow.
//!
//! DESIGN
//! ======
//! `ContactFormState` holds the three inputs, the in-flight flag, and a single
//! tagged status value. `begin_submit` is the synchronous gate: it flips
//! `submitting` before any await, so at most one request per form is ever in
//! flight. `finish_submit` applies the outcome.
//!
//! The async driver is generic over [`FormStore`] so the same flow runs
//! against a Leptos `RwSignal` in the page and a `RefCell` in tests.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::api::{ContactSender, SubmitError};
use crate::net::types::ContactRequest;

/// Result indicator shown under the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmitStatus {
    /// User-facing message, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Success => Some("Message sent successfully!"),
            Self::Error => Some("Failed to send message. Please try again."),
        }
    }
}

/// Combined view of `submitting` + `status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    ContactDetail,
    Phone,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::ContactDetail, Self::Phone];

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::ContactDetail => "email",
            Self::Phone => "tel",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::ContactDetail => "Your Email",
            Self::Phone => "Your Phone Number",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub contact_detail: String,
    pub phone: String,
    pub submitting: bool,
    pub status: SubmitStatus,
}

impl ContactFormState {
    /// Set a field verbatim. No trimming or format checks.
    pub fn update_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::ContactDetail => self.contact_detail = value,
            ContactField::Phone => self.phone = value,
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::ContactDetail => &self.contact_detail,
            ContactField::Phone => &self.phone,
        }
    }

    pub fn fields_filled(&self) -> bool {
        !self.name.is_empty() && !self.contact_detail.is_empty() && !self.phone.is_empty()
    }

    /// Whether a submit would be accepted right now.
    pub fn is_ready(&self) -> bool {
        self.fields_filled() && !self.submitting
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.submitting {
            return SubmissionPhase::InFlight;
        }
        match self.status {
            SubmitStatus::Idle => SubmissionPhase::Idle,
            SubmitStatus::Success => SubmissionPhase::Succeeded,
            SubmitStatus::Error => SubmissionPhase::Failed,
        }
    }

    /// Gate a submission. Returns the payload to send, or `None` without
    /// touching any state when a field is empty or a request is in flight.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if !self.is_ready() {
            return None;
        }
        self.submitting = true;
        self.status = SubmitStatus::Idle;
        Some(ContactRequest {
            name: self.name.clone(),
            contact_detail: self.contact_detail.clone(),
            phone: self.phone.clone(),
        })
    }

    /// Apply the outcome of an accepted submission.
    pub fn finish_submit(&mut self, outcome: &Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.name.clear();
                self.contact_detail.clear();
                self.phone.clear();
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
        self.submitting = false;
    }
}

// =============================================================================
// FORM STORE
// =============================================================================

/// Owner of a [`ContactFormState`] that the submission driver can mutate.
pub trait FormStore {
    /// Run `f` against the form. `None` if the store is no longer alive.
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R>;
}

impl FormStore for RwSignal<ContactFormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormStore for RefCell<ContactFormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Synchronous half of a submit: the gate.
pub fn begin_submission<S: FormStore>(store: &S) -> Option<ContactRequest> {
    store.with_form(ContactFormState::begin_submit).flatten()
}

/// Asynchronous half of a submit: one call, then resolve. Never retries.
pub async fn deliver_submission<S, C>(store: &S, sender: &C, submission: ContactRequest)
where
    S: FormStore,
    C: ContactSender + ?Sized,
{
    let outcome = sender.send(&submission).await;
    if let Err(e) = &outcome {
        leptos::logging::warn!("contact submission failed: {e}");
    }
    store.with_form(|form| form.finish_submit(&outcome));
}

/// Full submit flow. Returns `false` when the gate rejected the attempt.
pub async fn submit_contact<S, C>(store: &S, sender: &C) -> bool
where
    S: FormStore,
    C: ContactSender + ?Sized,
{
    let Some(submission) = begin_submission(store) else {
        return false;
    };
    deliver_submission(store, sender, submission).await;
    true
}
