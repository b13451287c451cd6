//! The create/update/delete form component.
//!
//! # Design
//! A form submits one mutation at a time and reports success to a
//! caller-supplied completion hook. It never reaches into the list; the
//! page that composes both decides what a completed mutation means.
//! The hook fires exactly once per successful mutation and never on failure.

use tracing::{info, warn};

use crate::client::EmployeeClient;
use crate::error::{ApiError, SAVE_FALLBACK};
use crate::http::{Exchange, HttpRequest};
use crate::types::{EmployeeFields, EmployeeForm, EmployeeId};

/// A mutation the form can submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(EmployeeFields),
    Update(EmployeeId, EmployeeFields),
    Delete(EmployeeId),
}

/// A mutation the server confirmed, passed to the completion hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completed {
    Created,
    Updated(EmployeeId),
    Deleted(EmployeeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl FormState {
    pub fn message(&self) -> Option<&str> {
        match self {
            FormState::Succeeded(msg) | FormState::Failed(msg) => Some(msg),
            FormState::Idle | FormState::Submitting => None,
        }
    }
}

pub struct MutationForm<H> {
    client: EmployeeClient,
    state: FormState,
    in_flight: Option<Completed>,
    on_complete: H,
}

impl<H: FnMut(Completed)> MutationForm<H> {
    pub fn new(client: EmployeeClient, on_complete: H) -> Self {
        Self {
            client,
            state: FormState::Idle,
            in_flight: None,
            on_complete,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validate `form` and submit it as a new employee.
    pub fn submit_create(&mut self, form: &EmployeeForm) -> Option<HttpRequest> {
        match form.validate() {
            Ok(fields) => self.submit(Mutation::Create(fields)),
            Err(err) => self.reject(err.into()),
        }
    }

    /// Validate `form` and submit it as the full replacement of `id`.
    pub fn submit_update(&mut self, id: EmployeeId, form: &EmployeeForm) -> Option<HttpRequest> {
        match form.validate() {
            Ok(fields) => self.submit(Mutation::Update(id, fields)),
            Err(err) => self.reject(err.into()),
        }
    }

    pub fn submit_delete(&mut self, id: EmployeeId) -> Option<HttpRequest> {
        self.submit(Mutation::Delete(id))
    }

    /// Build the request for `mutation` and enter `Submitting`.
    ///
    /// Returns `None` while a previous submission is still in flight, or
    /// when the request cannot be built (the form then shows the failure).
    pub fn submit(&mut self, mutation: Mutation) -> Option<HttpRequest> {
        if self.in_flight.is_some() {
            warn!("submission ignored: previous mutation still in flight");
            return None;
        }
        let built = match &mutation {
            Mutation::Create(fields) => self
                .client
                .build_create_employee(fields)
                .map(|req| (req, Completed::Created)),
            Mutation::Update(id, fields) => self
                .client
                .build_update_employee(*id, fields)
                .map(|req| (req, Completed::Updated(*id))),
            Mutation::Delete(id) => Ok((
                self.client.build_delete_employee(*id),
                Completed::Deleted(*id),
            )),
        };
        match built {
            Ok((request, completed)) => {
                self.in_flight = Some(completed);
                self.state = FormState::Submitting;
                Some(request)
            }
            Err(err) => self.reject(err),
        }
    }

    /// Apply the outcome of the in-flight submission.
    ///
    /// Returns the confirmed mutation when the server accepted it. Calls
    /// with nothing in flight are ignored.
    pub fn complete(&mut self, exchange: Exchange) -> Option<Completed> {
        let completed = self.in_flight.take()?;
        let parsed = exchange.and_then(|resp| match completed {
            Completed::Created => self.client.parse_create_employee(resp),
            Completed::Updated(_) => self.client.parse_update_employee(resp),
            Completed::Deleted(_) => self.client.parse_delete_employee(resp),
        });
        match parsed {
            Ok(message) => {
                info!(?completed, %message, "mutation confirmed");
                self.state = FormState::Succeeded(message);
                (self.on_complete)(completed);
                Some(completed)
            }
            Err(err) => {
                warn!(?completed, error = %err, "mutation failed");
                self.state = FormState::Failed(err.user_message(SAVE_FALLBACK));
                None
            }
        }
    }

    fn reject(&mut self, err: ApiError) -> Option<HttpRequest> {
        self.state = FormState::Failed(err.user_message(SAVE_FALLBACK));
        None
    }
}
