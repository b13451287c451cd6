//! A page composing the employee list with a mutation form.
//!
//! # Design
//! The page owns the refresh token. The form's completion hook bumps it,
//! and the page hands the current value down to the list on every
//! `poll_list`. The list and the form never see each other.

use crate::client::EmployeeClient;
use crate::form::{Completed, MutationForm};
use crate::list::{EmployeeList, FetchTicket};
use crate::refresh::{RefreshCounter, RefreshToken};

pub type CompletionHook = Box<dyn FnMut(Completed)>;

pub struct EmployeePage {
    refresh: RefreshCounter,
    list: EmployeeList,
    form: MutationForm<CompletionHook>,
}

impl EmployeePage {
    pub fn new(client: EmployeeClient) -> Self {
        let refresh = RefreshCounter::new();
        let handle = refresh.clone();
        let hook: CompletionHook = Box::new(move |_| {
            handle.bump();
        });
        Self {
            refresh,
            list: EmployeeList::new(client.clone()),
            form: MutationForm::new(client, hook),
        }
    }

    pub fn token(&self) -> RefreshToken {
        self.refresh.current()
    }

    pub fn list(&self) -> &EmployeeList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut EmployeeList {
        &mut self.list
    }

    pub fn form(&self) -> &MutationForm<CompletionHook> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MutationForm<CompletionHook> {
        &mut self.form
    }

    /// Pass the current token down to the list; returns a fetch to run if
    /// the token changed since the list last saw it.
    pub fn poll_list(&mut self) -> Option<FetchTicket> {
        let token = self.refresh.current();
        self.list.sync(token)
    }
}
