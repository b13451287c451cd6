//! The five admin pages, driven over a `Transport`.
//!
//! Each page mounts the components it needs, runs whatever requests they
//! hand out, and writes what the page would display. Failures end up as
//! inline text; only writing the output itself can fail.

use std::io::Write;

use anyhow::Result;
use employee_core::{
    EmployeeClient, EmployeeForm, EmployeeId, EmployeeLookup, EmployeePage, FormState,
    HttpRequest, ListState, LookupState, Transport,
};
use tracing::debug;

use crate::cli::{Command, UpdateArgs};

pub struct Admin<T> {
    client: EmployeeClient,
    transport: T,
}

impl<T: Transport> Admin<T> {
    pub fn new(client: EmployeeClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// Run one page. Returns `false` when the page ended in a failure
    /// message.
    pub fn run(&self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::List => self.list_page(out),
            Command::Create(args) => {
                let form = EmployeeForm::from(args);
                self.mutate(out, |page| page.form_mut().submit_create(&form))
            }
            Command::Find { id } => self.find_page(id, out),
            Command::Update { id, changes } => self.update_page(id, changes, out),
            Command::Delete { id } => self.mutate(out, |page| page.form_mut().submit_delete(id)),
        }
    }

    fn list_page(&self, out: &mut impl Write) -> Result<bool> {
        let mut page = EmployeePage::new(self.client.clone());
        self.settle_list(&mut page);
        writeln!(out, "{}", page.list().state())?;
        Ok(!matches!(page.list().state(), ListState::Failed(_)))
    }

    fn find_page(&self, id: EmployeeId, out: &mut impl Write) -> Result<bool> {
        let mut lookup = EmployeeLookup::new(self.client.clone());
        let ticket = lookup.search(id);
        lookup.complete(ticket.seq, self.transport.execute(&ticket.request));
        match lookup.state() {
            LookupState::Found(e) => {
                writeln!(out, "ID:            {}", e.id)?;
                writeln!(out, "Name:          {}", e.full_name())?;
                writeln!(out, "Email:         mailto:{}", e.email)?;
                writeln!(out, "Title:         {}", e.title)?;
                writeln!(out, "Role:          {}", e.role)?;
                writeln!(out, "Employee ID:   {}", e.employee_number)?;
                writeln!(out, "Organisation:  {}", e.organisation)?;
                Ok(true)
            }
            LookupState::Failed(message) => {
                writeln!(out, "{message}")?;
                Ok(false)
            }
            LookupState::Idle | LookupState::Loading(_) => Ok(false),
        }
    }

    /// Prefill the form from the current record, overlay the changes, and
    /// submit the full replacement.
    fn update_page(&self, id: EmployeeId, changes: UpdateArgs, out: &mut impl Write) -> Result<bool> {
        let mut lookup = EmployeeLookup::new(self.client.clone());
        let ticket = lookup.search(id);
        lookup.complete(ticket.seq, self.transport.execute(&ticket.request));
        let Some(current) = lookup.found() else {
            if let LookupState::Failed(message) = lookup.state() {
                writeln!(out, "{message}")?;
            }
            return Ok(false);
        };
        let mut form = EmployeeForm::from_employee(current);
        changes.apply(&mut form);
        self.mutate(out, |page| page.form_mut().submit_update(id, &form))
    }

    /// Mount a page, submit through its form, and show the form message
    /// followed by the list as the page leaves it.
    fn mutate(
        &self,
        out: &mut impl Write,
        submit: impl FnOnce(&mut EmployeePage) -> Option<HttpRequest>,
    ) -> Result<bool> {
        let mut page = EmployeePage::new(self.client.clone());
        self.settle_list(&mut page);

        if let Some(request) = submit(&mut page) {
            let exchange = self.transport.execute(&request);
            page.form_mut().complete(exchange);
        }
        let succeeded = matches!(page.form().state(), FormState::Succeeded(_));
        if let Some(message) = page.form().state().message() {
            writeln!(out, "{message}")?;
        }

        self.settle_list(&mut page);
        writeln!(out, "{}", page.list().state())?;
        Ok(succeeded)
    }

    /// Run list fetches until the list has caught up with the page token.
    fn settle_list(&self, page: &mut EmployeePage) {
        while let Some(ticket) = page.poll_list() {
            debug!(token = %ticket.token, "refreshing list");
            let exchange = self.transport.execute(&ticket.request);
            page.list_mut().complete(ticket.token, exchange);
        }
    }
}
