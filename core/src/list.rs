//! The employee list component.
//!
//! # Design
//! The list never shares state with the forms that mutate the collection.
//! It is handed a `RefreshToken` and re-fetches whenever that token differs
//! from the last one it observed; the first token always counts as a change.
//! Resolutions are applied only for the latest token issued, so a slow
//! fetch for an older token can never overwrite a newer result.

use std::fmt;

use tracing::debug;

use crate::client::EmployeeClient;
use crate::error::LOAD_FALLBACK;
use crate::http::{Exchange, HttpRequest};
use crate::refresh::RefreshToken;
use crate::types::Employee;

pub const EMPTY_LIST_TEXT: &str = "No employees found. Please add one.";
pub const LOADING_TEXT: &str = "Loading employees...";

/// What the list currently displays. Exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Employee>),
    Failed(String),
}

impl ListState {
    /// Rows available for display; empty unless loaded.
    pub fn rows(&self) -> &[Employee] {
        match self {
            ListState::Loaded(rows) => rows,
            ListState::Loading | ListState::Failed(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}

impl fmt::Display for ListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListState::Loading => f.write_str(LOADING_TEXT),
            ListState::Failed(message) => f.write_str(message),
            ListState::Loaded(rows) if rows.is_empty() => f.write_str(EMPTY_LIST_TEXT),
            ListState::Loaded(rows) => {
                writeln!(
                    f,
                    "{:<6} {:<24} {:<28} {:<18} {:<12} {:<10} {}",
                    "ID", "NAME", "EMAIL", "TITLE", "ROLE", "NUMBER", "ORGANISATION"
                )?;
                for (i, e) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "{:<6} {:<24} {:<28} {:<18} {:<12} {:<10} {}",
                        e.id,
                        e.full_name(),
                        format!("mailto:{}", e.email),
                        e.title,
                        e.role,
                        e.employee_number,
                        e.organisation
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// A list fetch the host must execute and report back with `complete`.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub token: RefreshToken,
    pub request: HttpRequest,
}

#[derive(Debug)]
pub struct EmployeeList {
    client: EmployeeClient,
    observed: Option<RefreshToken>,
    pending: Option<RefreshToken>,
    state: ListState,
}

impl EmployeeList {
    pub fn new(client: EmployeeClient) -> Self {
        Self {
            client,
            observed: None,
            pending: None,
            state: ListState::Loading,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// The fetch awaiting resolution, if any.
    pub fn pending(&self) -> Option<RefreshToken> {
        self.pending
    }

    /// Observe `token`. Returns a fetch to run when it differs from the last
    /// token seen, and enters `Loading`; otherwise does nothing.
    pub fn sync(&mut self, token: RefreshToken) -> Option<FetchTicket> {
        if self.observed == Some(token) {
            return None;
        }
        if let Some(superseded) = self.pending {
            debug!(%superseded, %token, "list fetch superseded");
        }
        self.observed = Some(token);
        self.pending = Some(token);
        self.state = ListState::Loading;
        debug!(%token, "issuing list fetch");
        Some(FetchTicket {
            token,
            request: self.client.build_list_employees(),
        })
    }

    /// Apply the outcome of the fetch issued for `token`.
    ///
    /// Returns `false` and leaves the display untouched when the resolution
    /// belongs to a superseded token or was already applied.
    pub fn complete(&mut self, token: RefreshToken, exchange: Exchange) -> bool {
        if self.pending != Some(token) {
            debug!(%token, latest = ?self.observed, "ignoring stale list resolution");
            return false;
        }
        self.pending = None;
        self.state = match exchange.and_then(|resp| self.client.parse_list_employees(resp)) {
            Ok(rows) => {
                debug!(%token, count = rows.len(), "list loaded");
                ListState::Loaded(rows)
            }
            Err(err) => {
                debug!(%token, error = %err, "list fetch failed");
                ListState::Failed(err.user_message(LOAD_FALLBACK))
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpResponse};

    fn list() -> EmployeeList {
        EmployeeList::new(EmployeeClient::new("http://localhost:8000"))
    }

    fn ok(body: &str) -> Exchange {
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    fn one_row(name: &str) -> String {
        format!(
            r#"[{{"id":1,"first_name":"{name}","last_name":"L","email":"a@x.com",
            "title":"T","role":"R","employee_number":1,"organisation":"O"}}]"#
        )
    }

    #[test]
    fn first_sync_always_fetches() {
        let mut list = list();
        let ticket = list.sync(RefreshToken::default()).unwrap();
        assert_eq!(ticket.request.method, HttpMethod::Get);
        assert_eq!(ticket.request.path, "http://localhost:8000/v1/employees/");
        assert!(list.state().is_loading());
    }

    #[test]
    fn unchanged_token_does_not_refetch() {
        let mut list = list();
        let token = RefreshToken::default();
        list.sync(token).unwrap();
        assert!(list.complete(token, ok("[]")));
        assert!(list.sync(token).is_none());
        assert_eq!(list.state(), &ListState::Loaded(Vec::new()));
    }

    #[test]
    fn empty_collection_renders_placeholder() {
        let mut list = list();
        let token = RefreshToken::default();
        list.sync(token);
        list.complete(token, ok("[]"));
        assert!(!list.state().is_loading());
        assert_eq!(list.state().to_string(), EMPTY_LIST_TEXT);
    }

    #[test]
    fn latest_token_wins_when_resolved_out_of_order() {
        let mut list = list();
        let a = RefreshToken::default().next();
        let b = a.next();
        list.sync(a).unwrap();
        list.sync(b).unwrap();

        assert!(list.complete(b, ok(&one_row("Bravo"))));
        assert!(!list.complete(a, ok(&one_row("Alpha"))));

        assert_eq!(list.state().rows()[0].first_name, "Bravo");
    }

    #[test]
    fn stale_resolution_does_not_end_loading() {
        let mut list = list();
        let a = RefreshToken::default();
        let b = a.next();
        list.sync(a);
        list.sync(b);
        assert!(!list.complete(a, ok(&one_row("Alpha"))));
        assert!(list.state().is_loading());
        assert_eq!(list.pending(), Some(b));
    }

    #[test]
    fn duplicate_resolution_is_ignored() {
        let mut list = list();
        let token = RefreshToken::default();
        list.sync(token);
        assert!(list.complete(token, ok(&one_row("First"))));
        assert!(!list.complete(token, ok("[]")));
        assert_eq!(list.state().rows().len(), 1);
    }

    #[test]
    fn transport_failure_shows_generic_message_and_no_rows() {
        let mut list = list();
        let token = RefreshToken::default();
        list.sync(token);
        list.complete(token, Err(ApiError::Transport("connection refused".to_string())));
        assert_eq!(list.state(), &ListState::Failed(LOAD_FALLBACK.to_string()));
        assert!(list.state().rows().is_empty());
    }

    #[test]
    fn failure_then_new_token_reloads() {
        let mut list = list();
        let token = RefreshToken::default();
        list.sync(token);
        list.complete(
            token,
            Ok(HttpResponse {
                status: 503,
                headers: Vec::new(),
                body: String::new(),
            }),
        );
        assert!(matches!(list.state(), ListState::Failed(_)));
        assert!(list.sync(token).is_none(), "no automatic retry");

        let next = token.next();
        list.sync(next).unwrap();
        assert!(list.state().is_loading());
        list.complete(next, ok(&one_row("Back")));
        assert_eq!(list.state().rows().len(), 1);
    }

    #[test]
    fn loaded_rows_render_as_table() {
        let mut list = list();
        let token = RefreshToken::default();
        list.sync(token);
        list.complete(token, ok(&one_row("Ada")));
        let text = list.state().to_string();
        assert!(text.starts_with("ID"));
        assert!(text.contains("Ada L"));
        assert!(text.contains("mailto:a@x.com"));
    }
}
