//! Command-line surface: one subcommand per admin page.

use clap::{Args, Parser, Subcommand};
use employee_core::{EmployeeForm, EmployeeId};

#[derive(Debug, Parser)]
#[command(name = "employee-admin", version, about = "Administer employee records")]
pub struct Cli {
    /// Base URL of the employee service.
    #[arg(long, env = "EMPLOYEE_API_URL", default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// Log filter, e.g. `debug` or `employee_core=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every employee.
    List,
    /// Add an employee, then show the refreshed list.
    Create(CreateArgs),
    /// Show one employee by id.
    Find { id: EmployeeId },
    /// Change an employee's fields; unspecified fields keep their values.
    Update {
        id: EmployeeId,
        #[command(flatten)]
        changes: UpdateArgs,
    },
    /// Remove an employee, then show the refreshed list.
    Delete { id: EmployeeId },
}

/// Create takes every field as typed; the form decides what is missing.
#[derive(Debug, Clone, Default, Args)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub role: String,
    #[arg(long, default_value = "")]
    pub employee_number: String,
    #[arg(long, default_value = "")]
    pub organisation: String,
}

impl From<CreateArgs> for EmployeeForm {
    fn from(args: CreateArgs) -> Self {
        EmployeeForm {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            title: args.title,
            role: args.role,
            employee_number: args.employee_number,
            organisation: args.organisation,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub employee_number: Option<String>,
    #[arg(long)]
    pub organisation: Option<String>,
}

impl UpdateArgs {
    /// Overwrite the prefilled form with whatever was passed.
    pub fn apply(self, form: &mut EmployeeForm) {
        let pairs = [
            (self.first_name, &mut form.first_name),
            (self.last_name, &mut form.last_name),
            (self.email, &mut form.email),
            (self.title, &mut form.title),
            (self.role, &mut form.role),
            (self.employee_number, &mut form.employee_number),
            (self.organisation, &mut form.organisation),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}
