use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::filter::TicketFilter;
use crate::models::status::Status;
use crate::utils::date::{DayBound, parse_datetime};
use crate::utils::range::parse_range_bounds;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTicket
/// CLI application to track employees and their tickets with SQLite
#[derive(Parser, Debug)]
#[command(
    name = "rticket",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple ticketing CLI: track employees, their tickets and activation status using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeCommand,
    },

    /// Manage tickets
    Ticket {
        #[command(subcommand)]
        action: TicketCommand,
    },

    /// Export the ticket report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip archive instead of a plain copy")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite the destination without asking")]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCommand {
    /// List all employees
    List,

    /// Register a new employee (starts active)
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, help = "CPF, exactly 11 characters, unique")]
        cpf: String,
    },

    /// Show one employee
    Show { id: i32 },

    /// Activate or deactivate an employee
    Status {
        id: i32,

        /// A = active, I = inactive
        status: String,
    },

    /// Check whether a CPF would be accepted
    CheckCpf {
        cpf: String,

        #[arg(long, help = "Employee id whose own CPF is not a duplicate")]
        exclude: Option<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TicketCommand {
    /// List tickets, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the active employees that can receive tickets
    Employees,

    /// Create a ticket (starts active)
    Add {
        #[arg(long = "employee", help = "Employee id")]
        employee_id: i32,

        #[arg(long, allow_negative_numbers = true)]
        quantity: i32,
    },

    /// Update quantity and status of a ticket
    Update {
        id: i32,

        #[arg(long, allow_negative_numbers = true)]
        quantity: i32,

        #[arg(long, help = "A = active, I = inactive")]
        status: String,
    },
}

/// Ticket report filter as typed on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "employee", help = "Only tickets of this employee id")]
    pub employee_id: Option<i32>,

    #[arg(
        long,
        help = "Created at or after (YYYY-MM-DD, YYYY-MM-DD HH:MM or RFC 3339)"
    )]
    pub from: Option<String>,

    #[arg(long, help = "Created at or before (a bare date covers the whole day)")]
    pub to: Option<String>,

    #[arg(
        long,
        conflicts_with_all = ["from", "to"],
        help = "Period: YYYY, YYYY-MM, YYYY-MM-DD or START:END of the same shape"
    )]
    pub range: Option<String>,

    #[arg(long, help = "A = active, I = inactive (default: both)")]
    pub status: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> AppResult<TicketFilter> {
        let (mut start, mut end) = (None, None);

        if let Some(r) = &self.range {
            let (s, e) = parse_range_bounds(r)?;
            start = Some(s);
            end = Some(e);
        }

        if let Some(f) = &self.from {
            start = Some(
                parse_datetime(f, DayBound::Start).ok_or_else(|| AppError::InvalidDate(f.clone()))?,
            );
        }

        if let Some(t) = &self.to {
            end = Some(
                parse_datetime(t, DayBound::End).ok_or_else(|| AppError::InvalidDate(t.clone()))?,
            );
        }

        let status = self.status.as_deref().map(parse_status).transpose()?;

        Ok(TicketFilter {
            employee_id: self.employee_id,
            start,
            end,
            status,
        })
    }
}

pub fn parse_status(code: &str) -> AppResult<Status> {
    Status::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_ticket_list_filters() {
        let cli = Cli::try_parse_from([
            "rticket", "ticket", "list", "--employee", "1", "--from", "2025-01-01", "--to",
            "2025-01-31", "--status", "i",
        ])
        .unwrap();

        let Commands::Ticket {
            action: TicketCommand::List { filter },
        } = cli.command
        else {
            panic!("expected ticket list");
        };

        let f = filter.to_filter().unwrap();
        assert_eq!(f.employee_id, Some(1));
        assert_eq!(f.status, Some(Status::Inactive));
        assert_eq!(f.start.unwrap().hour(), 0);
        assert_eq!(f.end.unwrap().hour(), 23);
    }

    #[test]
    fn range_conflicts_with_explicit_bounds() {
        let res = Cli::try_parse_from([
            "rticket", "ticket", "list", "--range", "2025", "--from", "2025-01-01",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn bad_status_is_reported() {
        let args = FilterArgs {
            status: Some("X".into()),
            ..FilterArgs::default()
        };
        assert!(matches!(args.to_filter(), Err(AppError::InvalidStatus(_))));
    }
}
