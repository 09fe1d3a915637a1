use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, TicketCommand, parse_status};
use crate::config::Config;
use crate::core::ticket::{TicketLogic, TicketReport};
use crate::db::log::audit_quietly;
use crate::errors::AppResult;
use crate::models::ticket::TicketInput;
use crate::ui::messages::{info, success};
use crate::utils::colors::{BOLD, RESET, color_for_status, colorize_optional};
use crate::utils::formatting::{fmt_cpf, fmt_optional_timestamp, fmt_timestamp};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Ticket { action } = cmd else {
        return Ok(());
    };

    match action {
        TicketCommand::List { filter } => {
            let filter = filter.to_filter()?;
            let pool = open_pool(cfg)?;
            let report = TicketLogic::list(&pool, filter)?;

            if report.is_empty() {
                info("No tickets match the given filters.");
                return Ok(());
            }

            print_report(&report, cfg);
        }

        TicketCommand::Employees => {
            let pool = open_pool(cfg)?;
            let employees = TicketLogic::active_employees(&pool)?;

            if employees.is_empty() {
                info("No active employees.");
                return Ok(());
            }

            let mut table = Table::new(
                vec![Column::right("ID"), Column::left("NAME"), Column::left("CPF")],
                cfg.separator(),
            );
            for e in &employees {
                table.add_row(vec![e.id.to_string(), e.name.clone(), fmt_cpf(&e.cpf)]);
            }

            println!("👥 Active employees:\n");
            print!("{}", table.render());
        }

        TicketCommand::Add {
            employee_id,
            quantity,
        } => {
            let mut pool = open_pool(cfg)?;
            let input = TicketInput {
                employee_id: *employee_id,
                quantity: *quantity,
            };
            let ticket = TicketLogic::create(&mut pool, input)?;

            audit_quietly(
                &pool.conn,
                "ticket_add",
                &format!("#{}", ticket.id),
                &format!(
                    "Ticket for employee #{} (quantity {})",
                    ticket.employee_id, ticket.quantity
                ),
            );
            success(format!(
                "Ticket #{} created for employee #{} (quantity {}).",
                ticket.id, ticket.employee_id, ticket.quantity
            ));
        }

        TicketCommand::Update {
            id,
            quantity,
            status,
        } => {
            let status = parse_status(status)?;
            let mut pool = open_pool(cfg)?;
            let ticket = TicketLogic::update(&mut pool, *id, *quantity, status)?;

            audit_quietly(
                &pool.conn,
                "ticket_update",
                &format!("#{}", ticket.id),
                &format!(
                    "Quantity {}, status {}",
                    ticket.quantity,
                    ticket.status.code()
                ),
            );
            success(format!(
                "Ticket #{} updated (quantity {}, {}).",
                ticket.id,
                ticket.quantity,
                ticket.status.label().to_lowercase()
            ));
        }
    }

    Ok(())
}

fn print_report(report: &TicketReport, cfg: &Config) {
    let mut table = Table::new(
        vec![
            Column::right("ID"),
            Column::left("EMPLOYEE"),
            Column::right("QTY"),
            Column::left("STATUS"),
            Column::left("CREATED"),
            Column::left("UPDATED"),
        ],
        cfg.separator(),
    );

    for t in &report.tickets {
        table.add_row(vec![
            t.id.to_string(),
            format!("#{} {}", t.employee_id, report.employee_name(t)),
            t.quantity.to_string(),
            format!("{}{}{}", color_for_status(t.status), t.status.label(), RESET),
            fmt_timestamp(&t.created_at, &cfg.date_format),
            colorize_optional(&fmt_optional_timestamp(&t.updated_at, &cfg.date_format)),
        ]);
    }

    println!("🎫 Tickets:\n");
    print!("{}", table.render());
    println!(
        "\n{}Total: {} ticket(s), quantity {}{}",
        BOLD,
        report.tickets.len(),
        report.total_quantity(),
        RESET
    );
}
