use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, EmployeeCommand, parse_status};
use crate::config::Config;
use crate::core::employee::{CpfCheck, EmployeeLogic};
use crate::db::log::audit_quietly;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeeInput};
use crate::models::form::FormOutcome;
use crate::ui::messages::{field_error, info, success};
use crate::utils::colors::{RESET, color_for_status, colorize_optional};
use crate::utils::formatting::{fmt_cpf, fmt_optional_timestamp, fmt_timestamp};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;

    match action {
        EmployeeCommand::List => {
            let employees = EmployeeLogic::list(&pool)?;

            if employees.is_empty() {
                info("No employees registered yet.");
                return Ok(());
            }

            print_employees(&employees, cfg);
        }

        EmployeeCommand::Add { name, cpf } => {
            let input = EmployeeInput {
                name: name.clone(),
                cpf: cpf.clone(),
            };

            match EmployeeLogic::create(&mut pool, input)? {
                FormOutcome::Accepted(employee) => {
                    audit_quietly(
                        &pool.conn,
                        "employee_add",
                        &format!("#{}", employee.id),
                        &format!("Employee '{}' created", employee.name),
                    );
                    success(format!(
                        "Employee #{} '{}' created (CPF {}).",
                        employee.id,
                        employee.name,
                        fmt_cpf(&employee.cpf)
                    ));
                }
                FormOutcome::Rejected { input, errors } => {
                    for (field, msg) in errors.iter() {
                        field_error(field, msg);
                    }
                    return Err(AppError::Validation(format!(
                        "employee '{}' not created ({})",
                        input.name, errors
                    )));
                }
            }
        }

        EmployeeCommand::Show { id } => {
            let e = EmployeeLogic::find(&pool, *id)?;
            let updated = fmt_optional_timestamp(&e.updated_at, &cfg.date_format);

            println!("🧑 Employee #{}", e.id);
            println!("   Name    : {}", e.name);
            println!("   CPF     : {}", fmt_cpf(&e.cpf));
            println!(
                "   Status  : {}{}{}",
                color_for_status(e.status),
                e.status.label(),
                RESET
            );
            println!("   Created : {}", fmt_timestamp(&e.created_at, &cfg.date_format));
            println!("   Updated : {}", colorize_optional(&updated));
        }

        EmployeeCommand::Status { id, status } => {
            let status = parse_status(status)?;
            let e = EmployeeLogic::update_status(&mut pool, *id, status)?;

            audit_quietly(
                &pool.conn,
                "employee_status",
                &format!("#{}", e.id),
                &format!("Status set to {}", e.status.code()),
            );
            success(format!(
                "Employee #{} '{}' is now {}.",
                e.id,
                e.name,
                e.status.label().to_lowercase()
            ));
        }

        EmployeeCommand::CheckCpf { cpf, exclude } => {
            match EmployeeLogic::validate_cpf(&pool, cpf, *exclude)? {
                CpfCheck::Valid => success(format!("CPF {} is valid.", cpf)),
                CpfCheck::Invalid(msg) => {
                    field_error("cpf", msg);
                    return Err(AppError::Validation(msg.to_string()));
                }
            }
        }
    }

    Ok(())
}

fn print_employees(employees: &[Employee], cfg: &Config) {
    let mut table = Table::new(
        vec![
            Column::right("ID"),
            Column::left("NAME"),
            Column::left("CPF"),
            Column::left("STATUS"),
            Column::left("CREATED"),
            Column::left("UPDATED"),
        ],
        cfg.separator(),
    );

    for e in employees {
        table.add_row(vec![
            e.id.to_string(),
            e.name.clone(),
            fmt_cpf(&e.cpf),
            format!("{}{}{}", color_for_status(e.status), e.status.label(), RESET),
            fmt_timestamp(&e.created_at, &cfg.date_format),
            colorize_optional(&fmt_optional_timestamp(&e.updated_at, &cfg.date_format)),
        ]);
    }

    println!("👥 Employees:\n");
    print!("{}", table.render());
}
