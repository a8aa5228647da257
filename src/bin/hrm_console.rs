//! Terminal front end for the HR dashboard.
//!
//! Signs in, loads the employee list through the REST gateway and prints one
//! of the dashboard pages.

use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use hrm_dashboard::{
    auth::SessionManager,
    config::Config,
    controller::{
        dashboard::DashboardOverview,
        department::DepartmentDirectory,
        employee_detail::{DetailState, EmployeeDetail},
        employee_form::{EmployeeField, EmployeeForm},
        employee_list::{EmployeeListController, LoadState},
    },
    gateway::{HttpGateway, ImageUpload},
    model::employee::Employee,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "hrm-console", about = "HR administration dashboard")]
struct Cli {
    /// Overrides API_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long, env = "HRM_USER", default_value = "admin@company.com")]
    user: String,

    #[arg(long, env = "HRM_PASSWORD", default_value = "admin")]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stat cards and department distribution
    Overview,
    /// Employee table, optionally filtered
    List {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// One employee with the active contract
    Show { id: String },
    /// Department cards with live head counts
    Departments,
    /// Add an employee
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        contract_no: Option<String>,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Change one field of an employee
    Set {
        id: String,
        field: String,
        value: String,
    },
    /// Remove an employee
    Delete { id: String },
}

fn parse_field(name: &str) -> Option<EmployeeField> {
    use strum::IntoEnumIterator;

    let wanted = name.replace(['-', '_', ' '], "").to_lowercase();
    EmployeeField::iter().find(|f| f.label().replace(' ', "").to_lowercase() == wanted)
}

fn print_row(e: &Employee) {
    println!(
        "{:<5} {:<24} {:<32} {:<18} {}",
        e.id, e.full_name, e.email, e.department, e.bank_account
    );
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let base_url = cli.base_url.unwrap_or(config.api_base_url.clone());

    let session = SessionManager::from_config(&config).login(&cli.user, &cli.password)?;
    let user = session.user();
    info!(user = %user.name, role = %user.role, last_login = %user.last_login, "Signed in");

    let writes = matches!(
        cli.command,
        Command::Add { .. } | Command::Set { .. } | Command::Delete { .. }
    );
    if writes && !session.role().can_manage_employees() {
        bail!("{} may not change employee records", session.role());
    }

    let gateway = HttpGateway::new(base_url).with_session(session);
    let mut list = EmployeeListController::new(gateway);

    if let LoadState::Failed(message) = list.load().await {
        bail!("could not load employees: {message}");
    }

    let today = Local::now().date_naive();
    let departments = DepartmentDirectory::with_defaults();

    match cli.command {
        Command::Overview => {
            let overview =
                DashboardOverview::load(list.gateway(), list.employees(), &departments, today)
                    .await;
            for card in overview.stat_cards() {
                println!("{:<20} {}", card.title, card.value);
            }
            println!();
            for (name, count) in &overview.department_distribution {
                println!("{name:<20} {}", "#".repeat(*count));
            }
        }
        Command::List { query } => {
            list.set_query(query);
            let rows = list.filtered();
            if rows.is_empty() {
                println!("No employees found");
            }
            for e in rows {
                print_row(e);
            }
        }
        Command::Show { id } => {
            let detail = EmployeeDetail::load(list.gateway(), &id, list.find(&id)).await;
            match detail.state() {
                DetailState::NotFound => bail!("employee {id} not found"),
                DetailState::Failed { message, .. } => eprintln!("warning: {message}"),
                DetailState::Ready { .. } => {}
            }

            if let Some(employee) = detail.employee() {
                let form = EmployeeForm::edit(employee.clone());
                println!("{} ({})", employee.full_name, employee.initials());
                for field in form.fields() {
                    println!("  {:<18} {}", field.label(), form.get(field));
                }
                if let Some(years) = detail.tenure_years(today) {
                    println!("  {:<18} {years} years", "Tenure");
                }
            }
            match detail.contract() {
                Some(c) => println!(
                    "  Contract {} ({}) {} -> {}",
                    c.contract_no,
                    c.duration_label(),
                    c.start_date,
                    c.end_date
                ),
                None => println!("  No active contract"),
            }
        }
        Command::Departments => {
            for card in departments.cards(list.employees()) {
                println!(
                    "{:<18} {:<18} {:>3} employees  {}",
                    card.department.name,
                    card.department.manager,
                    card.employee_count,
                    card.department.description
                );
            }
        }
        Command::Add {
            name,
            email,
            department,
            phone,
            contract_no,
            image,
        } => {
            let mut form = EmployeeForm::add(today);
            form.set(EmployeeField::FullName, name);
            form.set(EmployeeField::Email, email);
            if let Some(department) = department {
                form.set(EmployeeField::Department, department);
            }
            if let Some(phone) = phone {
                form.set(EmployeeField::Phone, phone);
            }
            if let Some(contract_no) = contract_no {
                form.set(EmployeeField::ContractNo, contract_no);
            }
            if let Some(path) = image {
                let upload = ImageUpload::from_path(&path)
                    .with_context(|| format!("cannot read {}", path.display()))?;
                form.select_image(upload);
            }

            let saved = list.save(&form).await?;
            println!("Added employee {}", saved.id);
        }
        Command::Set { id, field, value } => {
            let Some(field) = parse_field(&field) else {
                bail!("unknown field {field:?}");
            };
            let Some(employee) = list.find(&id).cloned() else {
                bail!("employee {id} not found");
            };

            let mut form = EmployeeForm::edit(employee);
            form.set(field, value);
            if !form.is_dirty() {
                println!("Nothing to change");
                return Ok(());
            }

            let saved = list.save(&form).await?;
            println!("Saved {}", saved.full_name);
        }
        Command::Delete { id } => {
            match list.delete(&id).await? {
                Some(removed) => println!("Deleted {} ({})", removed.full_name, removed.id),
                None => println!("Deleted {id}"),
            }
        }
    }

    Ok(())
}
