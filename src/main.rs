use clap::Parser;
use pg_ledger::args::{AddSubcommand, Args, Command, RemoveSubcommand, SetSubcommand};
use pg_ledger::{commands, Home, Result, Store};
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = Home::new(args.common().pgledger_home().path())?;
    let store = Store::new(&home);

    // Route to the appropriate command handler. Destructive commands go
    // through a confirmation gate first; the core operations themselves are
    // unconditional.
    let _: () = match args.command() {
        Command::Status => commands::status(&store)?.print(),

        Command::Week(week_args) => commands::week(&store, week_args.direction())?.print(),

        Command::Set(set_args) => match set_args.field() {
            SetSubcommand::Incharge(incharge_args) => {
                commands::set_in_charge(&store, incharge_args.name())?.print()
            }
            SetSubcommand::Expense(expense_args) => {
                commands::set_expense(&store, expense_args.amount())?.print()
            }
        },

        Command::Add(add_args) => match add_args.entity() {
            AddSubcommand::Payment(payment_args) => {
                commands::add_payment(&store, payment_args.payer(), payment_args.amount())?.print()
            }
            AddSubcommand::Item(item_args) => {
                commands::add_item(&store, item_args.text())?.print()
            }
        },

        Command::Remove(remove_args) => match remove_args.entity() {
            RemoveSubcommand::Payment(index_args) => {
                let prompt = format!(
                    "Are you sure you want to remove payment entry {}?",
                    index_args.index()
                );
                if confirmed(index_args.yes(), &prompt)? {
                    commands::remove_payment(&store, index_args.index())?.print()
                } else {
                    println!("Cancelled.");
                }
            }
            RemoveSubcommand::Item(index_args) => {
                let prompt = format!(
                    "Are you sure you want to remove market item {}?",
                    index_args.index()
                );
                if confirmed(index_args.yes(), &prompt)? {
                    commands::remove_item(&store, index_args.index())?.print()
                } else {
                    println!("Cancelled.");
                }
            }
        },

        Command::Finalize(finalize_args) => {
            let prompt = "Are you sure you want to FINALIZE this week? \
                No more changes can be made once finalized.";
            if confirmed(finalize_args.yes(), prompt)? {
                commands::finalize(&store)?.print()
            } else {
                println!("Cancelled.");
            }
        }

        Command::Report(report_args) => commands::report(&store, report_args.output())?.print(),

        Command::Reset(reset_args) => {
            let prompt = "WARNING: this will clear all weeks' data and reset to week 1, \
                month 1. This cannot be undone. Continue?";
            if confirmed(reset_args.yes(), prompt)? {
                commands::reset(&store)?.print()
            } else {
                println!("Cancelled.");
            }
        }
    };
    Ok(())
}

/// Asks for confirmation on stdin before a destructive action, unless --yes
/// was given.
fn confirmed(yes: bool, prompt: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use the default log level for the
            // library and binary crates only.
            EnvFilter::new(format!(
                "pg_ledger={},{}={}",
                level,
                env!("CARGO_CRATE_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
