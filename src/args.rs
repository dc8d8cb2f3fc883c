//! These structs provide the CLI interface for the pgledger CLI.

use crate::model::Amount;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// pgledger: a weekly expense ledger for shared households.
///
/// The program tracks one week at a time: who is in charge, who paid what,
/// the week's market list and its total expense. Weeks roll up into months
/// of four weeks each. Everything is stored in a single JSON file in the
/// pgledger home directory, so the data survives between runs.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the current week, its entries and the running totals.
    Status,
    /// Move to the next or previous week.
    ///
    /// Moving forward always works and creates the new week's record on first
    /// visit. Moving back stops at week 1. The month follows the week: weeks
    /// 1-4 are month 1, weeks 5-8 are month 2, and so on.
    Week(WeekArgs),
    /// Set the current week's in-charge or total expense.
    Set(SetArgs),
    /// Add a payment entry or a market item to the current week.
    Add(AddArgs),
    /// Remove a payment entry or a market item from the current week.
    Remove(RemoveArgs),
    /// Close the current week's books.
    ///
    /// Finalizing is one-way: once a week is finalized it can no longer be
    /// edited, only read. There is no un-finalize.
    Finalize(FinalizeArgs),
    /// Render a printable report of the current week.
    Report(ReportArgs),
    /// Discard ALL data and start over at week 1, month 1.
    Reset(ResetArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the ledger file is held. Defaults to ~/pgledger
    #[arg(long, env = "PGLEDGER_HOME", default_value_t = default_pgledger_home())]
    pgledger_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, pgledger_home: PathBuf) -> Self {
        Self {
            log_level,
            pgledger_home: pgledger_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn pgledger_home(&self) -> &DisplayPath {
        &self.pgledger_home
    }
}

#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextPrev {
    #[default]
    Next,
    Prev,
}

serde_plain::derive_display_from_serialize!(NextPrev);
serde_plain::derive_fromstr_from_deserialize!(NextPrev);

/// Args for the `pgledger week` command.
#[derive(Debug, Parser, Clone)]
pub struct WeekArgs {
    /// The direction to move: "next" or "prev"
    direction: NextPrev,
}

impl WeekArgs {
    pub fn new(direction: NextPrev) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> NextPrev {
        self.direction
    }
}

/// Args for the `pgledger set` command.
#[derive(Debug, Parser, Clone)]
pub struct SetArgs {
    #[command(subcommand)]
    field: SetSubcommand,
}

impl SetArgs {
    pub fn field(&self) -> &SetSubcommand {
        &self.field
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum SetSubcommand {
    /// Set the person responsible for this week's collections.
    Incharge(InchargeArgs),
    /// Set this week's total expense.
    Expense(ExpenseArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct InchargeArgs {
    /// The in-charge's name.
    name: String,
}

impl InchargeArgs {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ExpenseArgs {
    /// The week's total spend, e.g. 1250.50. Must not be negative.
    amount: Amount,
}

impl ExpenseArgs {
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// Args for the `pgledger add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    #[command(subcommand)]
    entity: AddSubcommand,
}

impl AddArgs {
    pub fn entity(&self) -> &AddSubcommand {
        &self.entity
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum AddSubcommand {
    /// Record a payment toward this week's expenses.
    Payment(PaymentArgs),
    /// Add an item to this week's market list.
    Item(ItemArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct PaymentArgs {
    /// Who paid.
    payer: String,

    /// How much they paid, e.g. 250 or 33.33. Must be greater than zero.
    amount: Amount,
}

impl PaymentArgs {
    pub fn payer(&self) -> &str {
        &self.payer
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ItemArgs {
    /// The market-list entry, e.g. "rice".
    text: String,
}

impl ItemArgs {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Args for the `pgledger remove` command.
#[derive(Debug, Parser, Clone)]
pub struct RemoveArgs {
    #[command(subcommand)]
    entity: RemoveSubcommand,
}

impl RemoveArgs {
    pub fn entity(&self) -> &RemoveSubcommand {
        &self.entity
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum RemoveSubcommand {
    /// Remove a payment entry by its index, as shown by `status`.
    Payment(IndexArgs),
    /// Remove a market item by its index, as shown by `status`.
    Item(IndexArgs),
}

/// Index-based removal target plus the confirmation skip flag.
#[derive(Debug, Parser, Clone)]
pub struct IndexArgs {
    /// The zero-based index of the entry to remove.
    index: usize,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    yes: bool,
}

impl IndexArgs {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

/// Args for the `pgledger finalize` command.
#[derive(Debug, Parser, Clone)]
pub struct FinalizeArgs {
    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    yes: bool,
}

impl FinalizeArgs {
    pub fn yes(&self) -> bool {
        self.yes
    }
}

/// Args for the `pgledger report` command.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// Write the report to this file instead of printing it.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl ReportArgs {
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

/// Args for the `pgledger reset` command.
#[derive(Debug, Parser, Clone)]
pub struct ResetArgs {
    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    yes: bool,
}

impl ResetArgs {
    pub fn yes(&self) -> bool {
        self.yes
    }
}

fn default_pgledger_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("pgledger"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --pgledger-home or PGLEDGER_HOME instead of relying on the \
                default pgledger home directory. If you continue using the program right now, \
                you may have problems!",
            );
            PathBuf::from("pgledger")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
