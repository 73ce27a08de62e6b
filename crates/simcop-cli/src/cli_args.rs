use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::catalog::args::*;
pub use crate::modules::permissions::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "simcop-admin")]
#[command(about = "SIMCOP database administration")]
pub struct Cli {
    #[command(flatten)]
    pub db: DbArgs,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Add a permission to a user's list unless already present")]
    GrantPermission(PermissionArgs),
    #[command(about = "Remove a permission from a user's list")]
    RevokePermission(PermissionArgs),
    #[command(about = "Show a user's role and permissions")]
    ShowUser(ShowUserArgs),
    #[command(about = "Drop, recreate and seed the specialty_catalog table")]
    ProvisionCatalog,
    #[command(about = "List specialty_catalog rows")]
    ShowCatalog,
    #[command(about = "List the tables of the configured database")]
    ListTables,
    #[command(about = "Show the column layout of a table")]
    DescribeTable(DescribeTableArgs),
}

impl Command {
    /// Permission edits print their failures and still exit 0.
    pub fn reports_failure(&self) -> bool {
        !matches!(self, Self::GrantPermission(_) | Self::RevokePermission(_))
    }
}
