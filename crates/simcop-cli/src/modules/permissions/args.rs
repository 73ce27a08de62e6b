use clap::Args;
use simcop_core::{DEFAULT_PERMISSION, DEFAULT_TARGET_USERNAME};

#[derive(Args)]
pub struct PermissionArgs {
    #[arg(long, default_value = DEFAULT_TARGET_USERNAME)]
    pub username: String,
    #[arg(long, default_value = DEFAULT_PERMISSION, help = "Capability token, e.g. PERSONNEL")]
    pub permission: String,
}

#[derive(Args)]
pub struct ShowUserArgs {
    #[arg(default_value = DEFAULT_TARGET_USERNAME)]
    pub username: String,
}
