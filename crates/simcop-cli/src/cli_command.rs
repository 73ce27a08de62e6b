use crate::cli_args::*;
use crate::modules::catalog::{
    handle_describe_table, handle_list_tables, handle_provision, handle_show_catalog,
};
use crate::modules::permissions::{handle_grant, handle_revoke, handle_show_user};
use crate::modules::system::{connect, CommandContext, DbSettings};

pub(crate) async fn handle_command(command: Command, settings: &DbSettings) -> anyhow::Result<()> {
    println!("Connecting to MySQL at {}...", settings.target());
    let pool = connect(settings).await?;
    println!("✅ Connected to MySQL");

    let ctx = CommandContext { pool: &pool };
    let result = dispatch(command, &ctx).await;
    pool.close().await;
    result
}

async fn dispatch(command: Command, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match command {
        Command::GrantPermission(args) => handle_grant(args, ctx).await?,
        Command::RevokePermission(args) => handle_revoke(args, ctx).await?,
        Command::ShowUser(args) => handle_show_user(args, ctx).await?,
        Command::ProvisionCatalog => handle_provision(ctx).await?,
        Command::ShowCatalog => handle_show_catalog(ctx).await?,
        Command::ListTables => handle_list_tables(ctx).await?,
        Command::DescribeTable(args) => handle_describe_table(args, ctx).await?,
    }

    Ok(())
}
