use simcop_core::{
    describe_table, list_catalog, list_tables, provision_catalog, ProvisionStep,
    SPECIALTY_CATALOG_TABLE,
};

use super::format::{format_table_list, print_catalog_table, print_columns};
use crate::cli_args::DescribeTableArgs;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_provision(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let report = provision_catalog(&ctx.store(), |step| match step {
        ProvisionStep::DroppingTable => println!("Dropping existing table if any..."),
        ProvisionStep::CreatingTable => {
            println!("Creating {SPECIALTY_CATALOG_TABLE} table...");
        }
        ProvisionStep::Seeding { rows } => println!("Inserting seed data ({rows} rows)..."),
    })
    .await?;

    println!("✓ Table created successfully!");
    println!("✓ Seed data inserted ({} rows)!", report.inserted);
    println!();
    print_catalog_table(&report.entries);
    Ok(())
}

pub(crate) async fn handle_show_catalog(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let entries = list_catalog(&ctx.store()).await?;
    if entries.is_empty() {
        println!("{SPECIALTY_CATALOG_TABLE} is empty");
        return Ok(());
    }
    print_catalog_table(&entries);
    Ok(())
}

pub(crate) async fn handle_list_tables(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let tables = list_tables(&ctx.store()).await?;
    for line in format_table_list(&tables) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) async fn handle_describe_table(
    args: DescribeTableArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let columns = describe_table(&ctx.store(), &args.table).await?;
    println!("--- Structure of {} ---", args.table.trim());
    print_columns(&columns);
    Ok(())
}
