use clap::Args;

#[derive(Args)]
pub struct DescribeTableArgs {
    #[arg(help = "Table in the configured database, e.g. users")]
    pub table: String,
}
