use clap::Parser;
use order_entry::{
    init_logging, load_price_list, read_price_list_file, run, CliArgs, LoggingConfig,
    OrderAggregator, PosConfig, Session,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::from_env())?;

    let cli = CliArgs::parse();
    let config = PosConfig::from_args(cli)?;

    let price_list = load_price_list(read_price_list_file, config.catalogs.clone()).await?;
    let session = Session::new(OrderAggregator::new(price_list), config.customers.clone());

    run(
        session,
        &config.currency,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
