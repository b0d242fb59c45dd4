pub mod catalog;
pub mod common;
pub mod config;
pub mod logging;
pub mod take_order;
pub mod terminal;

pub use catalog::{load_price_list, read_price_list_file, CatalogSource, PriceList};
pub use config::{CliArgs, PosConfig};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use take_order::{compute_grand_total, KeypadBuffer, OrderAggregator, OrderEvent, OrderLine};
pub use terminal::{run, Session};
