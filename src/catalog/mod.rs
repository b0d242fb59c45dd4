pub mod implementation;
pub mod price_list;


pub use implementation::{load_price_list, read_price_list_file, CatalogSource, FetchPriceList};
pub use price_list::PriceList;
