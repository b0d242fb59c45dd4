use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use async_fn_traits::AsyncFn1;
use futures_util::future::try_join_all;
use serde::Deserialize;
use tracing::{debug, info};

use super::price_list::PriceList;
use crate::common::simple_types::{Price, ProductName};

// ======================================================
// Section 1 : Define each step using types
// ======================================================

/// Where a catalog comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSource {
    pub(crate) path: PathBuf,
}

impl CatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub trait FetchPriceList: AsyncFn1<CatalogSource, Output = Result<PriceList>> + Copy {}
impl<T> FetchPriceList for T where T: AsyncFn1<CatalogSource, Output = Result<PriceList>> + Copy {}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogEntry {
    name: String,
    price: f64,
}

// ======================================================
// Section 2 : Implementation
// ======================================================

// ---------------------------
// Parse step
// ---------------------------

pub(crate) fn parse_price_list(text: &str) -> Result<PriceList> {
    let file: CatalogFile = toml::from_str(text).context("invalid catalog document")?;

    let entries = file
        .products
        .into_iter()
        .map(|entry| -> Result<(ProductName, Price)> {
            let name = ProductName::new(entry.name)?;
            ensure!(
                entry.price.is_finite() && entry.price >= 0.,
                "price of {} must be a non-negative number, got {}",
                name,
                entry.price
            );
            Ok((name, Price::new(entry.price)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PriceList::from_entries(entries))
}

// ---------------------------
// Fetch step
// ---------------------------

/// Reads a TOML catalog from disk.
pub async fn read_price_list_file(source: CatalogSource) -> Result<PriceList> {
    let text = tokio::fs::read_to_string(&source.path)
        .await
        .with_context(|| format!("failed to read catalog {:?}", source.path))?;
    let price_list = parse_price_list(&text)
        .with_context(|| format!("failed to load catalog {:?}", source.path))?;
    debug!(path = ?source.path, products = price_list.len(), "catalog read");
    Ok(price_list)
}

// ---------------------------
// overall load
// ---------------------------

/// Fetches every source and merges them in order, later sources overriding
/// earlier prices. With no sources the demo menu is used.
pub async fn load_price_list(
    fetch_price_list: impl FetchPriceList,
    sources: Vec<CatalogSource>,
) -> Result<PriceList> {
    if sources.is_empty() {
        info!("no catalog configured, using demo menu");
        return Ok(PriceList::demo());
    }

    let fetched = try_join_all(
        sources
            .into_iter()
            .map(|source| fetch_price_list(source)),
    )
    .await?;

    let price_list = fetched
        .into_iter()
        .fold(PriceList::default(), |mut merged, next| {
            merged.extend(next);
            merged
        });
    info!(products = price_list.len(), "catalog loaded");
    Ok(price_list)
}
