use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::catalog::CatalogSource;

const DEFAULT_CURRENCY: &str = "S/";

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "order-entry", about = "Point-of-sale order entry", version)]
pub struct CliArgs {
    #[arg(long, value_name = "FILE", help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        long = "catalog",
        env = "ORDER_ENTRY_CATALOG",
        value_name = "FILE",
        value_delimiter = ',',
        help = "TOML price list; repeat to merge several, later files win"
    )]
    pub catalogs: Option<Vec<PathBuf>>,

    #[arg(
        long,
        env = "ORDER_ENTRY_CURRENCY",
        value_name = "SYMBOL",
        help = "Currency symbol shown before totals"
    )]
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    catalogs: Option<Vec<PathBuf>>,
    currency: Option<String>,
    customers: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PosConfig {
    pub catalogs: Vec<CatalogSource>,
    pub currency: String,
    pub customers: Vec<String>,
}

impl PosConfig {
    /// Command line values win over the config file, which wins over defaults.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            catalogs: cli_catalogs,
            currency: cli_currency,
        } = args;

        let (file_config, base_dir) = match config.as_ref() {
            Some(path) => (
                load_config_file(path)?,
                path.parent().map(Path::to_path_buf),
            ),
            None => (PartialConfig::default(), None),
        };

        let PartialConfig {
            catalogs: file_catalogs,
            currency: file_currency,
            customers,
        } = file_config;

        // catalog paths in the config file are relative to the file
        let file_catalogs = file_catalogs.map(|paths| {
            paths
                .into_iter()
                .map(|path| match base_dir.as_ref() {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path,
                })
                .collect::<Vec<_>>()
        });

        let catalogs = cli_catalogs
            .or(file_catalogs)
            .unwrap_or_default()
            .into_iter()
            .map(CatalogSource::new)
            .collect();

        let currency = cli_currency
            .or(file_currency)
            .map(|symbol| symbol.trim().to_owned())
            .filter(|symbol| !symbol.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned());

        let customers = customers
            .unwrap_or_default()
            .into_iter()
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect();

        Ok(Self {
            catalogs,
            currency,
            customers,
        })
    }
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config file {:?}", path))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_to_demo_menu_and_soles() {
        let config = PosConfig::from_args(CliArgs::default()).unwrap();
        assert!(config.catalogs.is_empty());
        assert_eq!(config.currency, "S/");
        assert!(config.customers.is_empty());
    }

    #[test]
    fn reads_config_file_relative_to_itself() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pos.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "catalogs = [\"menu.toml\", \"/srv/specials.toml\"]\ncurrency = \"$\"\ncustomers = [\"ANA\", \" \"]"
        )
        .unwrap();

        let config = PosConfig::from_args(CliArgs {
            config: Some(path),
            ..CliArgs::default()
        })
        .unwrap();

        assert_eq!(
            config.catalogs,
            vec![
                CatalogSource::new(dir.path().join("menu.toml")),
                CatalogSource::new("/srv/specials.toml"),
            ]
        );
        assert_eq!(config.currency, "$");
        assert_eq!(config.customers, vec!["ANA".to_owned()]);
    }

    #[test]
    fn command_line_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "currency = \"$\"\ncatalogs = [\"a.toml\"]").unwrap();

        let config = PosConfig::from_args(CliArgs {
            config: Some(file.path().to_path_buf()),
            catalogs: Some(vec![PathBuf::from("b.toml")]),
            currency: Some("EUR".into()),
        })
        .unwrap();

        assert_eq!(config.catalogs, vec![CatalogSource::new("b.toml")]);
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"green\"").unwrap();

        let result = PosConfig::from_args(CliArgs {
            config: Some(file.path().to_path_buf()),
            ..CliArgs::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn parses_repeated_catalog_flags() {
        let args = CliArgs::try_parse_from([
            "order-entry",
            "--catalog",
            "a.toml,b.toml",
            "--catalog",
            "c.toml",
        ])
        .unwrap();
        assert_eq!(
            args.catalogs,
            Some(vec![
                PathBuf::from("a.toml"),
                PathBuf::from("b.toml"),
                PathBuf::from("c.toml"),
            ])
        );
    }
}
