use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_CUSTOMER_LABEL: &str = "Messrs";
const DEFAULT_PO_LABEL: &str = "S/C";
const DEFAULT_SENTINEL: &str = "CTN";
const DEFAULT_SCAN_ROWS: usize = 5;
const DEFAULT_HTTP_BIND: &str = "127.0.0.1:8079";

/// Column names expected in the tabular section's header row.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnNames {
    pub carton: String,
    pub sku: String,
    pub quantity: String,
    pub net_weight: String,
    pub gross_weight: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            carton: "CTN".to_string(),
            sku: "SKU".to_string(),
            quantity: "Quantity".to_string(),
            net_weight: "N.W".to_string(),
            gross_weight: "G.W".to_string(),
        }
    }
}

impl ColumnNames {
    /// Required columns in the order they are reported when missing.
    pub fn required(&self) -> [&str; 5] {
        [
            &self.carton,
            &self.sku,
            &self.quantity,
            &self.net_weight,
            &self.gross_weight,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Substring marking the customer label in the metadata block.
    pub customer_label: String,
    /// Substring marking the purchase-order label.
    pub po_label: String,
    /// Substring in column 0 marking the tabular header row.
    pub sentinel: String,
    pub columns: ColumnNames,
    /// How many leading rows the metadata/header window covers.
    pub scan_rows: usize,
    pub http_bind_address: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            customer_label: DEFAULT_CUSTOMER_LABEL.to_string(),
            po_label: DEFAULT_PO_LABEL.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            columns: ColumnNames::default(),
            scan_rows: DEFAULT_SCAN_ROWS,
            http_bind_address: DEFAULT_HTTP_BIND
                .parse()
                .expect("default bind address valid"),
        }
    }
}

impl AppConfig {
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let file_config = if let Some(path) = args.config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let mut config = Self::default();
        if let Some(label) = file_config.customer_label {
            config.customer_label = label;
        }
        if let Some(label) = file_config.po_label {
            config.po_label = label;
        }
        if let Some(sentinel) = file_config.sentinel {
            config.sentinel = sentinel;
        }
        if let Some(columns) = file_config.columns {
            config.columns = columns;
        }
        if let Some(scan_rows) = file_config.scan_rows {
            config.scan_rows = scan_rows.max(1);
        }
        if let Some(bind) = file_config.http_bind {
            config.http_bind_address = bind;
        }
        if let Command::Serve { bind: Some(bind) } = &args.command {
            config.http_bind_address = *bind;
        }

        anyhow::ensure!(
            !config.sentinel.trim().is_empty(),
            "header sentinel must not be empty"
        );
        Ok(config)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "packlist-summary",
    about = "Carton-level summaries from packing-list workbooks",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Process a single workbook and write the CSV beside it.
    Run {
        #[arg(
            value_name = "FILE",
            help = "Workbook to process; prompted for when omitted"
        )]
        file: Option<PathBuf>,
    },
    /// Serve the interactive upload page.
    Serve {
        #[arg(
            long,
            env = "PACKLIST_HTTP_BIND",
            value_name = "ADDR",
            help = "Address to bind the upload server to"
        )]
        bind: Option<SocketAddr>,
    },
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    customer_label: Option<String>,
    po_label: Option<String>,
    sentinel: Option<String>,
    columns: Option<ColumnNames>,
    scan_rows: Option<usize>,
    http_bind: Option<SocketAddr>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
