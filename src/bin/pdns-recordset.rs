use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pdns_recordset::{
    RecordSet, RecordSetReconciler,
    config::{ClientConfig, DEFAULT_SERVER_ID},
    powerdns::client::PowerDnsClient,
};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    /// PowerDNS server URL (e.g. http://127.0.0.1:8081)
    #[arg(long, value_name = "URL", env = "PDNS_SERVER_URL")]
    server_url: String,
    /// PowerDNS API key
    #[arg(long, value_name = "KEY", env = "PDNS_API_KEY", hide_env_values = true)]
    api_key: String,
    /// PowerDNS server ID
    #[arg(long, value_name = "ID", env = "PDNS_SERVER_ID", default_value = DEFAULT_SERVER_ID)]
    server_id: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace a record set (or delete it when no --record is given)
    Create {
        #[arg(long, value_name = "ZONE")]
        zone: String,
        #[arg(long, value_name = "FQDN")]
        name: String,
        #[arg(long = "type", value_name = "TYPE")]
        rrtype: String,
        #[arg(long, value_name = "SECONDS")]
        ttl: u32,
        /// Record content (repeat for multiple values)
        #[arg(long = "record", value_name = "CONTENT")]
        records: Vec<String>,
        /// Let the server create PTR records and remove them on delete
        #[arg(long)]
        set_ptr: bool,
    },
    /// Show the current state of a record set
    Read {
        #[arg(long, value_name = "ZONE")]
        zone: String,
        #[arg(long, value_name = "ID")]
        id: String,
    },
    /// Delete a record set and, for PTR-shadowed sets, its PTR records
    Delete {
        #[arg(long, value_name = "ZONE")]
        zone: String,
        #[arg(long, value_name = "ID")]
        id: String,
    },
    /// Check whether a record set exists
    Exists {
        #[arg(long, value_name = "ZONE")]
        zone: String,
        #[arg(long, value_name = "FQDN")]
        name: String,
        #[arg(long = "type", value_name = "TYPE")]
        rrtype: String,
    },
    /// Resolve an identifier into the stored record set
    Import {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Serialize)]
struct Created {
    id: String,
    #[serde(flatten)]
    state: RecordSet,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ClientConfig {
        server_url: cli.server_url,
        api_key: cli.api_key,
        server_id: cli.server_id,
    };
    let client = PowerDnsClient::connect(&config)
        .await
        .context("failed to connect to PowerDNS")?;
    let reconciler = RecordSetReconciler::new(Arc::new(client));

    match cli.command {
        Command::Create {
            zone,
            name,
            rrtype,
            ttl,
            records,
            set_ptr,
        } => {
            let desired = RecordSet::new(zone, name, rrtype, ttl)
                .with_contents(records)
                .with_ptr_shadow(set_ptr);
            let (id, state) = reconciler.create(&desired).await?;
            print_json(&Created { id, state })?;
        }
        Command::Read { zone, id } => match reconciler.read(&zone, &id).await? {
            Some(state) => print_json(&state)?,
            None => bail!("record set '{id}' no longer exists in zone {zone}"),
        },
        Command::Delete { zone, id } => match reconciler.read(&zone, &id).await? {
            Some(state) => {
                reconciler.delete(&state).await?;
                info!("deleted {id}");
            }
            None => info!("record set '{id}' already absent"),
        },
        Command::Exists { zone, name, rrtype } => {
            let exists = reconciler.exists(&zone, &name, &rrtype).await?;
            print_json(&serde_json::json!({ "exists": exists }))?;
        }
        Command::Import { id } => {
            let state = reconciler.import(&id).await?;
            print_json(&Created { id, state })?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
