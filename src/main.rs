use aws_network_inventory::output::{print_json, print_rows};
use aws_network_inventory::{Caller, InventoryConfig, InventoryService};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::path::Path;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Resource {
    Instances,
    Subnets,
    RouteTables,
    Vpcs,
    SecurityGroups,
    InternetGateways,
    NatGateways,
    ElasticIps,
    NetworkInterfaces,
    All,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Table,
}

/// Print the EC2 network inventory of a member's AWS account.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Resource type to list
    #[arg(value_enum)]
    resource: Resource,

    /// Member email the credentials are registered under
    #[arg(long, env = "INVENTORY_EMAIL")]
    email: String,

    /// Member company name
    #[arg(long, env = "INVENTORY_COMPANY")]
    company: String,

    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Override the configured AWS region
    #[arg(long)]
    region: Option<String>,

    /// Override the configured membership service URL
    #[arg(long)]
    member_service_url: Option<String>,
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder()
            .target(log4rs::append::console::Target::Stderr)
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

macro_rules! emit {
    ($format:expr, $label:expr, $items:expr) => {{
        let items = $items;
        match $format {
            Format::Json => print_json(&items)?,
            Format::Table => print_rows($label, &items),
        }
    }};
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    let cli = Cli::parse();
    log::info!("#Start main() resource={:?}", cli.resource);

    let mut config = InventoryConfig::from_env()?;
    if let Some(region) = cli.region {
        config.region = region;
    }
    if let Some(url) = cli.member_service_url {
        config.member_service_url = url.trim_end_matches('/').to_string();
    }

    let service = InventoryService::from_config(config)?;
    let caller = Caller::new(cli.email, cli.company);

    match cli.resource {
        Resource::Instances => emit!(
            cli.format,
            "instances",
            service.fetch_ec2_instances(&caller).await?
        ),
        Resource::Subnets => emit!(
            cli.format,
            "subnets",
            service.fetch_subnets(&caller).await?
        ),
        Resource::RouteTables => emit!(
            cli.format,
            "route tables",
            service.fetch_route_tables(&caller).await?
        ),
        Resource::Vpcs => emit!(
            cli.format,
            "VPCs",
            service.fetch_vpcs(&caller).await?
        ),
        Resource::SecurityGroups => emit!(
            cli.format,
            "security groups",
            service.fetch_security_groups(&caller).await?
        ),
        Resource::InternetGateways => emit!(
            cli.format,
            "internet gateways",
            service.fetch_internet_gateways(&caller).await?
        ),
        Resource::NatGateways => emit!(
            cli.format,
            "NAT gateways",
            service.fetch_nat_gateways(&caller).await?
        ),
        Resource::ElasticIps => emit!(
            cli.format,
            "elastic IPs",
            service.fetch_elastic_ips(&caller).await?
        ),
        Resource::NetworkInterfaces => emit!(
            cli.format,
            "network interfaces",
            service.fetch_network_interfaces(&caller).await?
        ),
        Resource::All => {
            let snapshot = service.fetch_snapshot(&caller).await?;
            match cli.format {
                Format::Json => print_json(&snapshot)?,
                Format::Table => {
                    print_rows("instances", &snapshot.instances);
                    print_rows("VPCs", &snapshot.vpcs);
                    print_rows("security groups", &snapshot.security_groups);
                    print_rows("internet gateways", &snapshot.internet_gateways);
                    print_rows("NAT gateways", &snapshot.nat_gateways);
                    print_rows("elastic IPs", &snapshot.elastic_ips);
                }
            }
        }
    }

    log::info!("#End main()");
    Ok(())
}
