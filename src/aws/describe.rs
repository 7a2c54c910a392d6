//! EC2 describe calls.
//!
//! Every call is issued without filters and without following pagination
//! tokens, so it returns whatever the first page of the account/region holds.

use crate::error::{InventoryError, Result};
use async_trait::async_trait;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::{
    Address, Instance, InternetGateway, NatGateway, NetworkInterface, RouteTable, SecurityGroup,
    Subnet, Vpc,
};
use aws_sdk_ec2::Client;

/// One read-only describe call per resource type.
#[async_trait]
pub trait Ec2Describe: Send + Sync {
    /// DescribeInstances, flattened across reservations.
    async fn instances(&self) -> Result<Vec<Instance>>;
    async fn subnets(&self) -> Result<Vec<Subnet>>;
    async fn route_tables(&self) -> Result<Vec<RouteTable>>;
    async fn vpcs(&self) -> Result<Vec<Vpc>>;
    async fn security_groups(&self) -> Result<Vec<SecurityGroup>>;
    async fn internet_gateways(&self) -> Result<Vec<InternetGateway>>;
    async fn nat_gateways(&self) -> Result<Vec<NatGateway>>;
    /// DescribeAddresses (elastic IPs).
    async fn addresses(&self) -> Result<Vec<Address>>;
    async fn network_interfaces(&self) -> Result<Vec<NetworkInterface>>;
}

fn describe_failed<E>(operation: &'static str) -> impl FnOnce(E) -> InventoryError
where
    E: std::error::Error,
{
    move |e| {
        let message = DisplayErrorContext(e).to_string();
        log::error!("{operation} failed: {message}");
        InventoryError::provider(operation, message)
    }
}

fn log_count<T>(operation: &str, items: Vec<T>) -> Vec<T> {
    log::info!("{operation} returned {} item(s)", items.len());
    items
}

#[async_trait]
impl Ec2Describe for Client {
    async fn instances(&self) -> Result<Vec<Instance>> {
        let resp = self
            .describe_instances()
            .send()
            .await
            .map_err(describe_failed("DescribeInstances"))?;
        let instances = resp
            .reservations()
            .iter()
            .flat_map(|r| r.instances().iter().cloned())
            .collect();
        Ok(log_count("DescribeInstances", instances))
    }

    async fn subnets(&self) -> Result<Vec<Subnet>> {
        let resp = self
            .describe_subnets()
            .send()
            .await
            .map_err(describe_failed("DescribeSubnets"))?;
        Ok(log_count("DescribeSubnets", resp.subnets().to_vec()))
    }

    async fn route_tables(&self) -> Result<Vec<RouteTable>> {
        let resp = self
            .describe_route_tables()
            .send()
            .await
            .map_err(describe_failed("DescribeRouteTables"))?;
        Ok(log_count("DescribeRouteTables", resp.route_tables().to_vec()))
    }

    async fn vpcs(&self) -> Result<Vec<Vpc>> {
        let resp = self
            .describe_vpcs()
            .send()
            .await
            .map_err(describe_failed("DescribeVpcs"))?;
        Ok(log_count("DescribeVpcs", resp.vpcs().to_vec()))
    }

    async fn security_groups(&self) -> Result<Vec<SecurityGroup>> {
        let resp = self
            .describe_security_groups()
            .send()
            .await
            .map_err(describe_failed("DescribeSecurityGroups"))?;
        Ok(log_count(
            "DescribeSecurityGroups",
            resp.security_groups().to_vec(),
        ))
    }

    async fn internet_gateways(&self) -> Result<Vec<InternetGateway>> {
        let resp = self
            .describe_internet_gateways()
            .send()
            .await
            .map_err(describe_failed("DescribeInternetGateways"))?;
        Ok(log_count(
            "DescribeInternetGateways",
            resp.internet_gateways().to_vec(),
        ))
    }

    async fn nat_gateways(&self) -> Result<Vec<NatGateway>> {
        let resp = self
            .describe_nat_gateways()
            .send()
            .await
            .map_err(describe_failed("DescribeNatGateways"))?;
        Ok(log_count("DescribeNatGateways", resp.nat_gateways().to_vec()))
    }

    async fn addresses(&self) -> Result<Vec<Address>> {
        let resp = self
            .describe_addresses()
            .send()
            .await
            .map_err(describe_failed("DescribeAddresses"))?;
        Ok(log_count("DescribeAddresses", resp.addresses().to_vec()))
    }

    async fn network_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        let resp = self
            .describe_network_interfaces()
            .send()
            .await
            .map_err(describe_failed("DescribeNetworkInterfaces"))?;
        Ok(log_count(
            "DescribeNetworkInterfaces",
            resp.network_interfaces().to_vec(),
        ))
    }
}
