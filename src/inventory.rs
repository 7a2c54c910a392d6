//! Inventory operations.
//!
//! The free functions run against an already-connected [`Ec2Describe`]
//! provider and issue their describe calls one after another.
//! [`InventoryService`] wraps them with per-request credential resolution and
//! client construction.

use crate::aws::{Ec2ClientFactory, Ec2Describe, ProviderFactory};
use crate::config::InventoryConfig;
use crate::error::{InventoryError, Result};
use crate::membership::{
    AwsKeys, Caller, CredentialLookup, CredentialSource, MemberCredentialResolver,
};
use crate::models::{
    Ec2Instance, ElasticIpSummary, InternetGatewaySummary, NatGatewayRecord, NatGatewaySummary,
    NetworkInterfaceSummary, RouteTableRecord, RouteTableSummary, SecurityGroupSummary,
    SubnetSummary, VpcRecord, VpcSummary,
};
use crate::processing::{join_nat_gateways, join_route_tables, join_vpcs, AssociationMode};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub async fn fetch_ec2_instances<P: Ec2Describe + ?Sized>(
    provider: &P,
) -> Result<Vec<Ec2Instance>> {
    let instances = provider.instances().await?;
    Ok(instances.iter().map(Ec2Instance::from).collect())
}

pub async fn fetch_subnets<P: Ec2Describe + ?Sized>(provider: &P) -> Result<Vec<SubnetSummary>> {
    let subnets = provider.subnets().await?;
    Ok(subnets.iter().map(SubnetSummary::from).collect())
}

async fn fetch_route_table_records<P: Ec2Describe + ?Sized>(
    provider: &P,
) -> Result<Vec<RouteTableRecord>> {
    let tables = provider.route_tables().await?;
    Ok(tables.iter().map(RouteTableRecord::from).collect())
}

/// Route tables joined with every subnet of the account.
pub async fn fetch_route_tables<P: Ec2Describe + ?Sized>(
    provider: &P,
    mode: AssociationMode,
) -> Result<Vec<RouteTableSummary>> {
    let subnets = fetch_subnets(provider).await?;
    let tables = fetch_route_table_records(provider).await?;
    Ok(join_route_tables(tables, &subnets, mode))
}

/// VPCs with their subnets and route tables.
///
/// Subnets are described once and used for both the route table join and
/// the VPC join.
pub async fn fetch_vpcs<P: Ec2Describe + ?Sized>(
    provider: &P,
    mode: AssociationMode,
) -> Result<Vec<VpcSummary>> {
    let vpcs: Vec<VpcRecord> = provider.vpcs().await?.iter().map(VpcRecord::from).collect();
    let subnets = fetch_subnets(provider).await?;
    let tables = fetch_route_table_records(provider).await?;
    let route_tables = join_route_tables(tables, &subnets, mode);
    Ok(join_vpcs(vpcs, &subnets, &route_tables))
}

pub async fn fetch_security_groups<P: Ec2Describe + ?Sized>(
    provider: &P,
) -> Result<Vec<SecurityGroupSummary>> {
    let groups = provider.security_groups().await?;
    Ok(groups.iter().map(SecurityGroupSummary::from).collect())
}

pub async fn fetch_internet_gateways<P: Ec2Describe + ?Sized>(
    provider: &P,
) -> Result<Vec<InternetGatewaySummary>> {
    let gateways = provider.internet_gateways().await?;
    Ok(gateways.iter().map(InternetGatewaySummary::from).collect())
}

/// NAT gateways with the network interfaces named in their address lists.
pub async fn fetch_nat_gateways<P: Ec2Describe + ?Sized>(
    provider: &P,
) -> Result<Vec<NatGatewaySummary>> {
    let gateways: Vec<NatGatewayRecord> = provider
        .nat_gateways()
        .await?
        .iter()
        .map(NatGatewayRecord::from)
        .collect();
    let interfaces = fetch_network_interfaces(provider).await?;
    Ok(join_nat_gateways(gateways, &interfaces))
}

pub async fn fetch_elastic_ips<P: Ec2Describe + ?Sized>(
    provider: &P,
) -> Result<Vec<ElasticIpSummary>> {
    let addresses = provider.addresses().await?;
    Ok(addresses.iter().map(ElasticIpSummary::from).collect())
}

pub async fn fetch_network_interfaces<P: Ec2Describe + ?Sized>(
    provider: &P,
) -> Result<Vec<NetworkInterfaceSummary>> {
    let interfaces = provider.network_interfaces().await?;
    Ok(interfaces.iter().map(NetworkInterfaceSummary::from).collect())
}

/// Every resource type gathered in one request.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub fetched_at: DateTime<Utc>,
    pub region: String,
    pub instances: Vec<Ec2Instance>,
    pub vpcs: Vec<VpcSummary>,
    pub security_groups: Vec<SecurityGroupSummary>,
    pub internet_gateways: Vec<InternetGatewaySummary>,
    pub nat_gateways: Vec<NatGatewaySummary>,
    pub elastic_ips: Vec<ElasticIpSummary>,
}

/// Gather a full snapshot. Subnets and route tables are embedded in `vpcs`,
/// network interfaces in `nat_gateways`.
pub async fn fetch_snapshot<P: Ec2Describe + ?Sized>(
    provider: &P,
    region: &str,
    mode: AssociationMode,
) -> Result<InventorySnapshot> {
    Ok(InventorySnapshot {
        fetched_at: Utc::now(),
        region: region.to_string(),
        instances: fetch_ec2_instances(provider).await?,
        vpcs: fetch_vpcs(provider, mode).await?,
        security_groups: fetch_security_groups(provider).await?,
        internet_gateways: fetch_internet_gateways(provider).await?,
        nat_gateways: fetch_nat_gateways(provider).await?,
        elastic_ips: fetch_elastic_ips(provider).await?,
    })
}

/// Entry point for inventory requests made on behalf of a caller.
///
/// Each call resolves the caller's credentials and builds a new provider
/// client. Nothing is kept between calls.
pub struct InventoryService<C = MemberCredentialResolver, F = Ec2ClientFactory> {
    credentials: C,
    factory: F,
    config: InventoryConfig,
}

impl InventoryService {
    /// Service backed by the membership service and the AWS SDK.
    pub fn from_config(config: InventoryConfig) -> Result<Self> {
        let credentials = MemberCredentialResolver::new(&config)?;
        Ok(InventoryService::new(credentials, Ec2ClientFactory, config))
    }
}

impl<C, F> InventoryService<C, F>
where
    C: CredentialSource,
    F: ProviderFactory,
{
    pub fn new(credentials: C, factory: F, config: InventoryConfig) -> Self {
        InventoryService {
            credentials,
            factory,
            config,
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Resolve the caller's credentials, failing the request if none exist.
    pub async fn resolve_credentials(&self, caller: &Caller) -> Result<AwsKeys> {
        match self.credentials.lookup(caller).await {
            CredentialLookup::Found(keys) => Ok(keys),
            CredentialLookup::NotFound(reason) => Err(InventoryError::InvalidArgument(format!(
                "no credentials for {} ({}): {reason}",
                caller.email, caller.company_name
            ))),
        }
    }

    async fn connect(&self, caller: &Caller) -> Result<F::Provider> {
        let keys = self.resolve_credentials(caller).await?;
        self.factory.connect(&keys, &self.config.region).await
    }

    pub async fn fetch_ec2_instances(&self, caller: &Caller) -> Result<Vec<Ec2Instance>> {
        let provider = self.connect(caller).await?;
        fetch_ec2_instances(&provider).await
    }

    pub async fn fetch_subnets(&self, caller: &Caller) -> Result<Vec<SubnetSummary>> {
        let provider = self.connect(caller).await?;
        fetch_subnets(&provider).await
    }

    pub async fn fetch_route_tables(&self, caller: &Caller) -> Result<Vec<RouteTableSummary>> {
        let provider = self.connect(caller).await?;
        fetch_route_tables(&provider, self.config.association_mode).await
    }

    pub async fn fetch_vpcs(&self, caller: &Caller) -> Result<Vec<VpcSummary>> {
        let provider = self.connect(caller).await?;
        fetch_vpcs(&provider, self.config.association_mode).await
    }

    pub async fn fetch_security_groups(
        &self,
        caller: &Caller,
    ) -> Result<Vec<SecurityGroupSummary>> {
        let provider = self.connect(caller).await?;
        fetch_security_groups(&provider).await
    }

    pub async fn fetch_internet_gateways(
        &self,
        caller: &Caller,
    ) -> Result<Vec<InternetGatewaySummary>> {
        let provider = self.connect(caller).await?;
        fetch_internet_gateways(&provider).await
    }

    pub async fn fetch_nat_gateways(&self, caller: &Caller) -> Result<Vec<NatGatewaySummary>> {
        let provider = self.connect(caller).await?;
        fetch_nat_gateways(&provider).await
    }

    pub async fn fetch_elastic_ips(&self, caller: &Caller) -> Result<Vec<ElasticIpSummary>> {
        let provider = self.connect(caller).await?;
        fetch_elastic_ips(&provider).await
    }

    pub async fn fetch_network_interfaces(
        &self,
        caller: &Caller,
    ) -> Result<Vec<NetworkInterfaceSummary>> {
        let provider = self.connect(caller).await?;
        fetch_network_interfaces(&provider).await
    }

    pub async fn fetch_snapshot(&self, caller: &Caller) -> Result<InventorySnapshot> {
        let provider = self.connect(caller).await?;
        fetch_snapshot(&provider, &self.config.region, self.config.association_mode).await
    }
}
