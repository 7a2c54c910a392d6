//! Terminal output utilities.
//!
//! One quoted, right-aligned line per resource, with the identifier and the
//! public/private markers colored.

use crate::models::{
    Ec2Instance, ElasticIpSummary, InternetGatewaySummary, NatGatewaySummary,
    NetworkInterfaceSummary, RouteTableSummary, SecurityGroupSummary, SubnetSummary, Tags,
    VpcSummary,
};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn name_tag(tags: &Tags) -> &str {
    tags.get("Name").map(|s| s.as_str()).unwrap_or("-")
}

fn or_dash(value: Option<&String>) -> &str {
    value.map(|s| s.as_str()).unwrap_or("-")
}

/// A resource that can be printed as a single terminal line.
pub trait TerminalRow {
    fn row(&self) -> String;
}

impl TerminalRow for Ec2Instance {
    fn row(&self) -> String {
        format!(
            "{id},{name},{state},{public},{private}",
            id = format_field(&self.instance_id, 21).cyan(),
            name = format_field(name_tag(&self.tags), 24),
            state = format_field(&self.state, 12),
            public = format_field(&self.public_ip_address, 17),
            private = format_field(&self.private_ip_address, 17),
        )
    }
}

impl TerminalRow for SubnetSummary {
    fn row(&self) -> String {
        format!(
            "{id},{name},{cidr},{vpc},{az}",
            id = format_field(&self.subnet_id, 26).cyan(),
            name = format_field(name_tag(&self.tags), 24),
            cidr = format_field(&self.cidr_block, 20),
            vpc = format_field(or_dash(self.vpc_id.as_ref()), 23),
            az = format_field(&self.availability_zone, 17),
        )
    }
}

impl TerminalRow for RouteTableSummary {
    fn row(&self) -> String {
        let kind = if self.public {
            "public".on_green()
        } else {
            "private".on_blue()
        };
        format!(
            "{id},{name},{vpc},{kind},{routes}_routes,{public}_public,{private}_private",
            id = format_field(&self.route_table_id, 23).cyan(),
            name = format_field(name_tag(&self.tags), 24),
            vpc = format_field(or_dash(self.vpc_id.as_ref()), 23),
            routes = self.routes.len(),
            public = self.public_subnets.len(),
            private = self.private_subnets.len(),
        )
    }
}

impl TerminalRow for VpcSummary {
    fn row(&self) -> String {
        format!(
            "{id},{name},{cidr},{state},{subnets}_subnets,{tables}_route_tables",
            id = format_field(&self.vpc_id, 23).cyan(),
            name = format_field(name_tag(&self.tags), 24),
            cidr = format_field(&self.cidr_block, 20),
            state = format_field(&self.state, 11),
            subnets = self.subnets.len(),
            tables = self.route_tables.len(),
        )
    }
}

impl TerminalRow for SecurityGroupSummary {
    fn row(&self) -> String {
        format!(
            "{id},{name},{vpc}",
            id = format_field(&self.group_id, 22).cyan(),
            name = format_field(&self.group_name, 30),
            vpc = format_field(or_dash(self.vpc_id.as_ref()), 23),
        )
    }
}

impl TerminalRow for InternetGatewaySummary {
    fn row(&self) -> String {
        let attached: Vec<String> = self
            .attachments
            .iter()
            .map(|a| format!("{}:{}", or_dash(a.vpc_id.as_ref()), a.state))
            .collect();
        format!(
            "{id},{name},{attached}",
            id = format_field(&self.internet_gateway_id, 23).cyan(),
            name = format_field(name_tag(&self.tags), 24),
            attached = format_field(attached.join(" "), 32),
        )
    }
}

impl TerminalRow for NatGatewaySummary {
    fn row(&self) -> String {
        let enis: Vec<&str> = self
            .network_interfaces
            .iter()
            .map(|e| e.network_interface_id.as_str())
            .collect();
        format!(
            "{id},{name},{state},{vpc},{enis}",
            id = format_field(&self.nat_gateway_id, 23).cyan(),
            name = format_field(name_tag(&self.tags), 24),
            state = format_field(&self.state, 11),
            vpc = format_field(or_dash(self.vpc_id.as_ref()), 23),
            enis = format_field(enis.join(" "), 23),
        )
    }
}

impl TerminalRow for ElasticIpSummary {
    fn row(&self) -> String {
        format!(
            "{id},{ip},{domain},{eni}",
            id = format_field(&self.allocation_id, 28).cyan(),
            ip = format_field(&self.public_ip, 17),
            domain = format_field(&self.domain, 10),
            eni = format_field(or_dash(self.network_interface_id.as_ref()), 23),
        )
    }
}

impl TerminalRow for NetworkInterfaceSummary {
    fn row(&self) -> String {
        format!(
            "{id},{status},{subnet},{private},{public}",
            id = format_field(&self.network_interface_id, 23).cyan(),
            status = format_field(&self.status, 10),
            subnet = format_field(or_dash(self.subnet_id.as_ref()), 26),
            private = format_field(self.private_ip_addresses.join(" "), 17),
            public = format_field(self.public_ip_addresses.join(" "), 17),
        )
    }
}

/// Print one line per item, followed by a count.
pub fn print_rows<T: TerminalRow>(label: &str, items: &[T]) {
    for item in items {
        println!("{}", item.row());
    }
    println!("# {} {label}", items.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_instance_row_contains_fields() {
        let mut tags = Tags::new();
        tags.insert("Name".to_string(), "web-1".to_string());
        let instance = Ec2Instance {
            instance_id: "i-1".to_string(),
            state: "running".to_string(),
            tags,
            public_ip_address: "N/A".to_string(),
            private_ip_address: "10.0.0.5".to_string(),
        };
        let row = instance.row();
        assert!(row.contains("\"i-1\""));
        assert!(row.contains("\"web-1\""));
        assert!(row.contains("\"N/A\""));
        assert!(row.contains("\"10.0.0.5\""));
    }
}
