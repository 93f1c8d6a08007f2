//! Report row assembly

use crate::topology::{DestinationIndex, GroupRoutes, QuickConnectEntry, Topology};
use crate::types::{QUICK_CONNECT_LABEL, VALIDATE_MANUALLY};
use serde::Serialize;
use tracing::warn;

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Worker Group column
    pub worker_group: String,
    /// Route Name column; `Quick Connect` for source wiring
    pub route_name: String,
    /// Filter column; the source id for quick connects
    pub filter: String,
    /// Pipeline column
    pub pipeline: String,
    /// Destination Name column
    pub destination_name: String,
    /// Destination Type column
    pub destination_type: String,
}

impl ReportRow {
    /// Column values in header order
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.worker_group,
            &self.route_name,
            &self.filter,
            &self.pipeline,
            &self.destination_name,
            &self.destination_type,
        ]
    }

    fn from_quick_connect(entry: &QuickConnectEntry) -> Self {
        Self {
            worker_group: entry.worker_group.clone(),
            route_name: QUICK_CONNECT_LABEL.to_string(),
            filter: format!("{}:{}", entry.source_name, entry.source_type),
            pipeline: entry.pipeline.clone(),
            destination_name: entry.output.clone(),
            destination_type: VALIDATE_MANUALLY.to_string(),
        }
    }
}

/// Build the ordered report rows
///
/// Disabled routes are dropped. A route whose output does not resolve to a
/// destination of the same group is dropped with a warning.
pub fn build_report(topology: &Topology) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = topology
        .routes
        .iter()
        .flat_map(|table| route_rows(table, &topology.destinations))
        .collect();

    rows.extend(topology.quick_connects.iter().map(ReportRow::from_quick_connect));
    rows
}

fn route_rows(table: &GroupRoutes, destinations: &DestinationIndex) -> Vec<ReportRow> {
    let group = table.worker_group.as_str();

    table
        .routes
        .iter()
        .filter(|route| !route.is_disabled())
        .filter_map(|route| {
            let Some(output) = route.output.as_deref() else {
                warn!(group, route = %route.name, "Route has no output, omitting");
                return None;
            };
            let Some(dest_type) = destinations.resolve(group, output) else {
                warn!(group, route = %route.name, output, "Unknown destination, omitting route");
                return None;
            };

            Some(ReportRow {
                worker_group: group.to_string(),
                route_name: route.name.clone(),
                filter: route.filter.clone().unwrap_or_default(),
                pipeline: route.pipeline.clone().unwrap_or_default(),
                destination_name: output.to_string(),
                destination_type: dest_type.to_string(),
            })
        })
        .collect()
}
