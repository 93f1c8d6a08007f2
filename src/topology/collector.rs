//! Topology collectors
//!
//! Each collector walks the finalized worker group list in order and issues
//! one scoped GET per group. Requests are sequential.

use super::types::{
    DestinationIndex, Destination, GroupRoutes, ItemsResponse, QuickConnectEntry, RouteTable,
    Source, WorkerGroup, WorkerGroupRecord,
};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::PASSTHRU_PIPELINE;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

const WORKER_GROUPS_PATH: &str = "api/v1/master/groups";

/// Everything fetched for the report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    /// Destination types per group
    pub destinations: DestinationIndex,
    /// Route tables, in worker group order
    pub routes: Vec<GroupRoutes>,
    /// Quick-connect wires, in worker group order
    pub quick_connects: Vec<QuickConnectEntry>,
}

/// Reads topology through an authenticated client
#[derive(Debug, Clone, Copy)]
pub struct TopologyCollector<'a> {
    client: &'a HttpClient,
}

impl<'a> TopologyCollector<'a> {
    /// Create a collector reading through `client`
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// List reportable worker groups, preserving API order
    ///
    /// Any failure here, including a status other than `200 OK`, ends the
    /// run: without groups there is nothing to collect. Individual records
    /// without an id are dropped with a warning.
    pub async fn worker_groups(&self) -> Result<Vec<WorkerGroup>> {
        let response: ItemsResponse<WorkerGroupRecord> = self
            .client
            .get_json(WORKER_GROUPS_PATH)
            .await
            .map_err(|e| match e {
                Error::HttpStatus { status, .. } => Error::enumeration(format!("HTTP {status}")),
                Error::JsonParse(e) => Error::enumeration(format!("unexpected response: {e}")),
                other => other,
            })?;

        let groups = select_worker_groups(response.items);
        info!(
            count = groups.len(),
            groups = ?groups.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
            "Found worker groups"
        );
        Ok(groups)
    }

    /// Destination id → type for every group
    pub async fn destinations(&self, groups: &[WorkerGroup]) -> Result<DestinationIndex> {
        let mut index = DestinationIndex::new();

        for group in groups {
            let path = format!("api/v1/m/{}/system/outputs", group.id);
            if let Some(response) = self
                .fetch_group::<ItemsResponse<Destination>>(group, "destinations", &path)
                .await?
            {
                debug!(group = %group.id, count = response.items.len(), "Fetched destinations");
                index.insert_group(group.id.clone(), response.items);
            }
        }

        Ok(index)
    }

    /// Route table of every group; only the first table object is consulted
    pub async fn routes(&self, groups: &[WorkerGroup]) -> Result<Vec<GroupRoutes>> {
        let mut tables = Vec::with_capacity(groups.len());

        for group in groups {
            let path = format!("api/v1/m/{}/routes", group.id);
            let Some(response) = self
                .fetch_group::<ItemsResponse<RouteTable>>(group, "routes", &path)
                .await?
            else {
                continue;
            };

            let Some(table) = response.items.into_iter().next() else {
                warn!(group = %group.id, "Route table response had no items, skipping group");
                continue;
            };

            debug!(group = %group.id, count = table.routes.len(), "Fetched routes");
            tables.push(GroupRoutes {
                worker_group: group.id.clone(),
                routes: table.routes,
            });
        }

        Ok(tables)
    }

    /// Quick-connect wiring of every group's sources
    pub async fn quick_connects(&self, groups: &[WorkerGroup]) -> Result<Vec<QuickConnectEntry>> {
        let mut entries = Vec::new();

        for group in groups {
            let path = format!("api/v1/m/{}/system/inputs", group.id);
            if let Some(response) = self
                .fetch_group::<ItemsResponse<Source>>(group, "sources", &path)
                .await?
            {
                let found = quick_connects_for(&group.id, &response.items);
                debug!(group = %group.id, count = found.len(), "Fetched quick connects");
                entries.extend(found);
            }
        }

        Ok(entries)
    }

    /// Run all three per-group collectors
    pub async fn collect(&self, groups: &[WorkerGroup]) -> Result<Topology> {
        Ok(Topology {
            destinations: self.destinations(groups).await?,
            routes: self.routes(groups).await?,
            quick_connects: self.quick_connects(groups).await?,
        })
    }

    /// GET one group-scoped resource; `None` when the group is skipped
    async fn fetch_group<T: DeserializeOwned>(
        &self,
        group: &WorkerGroup,
        resource: &str,
        path: &str,
    ) -> Result<Option<T>> {
        match self.client.get_json::<T>(path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_group_degradable() => {
                warn!(group = %group.id, resource, error = %e, "Skipping group");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Drop fleet and search groups, keeping API order
pub fn select_worker_groups(records: Vec<WorkerGroupRecord>) -> Vec<WorkerGroup> {
    records
        .into_iter()
        .filter(WorkerGroupRecord::is_reportable)
        .map(|record| WorkerGroup::new(record.id))
        .collect()
}

/// One entry per connection of every source that has any
pub fn quick_connects_for(group: &str, sources: &[Source]) -> Vec<QuickConnectEntry> {
    sources
        .iter()
        .flat_map(|source| {
            source
                .connections
                .iter()
                .flatten()
                .map(move |conn| QuickConnectEntry {
                    worker_group: group.to_string(),
                    source_name: source.id.clone(),
                    source_type: source.kind.clone(),
                    pipeline: conn
                        .pipeline
                        .clone()
                        .unwrap_or_else(|| PASSTHRU_PIPELINE.to_string()),
                    output: conn.output.clone(),
                })
        })
        .collect()
}
