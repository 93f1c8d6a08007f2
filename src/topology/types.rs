//! Topology record types
//!
//! Wire records mirror the management API's JSON. Only the fields the report
//! needs are modelled; everything else in the payload is ignored.
//!
//! Lists are decoded one element at a time. A record that does not fit its
//! type is logged and dropped, and its siblings are kept.

use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// The `{"items": [...]}` envelope every list endpoint returns
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ItemsResponse<T> {
    /// Records of the listing, malformed ones already dropped
    #[serde(default = "Vec::new", deserialize_with = "skip_malformed")]
    pub items: Vec<T>,
}

/// Worker group as listed by the control plane
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerGroupRecord {
    /// Group id, used in every group-scoped path
    pub id: String,
    /// Set on edge fleets
    #[serde(default, rename = "isFleet")]
    pub is_fleet: Option<JsonValue>,
    /// Set on search groups
    #[serde(default, rename = "isSearch")]
    pub is_search: Option<JsonValue>,
}

impl WorkerGroupRecord {
    /// Fleet and search groups have no route tables worth reporting
    pub fn is_reportable(&self) -> bool {
        !self.is_fleet.as_ref().is_some_and(is_truthy)
            && !self.is_search.as_ref().is_some_and(is_truthy)
    }
}

/// A worker group included in the report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WorkerGroup {
    /// Group id
    pub id: String,
}

impl WorkerGroup {
    /// Create a worker group from its id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Output configured on a worker group
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Destination {
    /// Id that routes and connections refer to
    pub id: String,
    /// Destination type, e.g. `splunk_lb`
    #[serde(rename = "type")]
    pub kind: String,
}

/// The route table object of one worker group
#[derive(Debug, Clone, Deserialize)]
pub struct RouteTable {
    /// Table id, usually `default`
    #[serde(default)]
    pub id: Option<String>,
    /// Routes in evaluation order
    #[serde(default, deserialize_with = "skip_malformed")]
    pub routes: Vec<Route>,
}

/// One entry of a route table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Route id
    pub id: Option<String>,
    /// Display name
    pub name: String,
    /// Filter expression
    pub filter: Option<String>,
    /// Pipeline applied to matching events
    pub pipeline: Option<String>,
    /// Destination id
    pub output: Option<String>,
    /// Loosely-typed disabled flag
    pub disabled: Option<JsonValue>,
    /// Whether matching events stop here
    #[serde(rename = "final")]
    pub is_final: Option<bool>,
    /// Free-form description
    pub description: Option<String>,
}

impl Route {
    /// True only when `disabled` is present and truthy; an absent flag
    /// means the route is live.
    pub fn is_disabled(&self) -> bool {
        self.disabled.as_ref().is_some_and(is_truthy)
    }
}

/// Input configured on a worker group
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    /// Source id
    pub id: String,
    /// Source type, e.g. `syslog`
    #[serde(rename = "type")]
    pub kind: String,
    /// Quick-connect wiring, absent on route-driven sources
    #[serde(default, deserialize_with = "skip_malformed_opt")]
    pub connections: Option<Vec<Connection>>,
}

/// Direct source-to-destination wiring on a [`Source`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Connection {
    /// Destination id
    pub output: String,
    /// Pipeline id; `passthru` when absent
    #[serde(default)]
    pub pipeline: Option<String>,
}

/// One reportable quick-connect wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickConnectEntry {
    /// Owning worker group
    pub worker_group: String,
    /// Source id
    pub source_name: String,
    /// Source type
    pub source_type: String,
    /// Pipeline id, defaulted
    pub pipeline: String,
    /// Destination id
    pub output: String,
}

/// Route table of one worker group, in API order
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRoutes {
    /// Owning worker group
    pub worker_group: String,
    /// Routes of the group's first route table
    pub routes: Vec<Route>,
}

/// Destination types keyed by worker group, then destination id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationIndex {
    groups: HashMap<String, HashMap<String, String>>,
}

impl DestinationIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the destinations of one group, replacing any previous entry
    pub fn insert_group<I>(&mut self, group: impl Into<String>, destinations: I)
    where
        I: IntoIterator<Item = Destination>,
    {
        let map = destinations.into_iter().map(|d| (d.id, d.kind)).collect();
        self.groups.insert(group.into(), map);
    }

    /// Destination type of `dest_id` within `group`
    pub fn resolve(&self, group: &str, dest_id: &str) -> Option<&str> {
        self.groups
            .get(group)
            .and_then(|dests| dests.get(dest_id))
            .map(String::as_str)
    }
}

/// Truthiness of a loosely-typed JSON flag
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(a) => !a.is_empty(),
        JsonValue::Object(o) => !o.is_empty(),
    }
}

/// Decode a JSON array one element at a time, dropping elements that do not
/// fit `T`
fn skip_malformed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<JsonValue>::deserialize(deserializer)?;
    Ok(decode_each(raw))
}

fn skip_malformed_opt<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<JsonValue>>::deserialize(deserializer)?;
    Ok(raw.map(decode_each))
}

fn decode_each<T: DeserializeOwned>(raw: Vec<JsonValue>) -> Vec<T> {
    raw.into_iter()
        .filter_map(|value| match T::deserialize(&value) {
            Ok(record) => Some(record),
            Err(e) => {
                // Only the id is logged; records can embed credentials.
                let id = value.get("id").and_then(JsonValue::as_str).unwrap_or("<none>");
                warn!(
                    record = std::any::type_name::<T>().rsplit("::").next().unwrap_or_default(),
                    id,
                    error = %e,
                    "Skipping malformed record"
                );
                None
            }
        })
        .collect()
}
