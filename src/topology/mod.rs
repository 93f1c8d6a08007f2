//! Topology module
//!
//! Reads the data-flow configuration of every worker group from the
//! management API.
//!
//! # Collectors
//!
//! - **Worker groups**: `GET /api/v1/master/groups`, fleet and search groups excluded
//! - **Destinations**: `GET /api/v1/m/{group}/system/outputs`
//! - **Routes**: `GET /api/v1/m/{group}/routes`
//! - **Quick connects**: `GET /api/v1/m/{group}/system/inputs`
//!
//! Listing worker groups must succeed for the run to continue. The three
//! per-group collectors skip a group whose response is unusable and carry on.

mod collector;
mod types;

pub use collector::{quick_connects_for, select_worker_groups, Topology, TopologyCollector};
pub use types::{
    is_truthy, Connection, Destination, DestinationIndex, GroupRoutes, ItemsResponse,
    QuickConnectEntry, Route, RouteTable, Source, WorkerGroup, WorkerGroupRecord,
};
