//! Registered sensor device ("node") lookups.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::location::require_named;
use crate::transport::Transport;

/// Lookups for registered low-cost sensor devices, served from the device
/// data host rather than the general API host.
pub struct NodeApi {
    transport: Arc<Transport>,
}

impl NodeApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Fetches a node's current and historical readings by its device id.
    pub async fn get_by_node_id(&self, node_id: &str) -> Result<Value> {
        require_named(&[("node_id", node_id)])?;
        self.transport.get_node(node_id).await
    }
}
