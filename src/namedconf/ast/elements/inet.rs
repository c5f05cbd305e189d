//! `inet <addr> [port <n>] allow { ... } keys { ... };`

use serde::Serialize;
use std::fmt;

use super::super::error::NodeError;
use super::super::record::ParseRecord;
use super::super::registry::NodeKind;
use super::super::traits::AstNode;
use super::{resolve_tag, ValueList};

/// A control channel endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inet {
    pub node_type: String,
    pub ipaddr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    pub allows: ValueList,
    pub keys: ValueList,
}

impl Inet {
    /// `port` is optional; `allow-section` and `keys-section` are sub-records
    /// whose `value` is the list.
    pub fn from_record(mut record: ParseRecord) -> Result<Self, NodeError> {
        let node_type = resolve_tag(&record, NodeKind::Inet)?;
        let ipaddr = record.first_value("ipaddr")?.text.clone();
        let port = if record.contains_key("port") {
            let port = record.take_record("port")?;
            Some(port.first_value("value")?.text.clone())
        } else {
            None
        };
        let allows = record.take_record("allow-section")?.take_list("value")?;
        let keys = record.take_record("keys-section")?.take_list("value")?;
        Ok(Self {
            node_type,
            ipaddr,
            port,
            allows,
            keys,
        })
    }
}

impl AstNode for Inet {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn is_same_nodetype(&self, kind: &str) -> bool {
        NodeKind::Inet.keyword() == kind
    }

    fn display_label(&self) -> String {
        match &self.port {
            Some(port) => format!("{} port {}", self.ipaddr, port),
            None => self.ipaddr.clone(),
        }
    }
}

impl fmt::Display for Inet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inet {}", self.ipaddr)?;
        if let Some(port) = self.port.as_deref().filter(|port| !port.is_empty()) {
            write!(f, " port {port}")?;
        }
        write!(f, " allow {} keys {};", self.allows, self.keys)
    }
}
