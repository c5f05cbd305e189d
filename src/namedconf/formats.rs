//! Output format implementations for parsed documents
//!
//! - `conf` - canonical named.conf text
//! - `json` / `yaml` - serde serialization of the node tree
//! - `treeviz` - box-drawing outline of node types and labels

pub mod conf;
pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use conf::ConfFormatter;
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
