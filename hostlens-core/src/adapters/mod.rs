//! Trait implementations backed by `hostlens-toolbox`

mod toolbox_gateway;

pub use toolbox_gateway::ToolboxGateway;
