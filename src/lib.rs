pub mod engine;
pub mod model;
pub mod ui;

pub use engine::flow_client::{FlowClient, FlowConfig, FlowError};
pub use model::profile::UserProfile;
pub use model::reading::{Reading, Slot};
