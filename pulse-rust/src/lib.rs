mod article;
mod errors;
mod gateway;
mod opentelemetry;
mod params;
pub mod prompts;
mod sidebar;
mod types;

pub use article::{ArticleLocation, ArticleRef};
pub use errors::GatewayError;
pub use gateway::AiGateway;
pub use params::*;
pub use sidebar::{
    RequestTicket, SidebarController, SidebarPhase, SidebarState, DISCLAIMER, IDLE_HINT,
    LOADING_CAPTION,
};
pub use types::*;

pub use pulse_sdk::{GroundingSource, MapSource, WebSource};
