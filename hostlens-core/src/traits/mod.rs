//! Seams between the panel logic and the outside world

mod gateway;
mod renderer;

pub use gateway::{LookupGateway, SearchGateway, TokenProvider};
pub use renderer::PanelRenderer;
