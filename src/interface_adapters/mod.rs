// Interface adapters: wire protocol, HTTP handlers and the WebSocket state feed.

pub mod handlers;
pub mod net;
pub mod protocol;
pub mod routes;
pub mod state;
