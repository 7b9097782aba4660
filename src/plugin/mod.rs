// Launcher-facing side of the plugin

mod handler;
mod protocol;

pub use handler::handle_request;
pub use protocol::{
    HOST_SHOW_MSG, ICON_PATH, METHOD_ADD_TO_DAILY_NOTE, METHOD_CONTEXT_MENU,
    METHOD_OPEN_DAILY_NOTE, METHOD_QUERY, METHOD_RELOAD_PLUGIN, Response, ResultItem, RpcAction,
    RpcRequest,
};
