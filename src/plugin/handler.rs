use tracing::{debug, error, warn};

use super::protocol::{
    METHOD_ADD_TO_DAILY_NOTE, METHOD_CONTEXT_MENU, METHOD_OPEN_DAILY_NOTE, METHOD_QUERY,
    METHOD_RELOAD_PLUGIN, Response, RpcRequest,
};
use crate::journal::{Clock, DailyNoteManager, Launcher, NoteError};

/// Route one launcher request to the manager.
///
/// Failures of the note operations never escape: they become `ShowMsg`
/// notifications so the plugin stays usable for the next invocation.
pub fn handle_request<C: Clock, L: Launcher>(
    manager: &DailyNoteManager<C, L>,
    request: &RpcRequest,
) -> Response {
    debug!("Handling {} with {} parameter(s)", request.method, request.parameters.len());

    match request.method.as_str() {
        METHOD_QUERY => {
            let query = request.text_param().unwrap_or_default();
            Response::results(&manager.handle_query(&query))
        }
        METHOD_CONTEXT_MENU => Response::results(&manager.build_context_menu()),
        METHOD_ADD_TO_DAILY_NOTE => match request.text_param() {
            Some(content) => add_to_daily_note(manager, &content),
            None => Response::show_msg("Error", "Failed to add note: no content given"),
        },
        METHOD_OPEN_DAILY_NOTE => open_daily_note(manager),
        METHOD_RELOAD_PLUGIN => Response::show_msg("Info", "Plugin settings reloaded"),
        other => {
            warn!("Ignoring unknown method '{}'", other);
            Response::empty()
        }
    }
}

fn add_to_daily_note<C: Clock, L: Launcher>(
    manager: &DailyNoteManager<C, L>,
    content: &str,
) -> Response {
    match manager.append_to_daily_note(content) {
        Ok(outcome) => Response::show_msg("Success", &outcome.to_string()),
        Err(e @ NoteError::VaultNotFound { .. }) => {
            error!("{}", e);
            Response::show_msg("Error", &e.to_string())
        }
        Err(e) => {
            error!("Failed to add note: {}", e);
            Response::show_msg("Error", &format!("Failed to add note: {}", e))
        }
    }
}

fn open_daily_note<C: Clock, L: Launcher>(manager: &DailyNoteManager<C, L>) -> Response {
    match manager.open_daily_note() {
        // Nothing to show; the note's own window is the feedback
        Ok(_) => Response::empty(),
        Err(e) => {
            error!("{}", e);
            Response::show_msg("Error", &e.to_string())
        }
    }
}
