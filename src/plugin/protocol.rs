// Flow Launcher executable-plugin JSON-RPC messages

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::journal::{NoteAction, Suggestion};

pub const METHOD_QUERY: &str = "query";
pub const METHOD_CONTEXT_MENU: &str = "context_menu";
pub const METHOD_ADD_TO_DAILY_NOTE: &str = "add_to_daily_note";
pub const METHOD_OPEN_DAILY_NOTE: &str = "open_daily_note";
pub const METHOD_RELOAD_PLUGIN: &str = "reload_plugin";

/// Host API call that pops a notification
pub const HOST_SHOW_MSG: &str = "Flow.Launcher.ShowMsg";

/// Icon shipped next to the plugin manifest
pub const ICON_PATH: &str = "Images/app.png";

/// Request the launcher passes as the first command-line argument
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    pub method: String,

    #[serde(default)]
    pub parameters: Vec<Value>,

    /// Values from the plugin's settings page, if it has one
    #[serde(default, alias = "Settings")]
    pub settings: Option<Map<String, Value>>,
}

impl RpcRequest {
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// First parameter as text. Non-string scalars are stringified.
    pub fn text_param(&self) -> Option<String> {
        match self.parameters.first()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// A method call, either bound to a result row or sent back to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcAction {
    pub method: String,
    pub parameters: Vec<Value>,
}

impl RpcAction {
    pub fn show_msg(title: &str, subtitle: &str) -> Self {
        Self {
            method: HOST_SHOW_MSG.to_string(),
            parameters: vec![
                Value::from(title),
                Value::from(subtitle),
                Value::from(""),
            ],
        }
    }
}

impl From<&NoteAction> for RpcAction {
    fn from(action: &NoteAction) -> Self {
        match action {
            NoteAction::AppendToDailyNote(content) => Self {
                method: METHOD_ADD_TO_DAILY_NOTE.to_string(),
                parameters: vec![Value::from(content.as_str())],
            },
            NoteAction::OpenDailyNote => Self {
                method: METHOD_OPEN_DAILY_NOTE.to_string(),
                parameters: Vec::new(),
            },
        }
    }
}

/// One row in the launcher's result list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultItem {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "SubTitle")]
    pub subtitle: String,

    #[serde(rename = "IcoPath")]
    pub ico_path: String,

    #[serde(rename = "JsonRPCAction", skip_serializing_if = "Option::is_none")]
    pub action: Option<RpcAction>,

    #[serde(rename = "ContextData")]
    pub context_data: Vec<Value>,
}

impl From<&Suggestion> for ResultItem {
    fn from(suggestion: &Suggestion) -> Self {
        Self {
            title: suggestion.title.clone(),
            subtitle: suggestion.subtitle.clone(),
            ico_path: ICON_PATH.to_string(),
            action: suggestion.action.as_ref().map(RpcAction::from),
            context_data: Vec::new(),
        }
    }
}

/// What the plugin prints on stdout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Results { result: Vec<ResultItem> },
    Host(RpcAction),
}

impl Response {
    pub fn results(suggestions: &[Suggestion]) -> Self {
        Response::Results {
            result: suggestions.iter().map(ResultItem::from).collect(),
        }
    }

    pub fn empty() -> Self {
        Response::Results { result: Vec::new() }
    }

    pub fn show_msg(title: &str, subtitle: &str) -> Self {
        Response::Host(RpcAction::show_msg(title, subtitle))
    }

    /// Add a line to the body of an `Error` notification. Anything else is
    /// returned unchanged.
    pub fn annotate_error(mut self, note: &str) -> Self {
        if let Response::Host(action) = &mut self {
            let is_error = action.method == HOST_SHOW_MSG
                && action.parameters.first().and_then(Value::as_str) == Some("Error");
            if is_error {
                if let Some(Value::String(body)) = action.parameters.get_mut(1) {
                    body.push('\n');
                    body.push_str(note);
                }
            }
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
