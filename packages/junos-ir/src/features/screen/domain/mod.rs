//! Security screens

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenOption {
    IcmpFragment,
    IcmpLarge,
    TcpSynFin,
    TcpFinNoAck,
    TcpNoFlag,
    TcpSynFrag,
    /// Flood thresholds and the rest
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenAction {
    #[default]
    Drop,
    AlarmWithoutDrop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub name: String,
    #[serde(default)]
    pub options: Vec<ScreenOption>,
    #[serde(default)]
    pub action: ScreenAction,
}

impl Screen {
    pub fn new(name: impl Into<String>, options: Vec<ScreenOption>) -> Self {
        Self {
            name: name.into(),
            options,
            action: ScreenAction::Drop,
        }
    }
}
