use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    AlphaBeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMark {
    X,
    O,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MatchConfig {
    pub board_size: usize,
    pub x_agent: AgentKind,
    pub o_agent: AgentKind,
    pub first_mark: FirstMark,
    pub move_delay_ms: u64,
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size < 3 {
            return Err("Board size must be at least 3".to_string());
        }
        if self.board_size > 3 {
            return Err(format!(
                "Board size {} is too large for exhaustive search (max 3)",
                self.board_size
            ));
        }
        if self.move_delay_ms > 10_000 {
            return Err("Move delay must not exceed 10000 ms".to_string());
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            x_agent: AgentKind::Minimax,
            o_agent: AgentKind::AlphaBeta,
            first_mark: FirstMark::Random,
            move_delay_ms: 500,
            seed: None,
        }
    }
}

/// Loads the match config from a YAML file. A missing file is not an
/// error and yields the defaults.
pub fn load_config(path: &str) -> Result<MatchConfig, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(MatchConfig::default());
        }
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: MatchConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}
