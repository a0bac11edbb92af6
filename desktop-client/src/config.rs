use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::{DEFAULT_BOARD_SIZE, Player};

use crate::colors::parse_color;
use crate::names::resolve_player_name;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";
pub const MAX_BOARD_SIZE: usize = 10;

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: &Path) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub board_size: usize,
    pub prompt_for_names: bool,
    pub players: Vec<PlayerConfig>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub label: String,
    pub color: String,
}

impl Config {
    /// Builds the engine's players in configured order. When a name was
    /// entered for player `i` it is used as is, blank included; the stored
    /// name only applies to players nobody was asked about.
    pub fn build_players(&self, entered_names: &[String]) -> Vec<Player> {
        self.players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let name = match entered_names.get(index) {
                    Some(entered) => resolve_player_name(Some(entered.as_str()), index),
                    None => resolve_player_name(player.name.as_deref(), index),
                };
                Player::new(name, player.label.as_str(), player.color.as_str())
            })
            .collect()
    }

    /// Stores the entered names so the next prompt starts with them. A
    /// blank entry clears the stored name.
    pub fn remember_names(&mut self, entered_names: &[String]) {
        for (player, name) in self.players.iter_mut().zip(entered_names) {
            let trimmed = name.trim();
            player.name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < 1 || self.board_size > MAX_BOARD_SIZE {
            return Err(format!("board_size must be between 1 and {}", MAX_BOARD_SIZE));
        }
        if self.players.len() < 2 {
            return Err("at least 2 players must be configured".to_string());
        }

        let mut labels = HashSet::new();
        for player in &self.players {
            player.validate()?;
            if !labels.insert(player.label.as_str()) {
                return Err(format!("label {} is used by more than one player", player.label));
            }
        }
        Ok(())
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.label.chars().count() != 1 {
            return Err(format!("label {:?} must be a single character", self.label));
        }
        if parse_color(&self.color).is_none() {
            return Err(format!("unknown color {:?}", self.color));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            prompt_for_names: true,
            players: vec![
                PlayerConfig {
                    name: None,
                    label: "X".to_string(),
                    color: "pink".to_string(),
                },
                PlayerConfig {
                    name: None,
                    label: "O".to_string(),
                    color: "purple".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    fn remove_temp_file(path: &Path) {
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let mut config = Config::default();
        config.board_size = 4;
        config.players[0].name = Some("Alice".to_string());

        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);
        let saved = manager.set_config(&config);
        let cached = manager.get_config();
        let reloaded = get_config_manager(&file_path).get_config();
        remove_temp_file(&file_path);

        assert!(saved.is_ok());
        assert_eq!(cached.unwrap(), config);
        assert_eq!(reloaded.unwrap(), config);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Path::new("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_duplicate_labels_cant_be_read() {
        let invalid_config_content = r#"
            board_size: 3
            prompt_for_names: false
            players:
              - label: X
                color: pink
              - label: X
                color: purple
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider.set_config_content(invalid_config_content).unwrap();

        let manager = get_config_manager(&file_path);
        let result = manager.get_config();
        remove_temp_file(&file_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = Config::default();
        config.board_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.board_size = MAX_BOARD_SIZE + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.players.truncate(1);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.players[1].color = "not-a-color".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.players[1].label = "OO".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_manager_refuses_to_save_invalid_config() {
        let mut config = Config::default();
        config.board_size = 0;
        let manager = get_config_manager(&get_temp_file_path());
        assert!(manager.set_config(&config).is_err());
    }

    #[test]
    fn test_build_players_uses_entered_then_stored_then_default_names() {
        let mut config = Config::default();
        config.players.push(PlayerConfig {
            name: Some("carol smith".to_string()),
            label: "Z".to_string(),
            color: "green".to_string(),
        });

        let players = config.build_players(&["alice".to_string(), "   ".to_string()]);

        let names: Vec<&str> = players.iter().map(Player::name).collect();
        assert_eq!(names, ["Alice", "Player 2", "Carol Smith"]);
        assert_eq!(players[1].label(), "O");
        assert_eq!(players[1].display_color(), "purple");
    }

    #[test]
    fn test_remember_names_clears_blank_input() {
        let mut config = Config::default();
        config.players[1].name = Some("Bob".to_string());

        config.remember_names(&[" alice ".to_string(), String::new()]);

        assert_eq!(config.players[0].name.as_deref(), Some("alice"));
        assert_eq!(config.players[1].name, None);
    }

    #[test]
    fn test_cleared_name_falls_back_to_default() {
        let mut config = Config::default();
        config.players[0].name = Some("Alice".to_string());
        let entered = [String::new(), "  ".to_string()];

        let players = config.build_players(&entered);
        config.remember_names(&entered);

        assert_eq!(players[0].name(), "Player 1");
        assert_eq!(players[1].name(), "Player 2");
        assert_eq!(config.players[0].name, None);
    }

    #[test]
    fn test_stored_names_apply_without_prompt() {
        let mut config = Config::default();
        config.players[0].name = Some("alice".to_string());

        let players = config.build_players(&[]);

        assert_eq!(players[0].name(), "Alice");
        assert_eq!(players[1].name(), "Player 2");
    }
}
