use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::tictactoe::{Difficulty, GameMode, Mark};

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsAi,
            difficulty: Difficulty::Medium,
            human_mark: Mark::X,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();

        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: ClientConfig = serializer.deserialize(&serialized_string).unwrap();

        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = ClientConfig {
            difficulty: Difficulty::Hard,
            human_mark: Mark::O,
            seed: Some(17),
            ..ClientConfig::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_str()));

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();

        assert_eq!(config, loaded);
        let reloaded = get_config_manager(Some(file_path.as_str())).get_config().unwrap();
        assert_eq!(config, reloaded);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));

        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_missing_seed_defaults_to_none() {
        let content = "mode: PlayerVsPlayer\ndifficulty: Easy\nhuman_mark: X\n";
        let serializer = YamlConfigSerializer::new();

        let config: ClientConfig = serializer.deserialize(content).unwrap();

        assert_eq!(config.mode, GameMode::PlayerVsPlayer);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_human_mark_cant_be_read() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.as_str());
        content_provider
            .set_config_content("mode: PlayerVsAi\ndifficulty: Hard\nhuman_mark: Empty\n")
            .unwrap();

        let manager: ConfigManager<_, ClientConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());

        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }
}
