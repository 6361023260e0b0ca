use std::io::ErrorKind;
use std::path::PathBuf;

use super::ConfigError;

pub trait ConfigContentProvider {
    /// `Ok(None)` when there is nothing stored yet.
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Read {
                path: self.file_path.display().to_string(),
                message: err.to_string(),
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|err| ConfigError::Write {
            path: self.file_path.display().to_string(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_returns_none() {
        let provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");

        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_written_content_can_be_read_back() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());

        provider.set_config_content("difficulty: Hard\n").unwrap();
        let content = provider.get_config_content().unwrap();

        assert_eq!(content.as_deref(), Some("difficulty: Hard\n"));
        let _ = std::fs::remove_file(provider.path());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let provider = FileContentConfigProvider::new(
            std::env::temp_dir().join("no_such_dir_for_tictactoe").join("config.yaml"),
        );

        let result = provider.set_config_content("mode: PlayerVsAi\n");

        assert!(matches!(result, Err(ConfigError::Write { .. })));
    }
}
