pub mod construction;
pub mod sweep;

use std::{error::Error, fmt, fs::File, io::Read, path::Path};

use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.0)
    }
}

impl Error for ConfigError {}

pub fn read_yaml<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, Box<dyn Error>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let config: T = serde_yaml::from_str(&contents)?;
    Ok(config)
}

pub(crate) fn require_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError(format!("{name} must be positive, got {value}")))
    }
}

pub(crate) fn require_nonzero(name: &str, value: usize) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError(format!("{name} must be non-zero")))
    }
}
