use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not found")]
    MissingVar(&'static str),
}

/// Secrets the bot cannot start without.
pub struct BotConfig {
    pub bot_token: String,
    pub cmc_api_key: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bot_token: require("TELEGRAM_BOT_API_KEY")?,
            cmc_api_key: require("CMC_API_KEY")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_names_the_variable() {
        let err = ConfigError::MissingVar("CMC_API_KEY");

        assert_eq!(
            err.to_string(),
            "CMC_API_KEY environment variable not found"
        );
    }
}
