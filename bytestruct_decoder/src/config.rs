use std::env;
use thiserror::Error;

pub const ENV_VAR_BYTE_ORDER: &str = "BYTESTRUCT_BYTE_ORDER";

pub const ENV_VAR_TEXT_MODE: &str = "BYTESTRUCT_TEXT_MODE";

/// Applies uniformly to every multi-byte scalar of a decoder. There is no per-field override.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum ByteOrder {
    Little,
    #[default]
    Big,
}

/// How text fields treat bytes that are not valid UTF-8.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum TextMode {
    /// Fail the decode call.
    #[default]
    Strict,
    /// Substitute U+FFFD.
    Lossy,
}

#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct DecoderConfig {
    pub byte_order: ByteOrder,
    pub text_mode: TextMode,
}

#[derive(Error, PartialEq, Eq, Debug)]
#[error("Invalid value for {var}. {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl DecoderConfig {
    pub fn little_endian() -> Self {
        Self {
            byte_order: ByteOrder::Little,
            ..Self::default()
        }
    }

    /// Overrides the defaults with [`ENV_VAR_BYTE_ORDER`] and [`ENV_VAR_TEXT_MODE`],
    /// whichever are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| env::var(var).ok())
    }

    fn from_vars(get: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = get(ENV_VAR_BYTE_ORDER) {
            config.byte_order = match value.trim().to_ascii_lowercase().as_str() {
                "le" | "little" => ByteOrder::Little,
                "be" | "big" => ByteOrder::Big,
                _ => {
                    let var = ENV_VAR_BYTE_ORDER;
                    return Err(ConfigError { var, value });
                }
            };
        }

        if let Some(value) = get(ENV_VAR_TEXT_MODE) {
            config.text_mode = match value.trim().to_ascii_lowercase().as_str() {
                "strict" => TextMode::Strict,
                "lossy" => TextMode::Lossy,
                _ => {
                    let var = ENV_VAR_TEXT_MODE;
                    return Err(ConfigError { var, value });
                }
            };
        }

        Ok(config)
    }
}
