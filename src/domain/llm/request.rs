use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 1.0;
pub const DEFAULT_FREQUENCY_PENALTY: f64 = 0.0;
pub const DEFAULT_PRESENCE_PENALTY: f64 = 0.0;

/// Optional tuning parameters for a completion call
///
/// Unset values fall back to fixed defaults when the payload is built.
/// `max_tokens` has no default and is left out of the payload when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn frequency_penalty(mut self, penalty: f64) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    pub fn presence_penalty(mut self, penalty: f64) -> Self {
        self.presence_penalty = Some(penalty);
        self
    }

    pub fn effective_temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn effective_top_p(&self) -> f64 {
        self.top_p.unwrap_or(DEFAULT_TOP_P)
    }

    pub fn effective_frequency_penalty(&self) -> f64 {
        self.frequency_penalty.unwrap_or(DEFAULT_FREQUENCY_PENALTY)
    }

    pub fn effective_presence_penalty(&self) -> f64 {
        self.presence_penalty.unwrap_or(DEFAULT_PRESENCE_PENALTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let options = RequestOptions::new();

        assert_eq!(options.effective_temperature(), 0.7);
        assert_eq!(options.effective_top_p(), 1.0);
        assert_eq!(options.effective_frequency_penalty(), 0.0);
        assert_eq!(options.effective_presence_penalty(), 0.0);
        assert_eq!(options.max_tokens, None);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let options = RequestOptions::new()
            .temperature(0.2)
            .max_tokens(256)
            .top_p(0.9)
            .frequency_penalty(0.5)
            .presence_penalty(-0.5);

        assert_eq!(options.effective_temperature(), 0.2);
        assert_eq!(options.max_tokens, Some(256));
        assert_eq!(options.effective_top_p(), 0.9);
        assert_eq!(options.effective_frequency_penalty(), 0.5);
        assert_eq!(options.effective_presence_penalty(), -0.5);
    }

    #[test]
    fn test_deserialize_partial_options() {
        let options: RequestOptions = serde_json::from_str(r#"{"max_tokens": 64}"#).unwrap();
        assert_eq!(options, RequestOptions::new().max_tokens(64));
    }
}
