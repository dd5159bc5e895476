use std::fmt;

/// Providers the generate flow can dispatch to. Only Anthropic ships in
/// v1; the `LLMClient` trait is the seam for adding more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Anthropic,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// An entry in the model catalogue. `id` is what setup stores in the
/// config block; `api_model` is the wire name sent to the provider.
#[derive(Debug, Clone, Copy)]
pub struct ModelOption {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: Provider,
    pub api_model: &'static str,
}

/// Models offered by setup and accepted by the generate flow.
pub const SUPPORTED_MODELS: &[ModelOption] = &[
    ModelOption {
        id: "anthropic/claude-sonnet-4-5",
        name: "Anthropic Claude Sonnet 4.5",
        provider: Provider::Anthropic,
        api_model: "claude-sonnet-4-5-20250929",
    },
    ModelOption {
        id: "anthropic/claude-haiku-4-5",
        name: "Anthropic Claude Haiku 4.5",
        provider: Provider::Anthropic,
        api_model: "claude-haiku-4-5-20251001",
    },
    ModelOption {
        id: "anthropic/claude-opus-4-1",
        name: "Anthropic Claude Opus 4.1",
        provider: Provider::Anthropic,
        api_model: "claude-opus-4-1-20250805",
    },
];

/// Look a model up by its configured id.
pub fn find_model(id: &str) -> Option<&'static ModelOption> {
    SUPPORTED_MODELS.iter().find(|m| m.id == id)
}

pub fn validate_model_id(id: &str) -> bool {
    find_model(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_model() {
        let model = find_model("anthropic/claude-sonnet-4-5").expect("registered model");
        assert_eq!(model.provider, Provider::Anthropic);
        assert!(model.api_model.starts_with("claude-"));
    }

    #[test]
    fn test_unknown_model_id() {
        assert!(find_model("openai/gpt-5").is_none());
        assert!(!validate_model_id(""));
    }

    #[test]
    fn test_ids_are_provider_prefixed_and_unique() {
        for model in SUPPORTED_MODELS {
            assert!(model.id.starts_with(&format!("{}/", model.provider)));
        }
        let mut ids: Vec<_> = SUPPORTED_MODELS.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SUPPORTED_MODELS.len());
    }
}
