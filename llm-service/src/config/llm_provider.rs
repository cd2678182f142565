/// Represents the provider (backend) used for large language model (LLM) inference.
///
/// This enum distinguishes between the hosted Gemini API and a local Ollama
/// runtime. Adding more providers in the future (e.g., OpenAI, Anthropic)
/// can be done by extending this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Google Generative AI (Gemini) REST API.
    Gemini,
    /// Local Ollama runtime for on-device inference.
    Ollama,
}
