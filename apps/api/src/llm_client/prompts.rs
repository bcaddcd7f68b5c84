// Shared prompt fragments. Each feature that calls the completion service
// defines its own prompts.rs alongside it.

/// Appended to every system prompt. The chat-completions JSON mode also
/// requires the word "JSON" to appear in the messages.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Return ONLY valid JSON. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown code fences.";
