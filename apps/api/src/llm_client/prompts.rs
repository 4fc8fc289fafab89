// Instruction framing for the hosted instruct model.
// Each caller builds its own prompt text; this file only wraps it.

/// Wraps a system persona and a prompt in the `[INST]` framing expected by
/// Mistral-style instruct models.
pub fn instruct(system: &str, prompt: &str) -> String {
    format!("<s>[INST] {system}\n\n{prompt} [/INST]")
}
