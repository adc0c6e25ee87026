use remixer_core::models::generation::{CANDIDATE_MARKER, GenerationRequest};

use crate::chat::ChatMessage;

pub const GHOST_WRITER_PROMPT: &str = "\
You are a ghost-writer who turns long-form text into posts for a social \
platform. Read the user's text and write between three and five standalone \
posts that keep its main message. Write in a natural first-person voice, \
avoid hashtags unless they carry meaning, and keep each post under 280 \
characters. Put every post on its own line and start each of those lines \
with the exact prefix TWEET: followed by a space. Output nothing else.";

/// System + user messages for one generation request.
pub fn build_messages(request: &GenerationRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(request.prompt_template.clone()),
        ChatMessage::user(request.source_text.clone()),
    ]
}

/// True when the prompt still tells the model to use the candidate marker.
pub fn mentions_marker(prompt: &str) -> bool {
    prompt.contains(CANDIDATE_MARKER)
}
