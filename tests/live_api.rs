//! Opt-in live test against the real Anthropic API.
//!
//! Skips silently when no ANTHROPIC_API_KEY is configured, so CI and
//! offline runs stay green. Loads the key from .env via dotenvy, same
//! as an embedding application would.

use tonecraft::{emoji, transform, AnthropicClient, CompletionClient, ToneConfig, ToneRequest};

fn load_env() {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    for env_file in [".env.local", ".env"] {
        let path = manifest_dir.join(env_file);
        if path.exists() {
            let _ = dotenvy::from_path(&path);
            break;
        }
    }
}

#[tokio::test]
async fn live_formal_rewrite_differs_from_input() {
    load_env();
    let client = AnthropicClient::from_env();
    if !client.is_configured() {
        eprintln!("SKIP: No ANTHROPIC_API_KEY");
        return;
    }

    let config = ToneConfig::canonical();
    let req = ToneRequest {
        text: "the meeting is at 3pm".to_string(),
        message_category: "email".to_string(),
        length_class: "short".to_string(),
        tone: "formal".to_string(),
    };

    let resp = transform(&client, &config, &req).await.unwrap();
    eprintln!("[TEST] improved: {}", resp.improved_text);

    assert!(!resp.improved_text.is_empty());
    assert_ne!(resp.improved_text, req.text);
    // Formal forbids emoji on both the LLM and fallback paths.
    assert!(!emoji::contains_emoji(&resp.improved_text));
}
