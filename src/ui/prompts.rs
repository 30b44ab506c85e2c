//! Interactive prompts with CI/non-interactive fallback

use super::context::UiContext;
use crate::error::{PackratError, PackratResult};

/// Prompt for confirmation, returns default if non-interactive or auto-yes
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> PackratResult<bool> {
    // Auto-yes mode bypasses prompts
    if ctx.auto_yes() {
        println!("  {} (auto-approved)", message);
        return Ok(true);
    }

    // Non-interactive mode returns default
    if !ctx.is_interactive() {
        return Ok(default);
    }

    // Run blocking cliclack prompt in spawn_blocking
    let message = message.to_string();
    let result = tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| PackratError::User(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| PackratError::User(format!("Prompt failed: {}", e)))
}

/// Prompt for a line of text; empty input maps to `None`.
///
/// Non-interactive mode returns `None` without prompting.
pub async fn input_optional(ctx: &UiContext, message: &str) -> PackratResult<Option<String>> {
    if !ctx.is_interactive() || ctx.auto_yes() {
        return Ok(None);
    }

    let message = message.to_string();
    let result = tokio::task::spawn_blocking(move || {
        cliclack::input(&message)
            .required(false)
            .interact::<String>()
    })
    .await
    .map_err(|e| PackratError::User(format!("Prompt task failed: {}", e)))?;

    let value = result.map_err(|e| PackratError::User(format!("Prompt failed: {}", e)))?;
    let value = value.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}
