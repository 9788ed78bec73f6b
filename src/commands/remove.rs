use anyhow::{Context, Result};
use dialoguer::Confirm;

use crate::store::UserStore;
use crate::ui::prelude::*;

/// Delete user records by id. Ids with no record are skipped silently.
pub fn remove_users(store: &UserStore, ids: &[i64], yes: bool) -> Result<()> {
    // Destructive, so confirm in text mode unless -y was given. JSON mode is
    // for scripts and never prompts.
    if !yes && get_output_format() == OutputFormat::Text {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} user record(s)? This cannot be undone",
                ids.len()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            emit(Level::Info, "user.remove.cancelled", "Nothing deleted.", None);
            return Ok(());
        }
    }

    let removed = store.delete_many(ids).context("users not removed")?;

    let message = if removed == ids.len() {
        format!("Removed {} user record(s)", removed)
    } else {
        format!(
            "Removed {} of {} user record(s), the rest did not exist",
            removed,
            ids.len()
        )
    };

    match get_output_format() {
        OutputFormat::Json => {
            let data = serde_json::json!({
                "requested": ids,
                "removed": removed,
            });
            emit(Level::Success, "user.remove", &message, Some(data));
        }
        OutputFormat::Text => {
            emit(Level::Success, "user.remove", &message, None);
        }
    }

    Ok(())
}
