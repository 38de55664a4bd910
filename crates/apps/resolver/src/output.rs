use std::path::Path;

use roster::Member;

use crate::error::ResolveError;

/// `members.json` contents: two-space indented array plus a trailing newline.
pub fn render_members(members: &[Member]) -> Result<String, ResolveError> {
    let mut text =
        serde_json::to_string_pretty(members).map_err(|e| ResolveError::Io(e.to_string()))?;
    text.push('\n');
    Ok(text)
}

/// Replace the file at `path`. Readers see either the old or the new document.
pub async fn write_members(path: &Path, members: &[Member]) -> Result<(), ResolveError> {
    let text = render_members(members)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, text).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
