use crate::types::{NewsItem, PublicItem, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project records into their public shape, preserving order. The internal
/// timestamp is dropped unless `include_date` asks for an RFC 3339 copy.
pub fn to_public(items: &[NewsItem], include_date: bool) -> Vec<PublicItem> {
    items
        .iter()
        .map(|item| PublicItem {
            title: item.title.clone(),
            description: item.description.clone(),
            link: item.link.clone(),
            image: item.image.clone(),
            date: include_date.then(|| item.timestamp.to_rfc3339()),
        })
        .collect()
}

/// Write the serialized collection to `path`. The JSON goes to a sibling
/// temporary file first and is renamed into place, so a failed run leaves
/// any previous output untouched.
pub fn write_output(path: &Path, items: &[NewsItem], include_date: bool) -> Result<()> {
    let body = serde_json::to_vec_pretty(&to_public(items, include_date))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, &body)?;
    fs::rename(&tmp, path)?;
    debug!("Wrote {} bytes to {}", body.len(), path.display());
    Ok(())
}
