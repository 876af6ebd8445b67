use crate::domain::models::ImageMapping;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn image_file_name(code: u16) -> String {
    format!("{}.jpg", code)
}

pub fn image_path(images_dir: &Path, code: u16) -> PathBuf {
    images_dir.join(image_file_name(code))
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Writes image bytes to a `.part` sibling and renames it into place, so
/// `path` only ever exists with complete contents.
pub fn write_image(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = partial_path(path);
    let written = std::fs::File::create(&tmp).and_then(|mut f| {
        f.write_all(bytes)?;
        f.sync_all()
    });
    match written.and_then(|()| std::fs::rename(&tmp, path)) {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = std::fs::remove_file(&tmp);
            Err(e)
        }
    }
}

/// Missing file reads as an empty mapping.
pub fn load_mapping(path: &Path) -> anyhow::Result<ImageMapping> {
    if !path.exists() {
        return Ok(ImageMapping::new());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_mapping(path: &Path, mapping: &ImageMapping) -> anyhow::Result<()> {
    let mut body = serde_json::to_string_pretty(mapping)?;
    body.push('\n');
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot write mapping {}", path.display()))?;
    }
    std::fs::write(path, body)
        .with_context(|| format!("cannot write mapping {}", path.display()))
}
