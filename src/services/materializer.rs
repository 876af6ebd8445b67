use crate::config::{FetchMode, Settings};
use crate::domain::models::{
    EntryOutcome, EntryReport, FetchSummary, ImageMapping, RunMode, StatusRecord,
};
use crate::services::photos::{FetchError, ImageSearch, PexelsClient};
use crate::services::resolver::{ImageResolver, Resolution};
use crate::services::storage::{
    image_file_name, image_path, load_mapping, save_mapping, write_image,
};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn};

/// Runs the batch for `mode`. Nothing here aborts the run: a mapping that
/// cannot be written or a client that cannot be built is logged and every
/// entry is reported as failed.
pub fn materialize(
    catalog: &[StatusRecord],
    mode: &FetchMode,
    settings: &Settings,
) -> FetchSummary {
    match mode {
        FetchMode::Placeholder => {
            info!(
                "no photo service credential; writing placeholder mapping to {}",
                settings.mapping_path.display()
            );
            write_placeholder_mapping(catalog, settings)
        }
        FetchMode::Live(key) => match PexelsClient::new(key.clone(), settings) {
            Ok(client) => fetch_live(catalog, &client, settings, std::thread::sleep),
            Err(e) => {
                error!(error = %e, "cannot build photo service client");
                let entries = catalog
                    .iter()
                    .map(|r| EntryReport {
                        code: r.code,
                        outcome: EntryOutcome::Failed {
                            error: e.to_string(),
                        },
                    })
                    .collect();
                summarize(RunMode::Live, catalog.len(), entries, settings)
            }
        },
    }
}

pub fn placeholder_seed(code: u16) -> String {
    let base = format!("rabbit-{}", code);
    let digest = Sha256::digest(base.as_bytes());
    format!("{}-{}", base, &hex::encode(digest)[..8])
}

pub fn placeholder_url(placeholder_base: &str, code: u16) -> String {
    format!(
        "{}/{}/800/600",
        placeholder_base.trim_end_matches('/'),
        placeholder_seed(code)
    )
}

pub fn placeholder_mapping(catalog: &[StatusRecord], placeholder_base: &str) -> ImageMapping {
    catalog
        .iter()
        .map(|r| (r.code, placeholder_url(placeholder_base, r.code)))
        .collect()
}

/// Replaces the mapping file wholesale with one placeholder URL per code.
/// A failed write counts every code as failed.
pub fn write_placeholder_mapping(catalog: &[StatusRecord], settings: &Settings) -> FetchSummary {
    let mapping = placeholder_mapping(catalog, &settings.placeholder_base);
    let (written, failed) = match save_mapping(&settings.mapping_path, &mapping) {
        Ok(()) => (mapping.len(), 0),
        Err(e) => {
            let reason = format!("{e:#}");
            error!(error = %reason, "placeholder mapping not written");
            (0, catalog.len())
        }
    };
    FetchSummary {
        mode: RunMode::Placeholder,
        total: catalog.len(),
        downloaded: written,
        skipped: 0,
        failed,
        images_dir: settings.images_dir.display().to_string(),
        mapping_path: settings.mapping_path.display().to_string(),
        entries: Vec::new(),
    }
}

/// Live batch in catalog order. Codes whose image file already exists are
/// skipped without any network call or delay; `pause(settings.delay())` runs
/// between consecutive entries that reach the network.
pub fn fetch_live<S: ImageSearch>(
    catalog: &[StatusRecord],
    service: &S,
    settings: &Settings,
    mut pause: impl FnMut(Duration),
) -> FetchSummary {
    let resolver = ImageResolver::new(service, settings.per_page, settings.orientation);
    let mut entries = Vec::with_capacity(catalog.len());
    let mut after_network = false;

    for record in catalog {
        let target = image_path(&settings.images_dir, record.code);
        if target.exists() {
            info!(code = record.code, outcome = "skipped", "image already present");
            entries.push(EntryReport {
                code: record.code,
                outcome: EntryOutcome::Skipped,
            });
            continue;
        }

        if after_network {
            pause(settings.delay());
        }
        after_network = true;

        let outcome = match resolver.resolve(record.code, record.message) {
            Resolution::Found { url, tier, query } => {
                info!(
                    code = record.code,
                    outcome = "found",
                    tier = tier.as_str(),
                    query = %query,
                    %url
                );
                match download_to(service, &url, &target) {
                    Ok(bytes) => {
                        info!(
                            code = record.code,
                            outcome = "downloaded",
                            bytes,
                            path = %target.display()
                        );
                        EntryOutcome::Downloaded { tier, url }
                    }
                    Err(e) => {
                        warn!(code = record.code, outcome = "failed", error = %e);
                        EntryOutcome::Failed {
                            error: e.to_string(),
                        }
                    }
                }
            }
            Resolution::NoImage => {
                warn!(code = record.code, outcome = "no_image", "no image found");
                EntryOutcome::NoImage
            }
        };
        entries.push(EntryReport {
            code: record.code,
            outcome,
        });
    }

    update_local_mapping(catalog, settings);
    summarize(RunMode::Live, catalog.len(), entries, settings)
}

fn download_to<S: ImageSearch>(
    service: &S,
    url: &str,
    target: &Path,
) -> Result<usize, FetchError> {
    let bytes = service.download(url)?;
    write_image(target, &bytes)?;
    Ok(bytes.len())
}

/// Points every code with an image on disk at its local file, leaving other
/// entries of an existing mapping untouched.
fn update_local_mapping(catalog: &[StatusRecord], settings: &Settings) {
    let mut mapping = match load_mapping(&settings.mapping_path) {
        Ok(m) => m,
        Err(e) => {
            warn!(
                path = %settings.mapping_path.display(),
                error = %e,
                "existing mapping unreadable; rebuilding"
            );
            ImageMapping::new()
        }
    };
    for record in catalog {
        if image_path(&settings.images_dir, record.code).exists() {
            mapping.insert(record.code, image_file_name(record.code));
        }
    }
    if let Err(e) = save_mapping(&settings.mapping_path, &mapping) {
        let reason = format!("{e:#}");
        warn!(error = %reason, "failed to write mapping");
    }
}

fn summarize(
    mode: RunMode,
    total: usize,
    entries: Vec<EntryReport>,
    settings: &Settings,
) -> FetchSummary {
    let mut downloaded = 0;
    let mut skipped = 0;
    let mut failed = 0;
    for entry in &entries {
        match entry.outcome {
            EntryOutcome::Downloaded { .. } => downloaded += 1,
            EntryOutcome::Skipped => skipped += 1,
            EntryOutcome::NoImage | EntryOutcome::Failed { .. } => failed += 1,
        }
    }
    FetchSummary {
        mode,
        total,
        downloaded,
        skipped,
        failed,
        images_dir: settings.images_dir.display().to_string(),
        mapping_path: settings.mapping_path.display().to_string(),
        entries,
    }
}
