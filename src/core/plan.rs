use crate::domain::model::RenderJob;
use std::ffi::{OsStr, OsString};
use std::path::Path;

pub const SOURCE_SUFFIX: &str = ".dot";
pub const DEFAULT_DIRECTORY: &str = "graphs/";
pub const DEFAULT_RENDERER: &str = "dot";
pub const DEFAULT_FORMAT: &str = "ps";

/// Case-sensitive tail match on the raw entry name, so names that are not
/// valid UTF-8 still qualify.
pub fn is_source_entry(name: &OsStr) -> bool {
    name.as_encoded_bytes()
        .ends_with(SOURCE_SUFFIX.as_bytes())
}

/// File suffix for a renderer format. `png:cairo` selects a renderer
/// variant but still writes a `.png`.
pub fn output_extension(format: &str) -> &str {
    format.split(':').next().unwrap_or(format)
}

/// `a.dot` -> `a.<ext>`. `None` when `name` is not a source entry.
pub fn output_file_name(name: &OsStr, format: &str) -> Option<OsString> {
    if !is_source_entry(name) {
        return None;
    }

    let extension = output_extension(format);
    // A bare `.dot` has no stem as far as `Path` is concerned.
    if name == SOURCE_SUFFIX {
        return Some(OsString::from(format!(".{}", extension)));
    }

    let mut output = Path::new(name).file_stem()?.to_os_string();
    output.push(".");
    output.push(extension);
    Some(output)
}

pub fn plan_job(directory: &Path, name: &OsStr, format: &str) -> Option<RenderJob> {
    let output_name = output_file_name(name, format)?;
    Some(RenderJob {
        input: directory.join(name),
        output: directory.join(output_name),
        format: format.to_string(),
    })
}

/// Plans one job per source entry, keeping listing order.
pub fn plan_jobs(directory: &Path, names: &[OsString], format: &str) -> Vec<RenderJob> {
    names
        .iter()
        .filter_map(|name| {
            let job = plan_job(directory, name, format);
            if job.is_none() {
                tracing::trace!("Ignoring {:?}", name);
            }
            job
        })
        .collect()
}
