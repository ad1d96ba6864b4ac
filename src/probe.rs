use crate::config::EnvSource;
use serde::Serialize;
use tracing::debug;

/// How much of the key the previews expose: enough to compare against a
/// dashboard, never the whole value.
pub const PREFIX_PREVIEW_CHARS: usize = 12;
pub const SUFFIX_PREVIEW_CHARS: usize = 8;

/// Snapshot of one environment variable's presence and shape.
///
/// The preview and length fields are `Some` if and only if `present` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyProbeResult {
    pub present: bool,
    pub prefix_preview: Option<String>,
    pub suffix_preview: Option<String>,
    pub length: Option<usize>,
}

impl KeyProbeResult {
    fn absent() -> Self {
        Self {
            present: false,
            prefix_preview: None,
            suffix_preview: None,
            length: None,
        }
    }
}

/// Probe `name` in the given environment.
///
/// An unset or empty variable is a normal outcome, not an error. Lengths and
/// previews are counted in characters so multi-byte values never split a
/// character boundary.
pub fn inspect(source: &dyn EnvSource, name: &str) -> KeyProbeResult {
    let value = match source.get(name) {
        Some(v) if !v.is_empty() => v,
        _ => {
            debug!("{} is unset or empty", name);
            return KeyProbeResult::absent();
        }
    };

    let length = value.chars().count();
    debug!("{} is set ({} characters)", name, length);

    let prefix = if length >= PREFIX_PREVIEW_CHARS {
        value.chars().take(PREFIX_PREVIEW_CHARS).collect()
    } else {
        value.clone()
    };
    let suffix = if length >= SUFFIX_PREVIEW_CHARS {
        let skip = length - SUFFIX_PREVIEW_CHARS;
        value.chars().skip(skip).collect()
    } else {
        value.clone()
    };

    KeyProbeResult {
        present: true,
        prefix_preview: Some(prefix),
        suffix_preview: Some(suffix),
        length: Some(length),
    }
}
