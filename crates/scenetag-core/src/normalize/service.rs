use crate::config::{NamingConfig, lookup};

/// Streaming service named in the basename, as its canonical short tag.
///
/// Only whole alphanumeric tokens are considered, so `NF` does not match
/// inside `INFERNO`. The first recognized token in filename order wins.
#[must_use]
pub fn detect_service(basename: &str, config: &NamingConfig) -> Option<String> {
    basename
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .find_map(|token| lookup(&config.service_mapping, token))
        .map(str::to_string)
}
