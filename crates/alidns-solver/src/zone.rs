//! Zone name and record label derivation
//!
//! Pure string operations, no DNS lookups. The resolved zone presented with
//! the challenge is treated as authoritative; correctness of the zone/FQDN
//! pairing is the protocol layer's responsibility.

use crate::error::SolverError;

/// Strip the single trailing dot from a resolved zone.
///
/// `example.com.` becomes `example.com`; input without a trailing dot passes
/// through unchanged. Only an empty zone is an error.
pub fn resolve_zone(resolved_zone: &str) -> Result<String, SolverError> {
    if resolved_zone.is_empty() {
        return Err(SolverError::InvalidInput(
            "resolved zone is empty".to_string(),
        ));
    }

    Ok(resolved_zone
        .strip_suffix('.')
        .unwrap_or(resolved_zone)
        .to_string())
}

/// Extract the record label ("RR") relative to the zone.
///
/// The FQDN is normalized by stripping its trailing dot, then the suffix
/// `.<zone>` is removed: `_acme-challenge.example.com.` under `example.com`
/// yields `_acme-challenge`. Nested subdomain labels keep their inner dots.
///
/// If the zone is not a suffix of the FQDN the normalized name is returned
/// unchanged. That pairing was validated upstream, so no error is raised
/// here.
pub fn extract_label(fqdn: &str, zone: &str) -> String {
    let name = fqdn.strip_suffix('.').unwrap_or(fqdn);
    let suffix = format!(".{zone}");

    match name.find(&suffix) {
        Some(idx) => name[..idx].to_string(),
        None => name.to_string(),
    }
}
