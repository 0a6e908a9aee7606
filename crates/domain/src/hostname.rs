pub const OFFICIAL_SUFFIX: &str = "gov.pl";

/// `gov.pl` itself or any hostname ending in `.gov.pl`.
///
/// Plain string comparison: `notgov.pl` does not match because the separator
/// dot is missing.
pub fn is_official_suffix(hostname: &str) -> bool {
    let hostname = hostname.to_lowercase();
    hostname == OFFICIAL_SUFFIX
        || hostname
            .strip_suffix(OFFICIAL_SUFFIX)
            .is_some_and(|rest| rest.ends_with('.'))
}

/// Accepts both `https` and the URL-model form `https:`.
pub fn is_secure_protocol(protocol: &str) -> bool {
    protocol
        .trim()
        .trim_end_matches(':')
        .eq_ignore_ascii_case("https")
}

/// The hostname followed by each parent domain, stopping before the bare TLD.
///
/// `evil.sub.example.com` yields `evil.sub.example.com`, `sub.example.com`,
/// `example.com`. A single-label hostname yields only itself.
pub fn self_and_parents(hostname: &str) -> Vec<&str> {
    let mut out = vec![hostname];
    let mut rest = hostname;
    while let Some(pos) = rest.find('.') {
        rest = &rest[pos + 1..];
        if !rest.contains('.') {
            break;
        }
        out.push(rest);
    }
    out
}
