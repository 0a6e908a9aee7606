use govpl_verifier_application::use_cases::RefreshReport;
use govpl_verifier_domain::{CacheInfo, PageCheck, TrustLevel, Verdict, WarningKind};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn badge(level: TrustLevel) -> &'static str {
    match level {
        TrustLevel::Safe => "SAFE",
        TrustLevel::Warning => "WARNING",
        TrustLevel::Danger => "DANGER",
    }
}

fn interstitial(kind: Option<WarningKind>) -> &'static str {
    kind.map_or("none", |kind| kind.to_str())
}

pub fn render_verdict(verdict: &Verdict) -> String {
    let rows = [
        ("hostname", verdict.hostname.clone()),
        ("trust level", badge(verdict.trust_level).to_string()),
        ("gov.pl domain", yes_no(verdict.is_gov_suffix).to_string()),
        ("secure transport", yes_no(verdict.has_secure_transport).to_string()),
        ("official list", verdict.allow_list.to_string()),
        ("CERT Polska list", yes_no(verdict.is_on_block_list).to_string()),
        ("can verify", yes_no(verdict.can_verify()).to_string()),
        ("interstitial", interstitial(verdict.interstitial()).to_string()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("  {:<18}{}\n", format!("{}:", label), value));
    }
    for reason in &verdict.reasons {
        out.push_str(&format!("  - {}\n", reason));
    }
    out
}

pub fn render_check(check: &PageCheck) -> String {
    match check {
        PageCheck::Verified { url, verdict, .. } => {
            format!("{} [{}]\n{}", url, badge(verdict.trust_level), render_verdict(verdict))
        }
        PageCheck::Unreadable { message } => format!("[UNREADABLE] {}\n", message),
    }
}

/// Single-line form used by `watch`.
pub fn render_check_line(tab_id: u64, check: &PageCheck) -> String {
    match check {
        PageCheck::Verified {
            verdict,
            interstitial: Some(kind),
            ..
        } => format!(
            "tab {}: {} {} (can verify: {}, interstitial: {})",
            tab_id,
            badge(verdict.trust_level),
            verdict.hostname,
            yes_no(verdict.can_verify()),
            kind
        ),
        PageCheck::Verified { verdict, .. } => format!(
            "tab {}: {} {} (can verify: {})",
            tab_id,
            badge(verdict.trust_level),
            verdict.hostname,
            yes_no(verdict.can_verify())
        ),
        PageCheck::Unreadable { message } => format!("tab {}: UNREADABLE {}", tab_id, message),
    }
}

pub fn render_report(report: &RefreshReport) -> String {
    format!(
        "official list: {}\nmalicious list: {}\n",
        if report.official { "refreshed" } else { "FAILED" },
        if report.malicious { "refreshed" } else { "FAILED" }
    )
}

pub fn render_cache_info(info: &CacheInfo) -> String {
    let mut out = format!("{} list\n", info.kind);
    out.push_str(&format!("  domains:   {}\n", info.count));
    match (info.timestamp_ms, info.age_ms) {
        (Some(stamp), Some(age)) => {
            out.push_str(&format!("  stored at: {} (epoch ms)\n", stamp));
            out.push_str(&format!("  age:       {}s\n", age / 1000));
        }
        _ => out.push_str("  stored at: never\n"),
    }
    out.push_str(&format!("  expired:   {}\n", yes_no(info.is_expired)));
    if let Some(reference) = &info.reference_url {
        out.push_str(&format!("  reference: {}\n", reference));
    }
    out
}
