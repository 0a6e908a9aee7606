use govpl_verifier_domain::ListKind;

/// Layout of a downloaded list body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    /// dns.pl registry export: CSV with the domain in the first column.
    OfficialCsv,
    /// CERT Polska feed: one domain per line, occasionally written as a URL.
    MaliciousDomains,
}

impl FeedFormat {
    pub fn for_kind(kind: ListKind) -> Self {
        match kind {
            ListKind::Official => FeedFormat::OfficialCsv,
            ListKind::Malicious => FeedFormat::MaliciousDomains,
        }
    }
}

pub fn parse_feed_line(format: FeedFormat, line: &str) -> Option<String> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }

    let field = match format {
        FeedFormat::OfficialCsv => first_csv_field(line),
        FeedFormat::MaliciousDomains => line,
    };

    let entry = field.replace(['"', '\''], "").trim().to_lowercase();

    let entry = match format {
        FeedFormat::OfficialCsv => entry,
        FeedFormat::MaliciousDomains => strip_scheme_and_path(&entry).to_string(),
    };

    if entry.is_empty() {
        return None;
    }

    // Header rows and stray labels in the registry export have no dot.
    if format == FeedFormat::OfficialCsv && !entry.contains('.') {
        return None;
    }

    Some(entry)
}

pub fn parse_feed(format: FeedFormat, text: &str) -> Vec<String> {
    text.trim_start_matches('\u{feff}')
        .lines()
        .filter_map(|line| parse_feed_line(format, line))
        .collect()
}

fn first_csv_field(line: &str) -> &str {
    line.split([',', ';']).next().unwrap_or(line)
}

fn strip_scheme_and_path(entry: &str) -> &str {
    let host = entry
        .strip_prefix("https://")
        .or_else(|| entry.strip_prefix("http://"))
        .unwrap_or(entry);

    match host.find('/') {
        Some(pos) => host[..pos].trim(),
        None => host.trim(),
    }
}
