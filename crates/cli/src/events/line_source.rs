use async_trait::async_trait;
use govpl_verifier_application::ports::{LifecycleEvent, NavigationEvent, NavigationEventSource};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

/// Navigation events read one per line:
///
/// - `<url>`: a page finished loading in a new tab
/// - `activate <tab> <url>`: an existing tab was brought to the front
/// - `install` / `update`: extension lifecycle
///
/// Blank lines and `#` comments are ignored.
pub struct LineEventSource<R> {
    lines: Lines<R>,
    next_tab_id: u64,
}

impl LineEventSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> LineEventSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            next_tab_id: 1,
        }
    }
}

#[async_trait]
impl<R> NavigationEventSource for LineEventSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_event(&mut self) -> Option<NavigationEvent> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    warn!(error = %e, "Failed to read navigation event");
                    return None;
                }
            };

            if let Some(event) = parse_event_line(&line, self.next_tab_id) {
                if let NavigationEvent::PageLoaded { tab_id, .. } = event {
                    self.next_tab_id = tab_id + 1;
                }
                return Some(event);
            }
        }
    }
}

pub fn parse_event_line(line: &str, next_tab_id: u64) -> Option<NavigationEvent> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    match line.to_ascii_lowercase().as_str() {
        "install" | "installed" => return Some(NavigationEvent::Lifecycle(LifecycleEvent::Installed)),
        "update" | "updated" => return Some(NavigationEvent::Lifecycle(LifecycleEvent::Updated)),
        _ => {}
    }

    let mut tokens = line.split_whitespace();
    if tokens
        .next()
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("activate"))
    {
        let tab_id = tokens.next().and_then(|id| id.parse::<u64>().ok())?;
        let url = tokens.next().map(str::to_string);
        return Some(NavigationEvent::TabActivated { tab_id, url });
    }

    Some(NavigationEvent::PageLoaded {
        tab_id: next_tab_id,
        url: Some(line.to_string()),
    })
}
