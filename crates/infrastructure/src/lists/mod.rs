pub mod feed_parser;
pub mod http_fetcher;

pub use feed_parser::{parse_feed, parse_feed_line, FeedFormat};
pub use http_fetcher::{build_http_client, HttpListFetcher};
