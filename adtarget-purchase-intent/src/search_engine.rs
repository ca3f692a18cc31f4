//! Recognised search-engine result pages and their query parameters.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

struct SearchEngine {
    host: Regex,
    path_prefix: &'static str,
    query_param: &'static str,
}

fn search_engines() -> &'static [SearchEngine] {
    static ENGINES: OnceLock<Vec<SearchEngine>> = OnceLock::new();
    ENGINES.get_or_init(|| {
        [
            (r"^(www\.)?google(\.[a-z]{2,3}){1,2}$", "/search", "q"),
            (r"^(www\.|cn\.)?bing\.com$", "/search", "q"),
            (r"^(html\.|lite\.)?duckduckgo\.com$", "/", "q"),
            (r"^([a-z]{2}\.)?search\.yahoo\.com$", "/search", "p"),
            (r"^search\.brave\.com$", "/search", "q"),
            (r"^(www\.)?ecosia\.org$", "/search", "q"),
            (r"^(www\.)?startpage\.com$", "/", "query"),
            (r"^(www\.)?qwant\.com$", "/", "q"),
            (r"^yandex\.(ru|com)$", "/search", "text"),
        ]
        .into_iter()
        .filter_map(|(pattern, path_prefix, query_param)| {
            Regex::new(pattern).ok().map(|host| SearchEngine {
                host,
                path_prefix,
                query_param,
            })
        })
        .collect()
    })
}

/// Whether `url` is a result page of a recognised search engine.
pub fn is_search_engine(url: &Url) -> bool {
    find(url).is_some()
}

/// The raw search query of a recognised result page, if present and non-empty.
pub fn extract_search_query(url: &Url) -> Option<String> {
    let engine = find(url)?;
    url.query_pairs()
        .find(|(key, _)| key == engine.query_param)
        .map(|(_, value)| value.trim().to_string())
        .filter(|query| !query.is_empty())
}

fn find(url: &Url) -> Option<&'static SearchEngine> {
    let host = url.host_str()?.to_ascii_lowercase();
    search_engines()
        .iter()
        .find(|engine| engine.host.is_match(&host) && url.path().starts_with(engine.path_prefix))
}
