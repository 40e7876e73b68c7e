use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid GitHub URL: {0}")]
pub struct InvalidRepoUrl(pub String);

/// Owner and repository name: the first two non-empty path segments.
///
/// Absolute URLs use their path (`https://github.com/rust-lang/rust/tree/master` →
/// `rust-lang`, `rust`). Input that is not an absolute URL is taken as a path as-is,
/// minus any query or fragment, so `rust-lang/rust` also parses.
pub fn parse_repo_url(raw: &str) -> Result<(String, String), InvalidRepoUrl> {
    let path = match Url::parse(raw) {
        Ok(url) => url.path().to_string(),
        Err(_) => raw.split(|c: char| c == '?' || c == '#').next().unwrap_or_default().to_string(),
    };
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(owner), Some(name)) => Ok((owner.to_string(), name.to_string())),
        _ => Err(InvalidRepoUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(owner: &str, name: &str) -> Result<(String, String), InvalidRepoUrl> {
        Ok((owner.to_string(), name.to_string()))
    }

    #[test]
    fn https_url_yields_owner_and_name() {
        assert_eq!(
            parse_repo_url("https://github.com/rust-lang/rust"),
            pair("rust-lang", "rust")
        );
    }

    #[test]
    fn extra_segments_query_and_trailing_slash_are_ignored() {
        assert_eq!(
            parse_repo_url("https://github.com/tokio-rs/tokio/tree/master/tokio?tab=readme#top"),
            pair("tokio-rs", "tokio")
        );
        assert_eq!(
            parse_repo_url("https://github.com/serde-rs/json/"),
            pair("serde-rs", "json")
        );
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(
            parse_repo_url("https://github.com//owner//name"),
            pair("owner", "name")
        );
    }

    #[test]
    fn bare_path_parses() {
        assert_eq!(parse_repo_url("owner/name"), pair("owner", "name"));
    }

    #[test]
    fn fewer_than_two_segments_is_invalid() {
        for raw in ["https://github.com", "https://github.com/", "https://github.com/only", "", "solo"] {
            assert_eq!(
                parse_repo_url(raw),
                Err(InvalidRepoUrl(raw.to_string())),
                "input {:?}",
                raw
            );
        }
    }
}
