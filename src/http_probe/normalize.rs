use url::{Host, Url};

use crate::error::CheckError;

const DEFAULT_SCHEME: &str = "https://";

/// Turn user input into a request target.
///
/// - Surrounding whitespace is trimmed.
/// - Input without `://` is assumed to be `https://`.
/// - Only `http` and `https` targets with a host are accepted.
/// - A domain host must have at least two labels, unless it is `localhost`.
///   IP literals are always accepted.
pub fn normalize_url(input: &str) -> Result<Url, CheckError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(malformed(trimmed, "empty input"));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|e| malformed(trimmed, &e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(malformed(trimmed, &format!("unsupported scheme {other}"))),
    }

    match url.host() {
        None => Err(malformed(trimmed, "missing host")),
        Some(Host::Domain(domain)) if !is_plausible_domain(domain) => {
            Err(malformed(trimmed, &format!("{domain} is not a domain name")))
        }
        Some(_) => Ok(url),
    }
}

fn is_plausible_domain(domain: &str) -> bool {
    if domain == "localhost" {
        return true;
    }
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let mut labels = domain.split('.');
    labels.clone().count() >= 2 && labels.all(|label| !label.is_empty())
}

fn malformed(input: &str, reason: &str) -> CheckError {
    CheckError::MalformedInput {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
