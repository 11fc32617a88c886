// internal crates
use crate::http::errors::{HTTPErr, InvalidURLErr};
use crate::trace;

// external crates
use url::Url;

/// Appends `segments` to the path of `base_url`. Each segment is percent-encoded
/// on its own, so a '/' inside an ID can't reach a different route. Empty
/// segments are kept.
///
/// Dot segments are rejected: URL parsing resolves `.` and `..` (and their
/// `%2E` forms) against the preceding path, so they can't be sent verbatim.
pub fn join(base_url: &str, segments: &[&str]) -> Result<String, HTTPErr> {
    if let Some(segment) = segments.iter().find(|s| is_dot_segment(s)) {
        return Err(HTTPErr::InvalidURLErr(InvalidURLErr {
            url: base_url.to_string(),
            msg: format!("path segment '{segment}' is not addressable"),
            trace: trace!(),
        }));
    }
    let mut url = Url::parse(base_url).map_err(|e| {
        HTTPErr::InvalidURLErr(InvalidURLErr {
            url: base_url.to_string(),
            msg: e.to_string(),
            trace: trace!(),
        })
    })?;
    {
        let mut path = url.path_segments_mut().map_err(|_| {
            HTTPErr::InvalidURLErr(InvalidURLErr {
                url: base_url.to_string(),
                msg: "url cannot be a base".to_string(),
                trace: trace!(),
            })
        })?;
        path.pop_if_empty();
        path.extend(segments);
    }
    Ok(url.to_string())
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}
