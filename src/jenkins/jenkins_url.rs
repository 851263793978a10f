use crate::jenkins_error::JenkinsError;
use url::Url;

/// # build request url
///
/// `<base_url><path><api_suffix>[?params]`
///
/// The path is joined by plain concatenation onto whatever path the base url already has,
/// so a jenkins served under a prefix like "https://example.com/jenkins" keeps its prefix.
/// Segments are not escaped beyond what [`Url::set_path`] does.
///
/// ### Arguments
///
/// * `base_url`: jenkins root url.
/// * `path`: endpoint path, empty or with a leading slash.
/// * `api_suffix`: appended after the path, like "/api/json".
/// * `params`: query pairs. if empty, the url gets no query string.
pub(crate) fn build_request_url(
    base_url: &str,
    path: &str,
    api_suffix: Option<&str>,
    params: &[(&str, &str)],
) -> Result<Url, JenkinsError> {
    let mut url = Url::parse(base_url)?;

    let full_path = format!(
        "{}{}{}",
        url.path().trim_end_matches('/'),
        path,
        api_suffix.unwrap_or_default()
    );
    url.set_path(&full_path);

    if !params.is_empty() {
        url.query_pairs_mut().clear().extend_pairs(params);
    }

    Ok(url)
}
