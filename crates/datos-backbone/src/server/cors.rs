use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
        },
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::config::CorsConfig;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Origin admission rules built from [`CorsConfig`].
#[derive(Debug)]
pub(crate) enum CorsPolicy {
    AllowAll,
    AllowList(Vec<OriginPattern>),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum OriginPattern {
    Exact(String),
    /// `https://*.vercel.app` admits any origin with that prefix and suffix and a non-empty middle.
    Wildcard { prefix: String, suffix: String },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Admission {
    AnyOrigin,
    Origin(HeaderValue),
    Denied,
}

impl OriginPattern {
    pub(crate) fn parse(pattern: &str) -> Self {
        match pattern.split_once('*') {
            Some((prefix, suffix)) if !suffix.contains('*') => {
                Self::Wildcard { prefix: prefix.to_owned(), suffix: suffix.to_owned() }
            }
            _ => Self::Exact(pattern.to_owned()),
        }
    }

    pub(crate) fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Exact(allowed) => allowed == origin,
            Self::Wildcard { prefix, suffix } => {
                origin.len() > prefix.len() + suffix.len() && origin.starts_with(prefix) && origin.ends_with(suffix)
            }
        }
    }
}

impl From<CorsConfig> for CorsPolicy {
    fn from(value: CorsConfig) -> Self {
        match value {
            CorsConfig::AllowAll => Self::AllowAll,
            CorsConfig::AllowList { origins } => {
                Self::AllowList(origins.iter().map(|origin| OriginPattern::parse(origin)).collect())
            }
        }
    }
}

impl CorsPolicy {
    pub(crate) fn varies_by_origin(&self) -> bool {
        matches!(self, Self::AllowList(_))
    }

    pub(crate) fn admit(&self, origin: Option<&HeaderValue>) -> Admission {
        let Some(origin) = origin else {
            return Admission::Denied;
        };

        match self {
            Self::AllowAll => Admission::AnyOrigin,
            Self::AllowList(patterns) => {
                let admitted = origin.to_str().is_ok_and(|value| patterns.iter().any(|pattern| pattern.matches(value)));
                if admitted {
                    Admission::Origin(origin.clone())
                } else {
                    Admission::Denied
                }
            }
        }
    }
}

/// Runs before routing. Denied origins pass through without any `Access-Control-*` header; the browser enforces
/// the block. Allow-list responses to a request carrying `Origin` still get `Vary: Origin` so caches keep them apart.
pub(crate) async fn gate(State(policy): State<Arc<CorsPolicy>>, request: Request, next: Next) -> Response {
    let admission = policy.admit(request.headers().get(ORIGIN));
    if admission == Admission::Denied {
        let varies_by_origin = match request.headers().get(ORIGIN) {
            Some(origin) => {
                debug!(?origin, "origin is not allowed, no cors headers attached.");
                policy.varies_by_origin()
            }
            None => false,
        };

        let mut response = next.run(request).await;
        if varies_by_origin {
            response.headers_mut().append(VARY, HeaderValue::from_static("Origin"));
        }
        return response;
    }

    let mut response =
        if request.method() == Method::OPTIONS { StatusCode::OK.into_response() } else { next.run(request).await };

    apply_cors_headers(response.headers_mut(), admission);
    response
}

fn apply_cors_headers(headers: &mut HeaderMap, admission: Admission) {
    match admission {
        Admission::AnyOrigin => {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        }
        Admission::Origin(origin) => {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
            headers.append(VARY, HeaderValue::from_static("Origin"));
        }
        Admission::Denied => return,
    }

    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
}

#[cfg(test)]
mod test {
    use axum::http::HeaderValue;

    use super::{Admission, CorsPolicy, OriginPattern};
    use crate::config::CorsConfig;

    fn allow_list(origins: &[&str]) -> CorsPolicy {
        CorsConfig::AllowList { origins: origins.iter().map(|origin| (*origin).to_owned()).collect() }.into()
    }

    #[test]
    fn when_pattern_has_single_wildcard_then_it_is_parsed_as_prefix_and_suffix() {
        assert_eq!(
            OriginPattern::parse("https://*.vercel.app"),
            OriginPattern::Wildcard { prefix: "https://".to_owned(), suffix: ".vercel.app".to_owned() }
        );
        assert_eq!(
            OriginPattern::parse("http://localhost:3000"),
            OriginPattern::Exact("http://localhost:3000".to_owned())
        );
        assert_eq!(OriginPattern::parse("https://*.*.app"), OriginPattern::Exact("https://*.*.app".to_owned()));
    }

    #[test]
    fn when_origin_is_a_subdomain_of_wildcard_then_it_matches() {
        let pattern = OriginPattern::parse("https://*.vercel.app");

        assert!(pattern.matches("https://x.vercel.app"));
        assert!(pattern.matches("https://my-dashboard-git-main.vercel.app"));
        assert!(!pattern.matches("https://.vercel.app"));
        assert!(!pattern.matches("http://x.vercel.app"));
        assert!(!pattern.matches("https://x.vercel.app.evil.example"));
    }

    #[test]
    fn when_origin_is_listed_then_it_is_admitted_and_echoed() {
        let policy = allow_list(&["http://localhost:3000", "https://*.vercel.app"]);
        let origin = HeaderValue::from_static("http://localhost:3000");

        assert_eq!(policy.admit(Some(&origin)), Admission::Origin(origin.clone()));
    }

    #[test]
    fn when_origin_is_not_listed_then_it_is_denied() {
        let policy = allow_list(&["http://localhost:3000", "https://*.vercel.app"]);

        assert_eq!(policy.admit(Some(&HeaderValue::from_static("https://evil.example"))), Admission::Denied);
        assert_eq!(policy.admit(Some(&HeaderValue::from_static("http://localhost:3001"))), Admission::Denied);
    }

    #[test]
    fn when_origin_header_is_absent_then_request_is_not_treated_as_cross_origin() {
        assert_eq!(allow_list(&["http://localhost:3000"]).admit(None), Admission::Denied);
        assert_eq!(CorsPolicy::AllowAll.admit(None), Admission::Denied);
    }

    #[test]
    fn when_policy_is_an_allow_list_then_responses_vary_by_origin() {
        assert!(allow_list(&["http://localhost:3000"]).varies_by_origin());
        assert!(!CorsPolicy::AllowAll.varies_by_origin());
    }

    #[test]
    fn when_policy_allows_all_then_any_origin_is_admitted() {
        assert_eq!(
            CorsPolicy::AllowAll.admit(Some(&HeaderValue::from_static("https://evil.example"))),
            Admission::AnyOrigin
        );
    }
}
