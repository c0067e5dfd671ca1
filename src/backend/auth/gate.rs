//! Access gate: decides what a layout shows for the current session.

use crate::backend::auth::restrict::AuthRestrict;
use crate::backend::auth::session::{CurrentUser, QueryError, SessionQuery, SessionState};
use serde::{Deserialize, Serialize};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";

/// Whether development-only diagnostics are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    Development,
    Production,
}

impl BuildProfile {
    /// Profile of the running binary.
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }
}

impl Default for BuildProfile {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateOptions {
    pub restrict: AuthRestrict,
    /// The page renders query errors itself.
    pub no_handle_errors: bool,
    pub profile: BuildProfile,
}

impl GateOptions {
    pub fn new(restrict: AuthRestrict, profile: BuildProfile) -> Self {
        Self {
            restrict,
            no_handle_errors: false,
            profile,
        }
    }

    pub fn no_handle_errors(mut self, value: bool) -> Self {
        self.no_handle_errors = value;
        self
    }
}

/// Handed through to page content so it can adapt to loading or errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChildProps {
    pub error: Option<QueryError>,
    pub loading: bool,
    pub current_user: Option<CurrentUser>,
}

impl From<&SessionQuery> for ChildProps {
    fn from(query: &SessionQuery) -> Self {
        Self {
            error: query.error.clone(),
            loading: query.loading,
            current_user: query.current_user().cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Content(ChildProps),
    Redirect(String),
    ErrorNotice(QueryError),
}

/// Evaluates the gate. Pure: the same inputs always give the same outcome.
///
/// Redirects are checked first, so a forbidden signed-in user is sent home
/// even while a refetch is loading or has failed.
pub fn evaluate(options: &GateOptions, query: &SessionQuery, current_path: &str) -> Outcome {
    let restrict = options.restrict;

    match query.state() {
        SessionState::Authenticated(user) => {
            if restrict.forbids_logged_in() || (restrict.forbids_not_admin() && !user.is_admin()) {
                return Outcome::Redirect(HOME_PATH.to_string());
            }
        }
        SessionState::Anonymous => {
            if !query.loading && query.error.is_none() && restrict.forbids_logged_out() {
                return Outcome::Redirect(login_path(current_path));
            }
        }
        SessionState::Unknown => {}
    }

    if let Some(error) = &query.error {
        if !query.loading && !options.no_handle_errors && options.profile == BuildProfile::Development {
            return Outcome::ErrorNotice(error.clone());
        }
    }

    Outcome::Content(ChildProps::from(query))
}

/// Login page path that returns to `next` afterwards.
pub fn login_path(next: &str) -> String {
    format!("{LOGIN_PATH}?next={}", urlencoding::encode(next))
}

/// Where to go after login. Only in-app absolute paths are honoured.
///
/// `next` arrives already decoded by the router and is used as is.
pub fn safe_next(next: &str) -> String {
    if next.starts_with('/') && !next.starts_with("//") && !next.contains('\\') {
        next.to_string()
    } else {
        HOME_PATH.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::session::UserRole;
    use crate::backend::auth::session::fixtures::user;

    fn dev(restrict: AuthRestrict) -> GateOptions {
        GateOptions::new(restrict, BuildProfile::Development)
    }

    #[test]
    fn logged_in_user_is_sent_home_even_while_loading_or_failed() {
        let mut query = SessionQuery::signed_in(user(UserRole::Admin));
        query.loading = true;
        query.error = Some(QueryError::new("boom"));

        for loading in [true, false] {
            query.loading = loading;
            assert_eq!(
                evaluate(&dev(AuthRestrict::LOGGED_IN), &query, "/login"),
                Outcome::Redirect("/".to_string())
            );
        }
    }

    #[test]
    fn non_admin_is_sent_home_admin_passes() {
        let restrict = dev(AuthRestrict::NOT_ADMIN);

        let plain = SessionQuery::signed_in(user(UserRole::User));
        assert_eq!(
            evaluate(&restrict, &plain, "/admin"),
            Outcome::Redirect("/".to_string())
        );

        let admin = SessionQuery::signed_in(user(UserRole::Admin));
        assert!(matches!(evaluate(&restrict, &admin, "/admin"), Outcome::Content(_)));
    }

    #[test]
    fn anonymous_is_sent_to_login_with_next() {
        let outcome = evaluate(
            &dev(AuthRestrict::LOGGED_OUT),
            &SessionQuery::signed_out(),
            "/dashboard",
        );
        assert_eq!(outcome, Outcome::Redirect("/login?next=%2Fdashboard".to_string()));
    }

    #[test]
    fn unknown_session_is_not_redirected() {
        let outcome = evaluate(&dev(AuthRestrict::LOGGED_OUT), &SessionQuery::pending(), "/settings");
        assert_eq!(
            outcome,
            Outcome::Content(ChildProps {
                error: None,
                loading: true,
                current_user: None,
            })
        );
    }

    #[test]
    fn anonymous_with_error_gets_notice_not_login() {
        let mut query = SessionQuery::signed_out();
        query.error = Some(QueryError::new("network down"));

        let outcome = evaluate(&dev(AuthRestrict::LOGGED_OUT), &query, "/settings");
        assert_eq!(outcome, Outcome::ErrorNotice(QueryError::new("network down")));
    }

    #[test]
    fn error_notice_only_in_development() {
        let query = SessionQuery::failed(QueryError::new("boom"));

        let dev_outcome = evaluate(&dev(AuthRestrict::NEVER), &query, "/");
        assert_eq!(dev_outcome, Outcome::ErrorNotice(QueryError::new("boom")));

        let prod = GateOptions::new(AuthRestrict::NEVER, BuildProfile::Production);
        match evaluate(&prod, &query, "/") {
            Outcome::Content(props) => assert_eq!(props.error, Some(QueryError::new("boom"))),
            other => panic!("expected content, got {other:?}"),
        }
    }

    #[test]
    fn suppressed_errors_pass_through_to_content() {
        let query = SessionQuery::failed(QueryError::new("boom"));
        let options = dev(AuthRestrict::NEVER).no_handle_errors(true);
        assert!(matches!(evaluate(&options, &query, "/"), Outcome::Content(_)));
    }

    #[test]
    fn loading_error_is_not_reported_yet() {
        let mut query = SessionQuery::failed(QueryError::new("stale"));
        query.loading = true;
        assert!(matches!(evaluate(&dev(AuthRestrict::NEVER), &query, "/"), Outcome::Content(_)));
    }

    #[test]
    fn conflicting_flags_apply_in_order() {
        let all = AuthRestrict::LOGGED_OUT | AuthRestrict::LOGGED_IN | AuthRestrict::NOT_ADMIN;

        let signed_in = SessionQuery::signed_in(user(UserRole::Admin));
        assert_eq!(evaluate(&dev(all), &signed_in, "/x"), Outcome::Redirect("/".into()));

        let signed_out = SessionQuery::signed_out();
        assert_eq!(
            evaluate(&dev(all), &signed_out, "/x"),
            Outcome::Redirect("/login?next=%2Fx".into())
        );
    }

    #[test]
    fn login_path_round_trips() {
        for path in ["/", "/o/acme?tab=members", "/settings#emails", "/a b/ü"] {
            let target = login_path(path);
            let encoded = target.strip_prefix("/login?next=").unwrap();
            assert!(!encoded.contains('/'));
            assert_eq!(urlencoding::decode(encoded).unwrap(), path);
        }
    }

    #[test]
    fn safe_next_keeps_literal_percent_sequences() {
        assert_eq!(safe_next("/search?q=100%25"), "/search?q=100%25");
        assert_eq!(safe_next("/o/a%2Fb"), "/o/a%2Fb");
    }

    #[test]
    fn safe_next_rejects_external_targets() {
        assert_eq!(safe_next("/settings"), "/settings");
        assert_eq!(safe_next("%2Fsettings"), "/");
        assert_eq!(safe_next("/\\evil.example"), "/");
        assert_eq!(safe_next("/o/acme"), "/o/acme");
        assert_eq!(safe_next("https://evil.example"), "/");
        assert_eq!(safe_next("//evil.example"), "/");
        assert_eq!(safe_next(""), "/");
    }

    #[test]
    fn profile_parses_aliases() {
        assert_eq!(BuildProfile::parse("Production"), Some(BuildProfile::Production));
        assert_eq!(BuildProfile::parse(" dev "), Some(BuildProfile::Development));
        assert_eq!(BuildProfile::parse("staging"), None);
    }
}
