use starter_shell::backend::auth::gate::{BuildProfile, GateOptions, Outcome, evaluate};
use starter_shell::backend::auth::restrict::AuthRestrict;
use starter_shell::backend::auth::session::{
    Connection, CurrentUser, QueryError, SessionQuery, UserRole,
};

fn user(role: UserRole) -> CurrentUser {
    CurrentUser {
        id: "42".to_string(),
        username: "bob".to_string(),
        name: Some("Bob".to_string()),
        avatar_url: None,
        role,
        is_verified: false,
        organization_memberships: Connection::default(),
    }
}

fn all_masks() -> Vec<AuthRestrict> {
    let flags = [
        AuthRestrict::LOGGED_OUT,
        AuthRestrict::LOGGED_IN,
        AuthRestrict::NOT_ADMIN,
    ];
    (0..8)
        .map(|bits: usize| {
            flags
                .iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .fold(AuthRestrict::NEVER, |acc, (_, f)| acc | *f)
        })
        .collect()
}

fn all_sessions() -> Vec<SessionQuery> {
    let mut sessions = Vec::new();
    let bases = [
        SessionQuery::pending(),
        SessionQuery::signed_out(),
        SessionQuery::signed_in(user(UserRole::User)),
        SessionQuery::signed_in(user(UserRole::Admin)),
    ];
    for base in bases {
        for loading in [false, true] {
            for error in [None, Some(QueryError::new("boom"))] {
                let mut query = base.clone();
                query.loading = loading;
                query.error = error;
                sessions.push(query);
            }
        }
    }
    sessions
}

fn options(restrict: AuthRestrict, profile: BuildProfile) -> GateOptions {
    GateOptions::new(restrict, profile)
}

#[test]
fn dashboard_scenario_redirects_to_login() {
    let query = SessionQuery {
        data: Some(Default::default()),
        loading: false,
        error: None,
    };

    let outcome = evaluate(
        &options(AuthRestrict::LOGGED_OUT, BuildProfile::Production),
        &query,
        "/dashboard",
    );
    assert_eq!(outcome, Outcome::Redirect("/login?next=%2Fdashboard".to_string()));
}

#[test]
fn present_user_with_logged_in_mask_always_goes_home() {
    for mask in all_masks().into_iter().filter(|m| m.forbids_logged_in()) {
        for query in all_sessions().iter().filter(|q| q.current_user().is_some()) {
            assert_eq!(
                evaluate(&options(mask, BuildProfile::Development), query, "/p"),
                Outcome::Redirect("/".to_string()),
                "mask {mask}, session {query:?}"
            );
        }
    }
}

#[test]
fn non_admin_with_not_admin_mask_goes_home() {
    for mask in all_masks().into_iter().filter(|m| m.forbids_not_admin()) {
        for query in all_sessions()
            .iter()
            .filter(|q| q.current_user().is_some_and(|u| !u.is_admin()))
        {
            assert_eq!(
                evaluate(&options(mask, BuildProfile::Production), query, "/admin"),
                Outcome::Redirect("/".to_string())
            );
        }
    }
}

#[test]
fn absent_user_is_sent_to_login_with_round_tripping_next() {
    let path = "/o/acme/members?page=2&sort=name desc";
    for mask in all_masks().into_iter().filter(|m| m.forbids_logged_out()) {
        let outcome = evaluate(
            &options(mask, BuildProfile::Development),
            &SessionQuery::signed_out(),
            path,
        );
        let Outcome::Redirect(target) = outcome else {
            panic!("expected redirect for {mask}");
        };
        let encoded = target.strip_prefix("/login?next=").expect("login target");
        assert_eq!(urlencoding::decode(encoded).unwrap(), path);
    }
}

#[test]
fn errors_show_notice_in_development_and_content_in_production() {
    let mut query = SessionQuery::signed_out();
    query.error = Some(QueryError::new("boom"));

    for mask in all_masks().into_iter().filter(|m| !m.forbids_logged_in()) {
        assert_eq!(
            evaluate(&options(mask, BuildProfile::Development), &query, "/"),
            Outcome::ErrorNotice(QueryError::new("boom"))
        );
        match evaluate(&options(mask, BuildProfile::Production), &query, "/") {
            Outcome::Content(props) => {
                assert_eq!(props.error, Some(QueryError::new("boom")));
                assert!(!props.loading);
                assert!(props.current_user.is_none());
            }
            other => panic!("expected content, got {other:?}"),
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    for mask in all_masks() {
        for query in all_sessions() {
            for profile in [BuildProfile::Development, BuildProfile::Production] {
                let opts = options(mask, profile);
                assert_eq!(
                    evaluate(&opts, &query, "/x"),
                    evaluate(&opts, &query, "/x")
                );
            }
        }
    }
}

#[test]
fn unrestricted_pages_never_redirect() {
    for query in all_sessions() {
        let outcome = evaluate(&options(AuthRestrict::NEVER, BuildProfile::Production), &query, "/");
        assert!(matches!(outcome, Outcome::Content(_)), "{query:?}");
    }
}
