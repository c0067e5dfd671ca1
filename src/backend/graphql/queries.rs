//! GraphQL documents used by the shell.

const USER_FIELDS: &str = r#"
fragment SharedLayout_User on User {
  id
  username
  name
  avatarUrl
  role
  isVerified
  organizationMemberships(first: 20) {
    nodes {
      isOwner
      organization {
        id
        name
        slug
      }
    }
  }
}
"#;

pub fn shared_query() -> String {
    format!(
        "query SharedQuery {{ currentUser {{ ...SharedLayout_User }} }}\n{USER_FIELDS}"
    )
}

pub fn current_user_updated_subscription() -> String {
    format!(
        "subscription CurrentUserUpdated {{ currentUserUpdated {{ event user {{ ...SharedLayout_User }} }} }}\n{USER_FIELDS}"
    )
}

pub const LOGIN_MUTATION: &str = r#"
mutation Login($username: String!, $password: String!) {
  login(input: { username: $username, password: $password }) {
    user {
      id
    }
  }
}
"#;

pub const LOGOUT_MUTATION: &str = r#"
mutation Logout {
  logout {
    success
  }
}
"#;

pub const CREATE_ORGANIZATION_MUTATION: &str = r#"
mutation CreateOrganization($name: String!, $slug: String!) {
  createOrganization(input: { name: $name, slug: $slug }) {
    organization {
      id
      name
      slug
    }
  }
}
"#;
