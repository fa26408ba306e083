#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// The signed-in user as seen by the UI.
///
/// Replaced wholesale by the current-user fetch or cleared on logout; never
/// persisted, so a page reload re-derives it from the server.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub metadata: Option<UserMetadata>,
}

/// Structured per-user metadata.
///
/// Nothing consumes this yet; it keeps the wire shape extensible without an
/// untyped value bag in the user model.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub roles: Vec<String>,
    pub locale: Option<String>,
}

/// Wire shape of the `current-user` endpoint response.
///
/// All fields are optional from the client's perspective; absent fields map
/// to empty/unset fields on [`User`].
#[derive(Clone, Debug, serde::Deserialize)]
pub struct CurrentUserResponse {
    pub real_name: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
}

impl From<CurrentUserResponse> for User {
    fn from(resp: CurrentUserResponse) -> Self {
        Self {
            name: resp.real_name.unwrap_or_default(),
            email: resp.user_id,
            username: resp.user_name,
            avatar_url: None,
            metadata: None,
        }
    }
}
