//! User management operations.

use tracing::instrument;

use pocketid_client::{ListParams, Result};

use crate::client::to_body;
use crate::types::{OneTimeAccessToken, Paginated, User, UserCreate, UserGroup, UserUpdate};

impl super::PocketIdAdminClient {
    /// List users, optionally paginated, searched, or sorted.
    pub async fn list_users(&self, params: Option<&ListParams>) -> Result<Paginated<User>> {
        self.client.get_list("/api/users", params).await?.into_json()
    }

    /// Get one user by id.
    pub async fn get_user(&self, id: &str) -> Result<User> {
        self.client
            .get(&format!("/api/users/{id}"), &[])
            .await?
            .into_json()
    }

    /// Create a user.
    #[instrument(skip(self, user))]
    pub async fn create_user(&self, user: &UserCreate) -> Result<User> {
        self.client
            .post("/api/users", Some(&to_body(user)?))
            .await?
            .into_json()
    }

    /// Apply a partial update to a user.
    #[instrument(skip(self, update))]
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<User> {
        self.client
            .put(&format!("/api/users/{id}"), Some(&to_body(update)?))
            .await?
            .into_json()
    }

    /// Delete a user.
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/api/users/{id}")).await?;
        Ok(())
    }

    /// List the groups a user belongs to.
    pub async fn groups_for_user(&self, id: &str) -> Result<Vec<UserGroup>> {
        self.client
            .get(&format!("/api/users/{id}/groups"), &[])
            .await?
            .into_json()
    }

    /// Replace a user's group memberships with the given set.
    pub async fn set_user_groups(&self, id: &str, group_ids: &[String]) -> Result<User> {
        let body = serde_json::json!({ "userGroupIds": group_ids });
        self.client
            .put(&format!("/api/users/{id}/user-groups"), Some(&body))
            .await?
            .into_json()
    }

    /// Mint a one-time access token for a user.
    pub async fn create_one_time_access_token(&self, id: &str) -> Result<OneTimeAccessToken> {
        self.client
            .post(&format!("/api/users/{id}/one-time-access-token"), None)
            .await?
            .into_json()
    }

    /// Email a one-time access link to a user.
    pub async fn send_one_time_access_email(&self, id: &str) -> Result<()> {
        self.client
            .post(&format!("/api/users/{id}/one-time-access-email"), None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::PocketIdAdminClient;
    use crate::types::{UserCreate, UserUpdate};
    use pocketid_client::{ListParams, PocketIdConfig};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn admin_for(server: &MockServer) -> PocketIdAdminClient {
        Mock::given(method("GET"))
            .and(path("/healthz"))
            .respond_with(ResponseTemplate::new(200))
            .mount(server)
            .await;
        PocketIdAdminClient::new(PocketIdConfig::new(server.uri(), "test-key")).unwrap()
    }

    fn user_json(id: &str, username: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "username": username,
            "displayName": "Alice Doe",
            "firstName": "Alice"
        })
    }

    #[tokio::test]
    async fn test_list_users_paginated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(query_param("pagination[page]", "1"))
            .and(query_param("search", "ali"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [user_json("u1", "alice")],
                "pagination": {"currentPage": 1, "itemsPerPage": 20, "totalItems": 1, "totalPages": 1}
            })))
            .mount(&server)
            .await;

        let admin = admin_for(&server).await;
        let page = admin
            .list_users(Some(&ListParams::new().page(1).search("ali")))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].username, "alice");
    }

    #[tokio::test]
    async fn test_create_user_sends_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .and(body_json(serde_json::json!({
                "username": "alice",
                "displayName": "Alice Doe",
                "firstName": "Alice",
                "email": "alice@example.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u1", "alice")))
            .expect(1)
            .mount(&server)
            .await;

        let admin = admin_for(&server).await;
        let user = admin
            .create_user(&UserCreate {
                username: "alice".to_string(),
                display_name: "Alice Doe".to_string(),
                first_name: "Alice".to_string(),
                email: Some("alice@example.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(user.id, "u1");
    }

    #[tokio::test]
    async fn test_update_user_is_partial() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users/u1"))
            .and(body_json(serde_json::json!({"disabled": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u1", "alice")))
            .expect(1)
            .mount(&server)
            .await;

        let admin = admin_for(&server).await;
        admin
            .update_user(
                "u1",
                &UserUpdate {
                    disabled: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_user_accepts_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/u1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let admin = admin_for(&server).await;
        admin.delete_user("u1").await.unwrap();
    }

    #[tokio::test]
    async fn test_set_user_groups_wraps_ids() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users/u1/user-groups"))
            .and(body_json(serde_json::json!({"userGroupIds": ["g1", "g2"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u1", "alice")))
            .expect(1)
            .mount(&server)
            .await;

        let admin = admin_for(&server).await;
        admin
            .set_user_groups("u1", &["g1".to_string(), "g2".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_one_time_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/u1/one-time-access-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "ott-123"})),
            )
            .mount(&server)
            .await;

        let admin = admin_for(&server).await;
        let token = admin.create_one_time_access_token("u1").await.unwrap();
        assert_eq!(token.token, "ott-123");
    }
}
