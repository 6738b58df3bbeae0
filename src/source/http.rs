use super::*;
use anyhow::Context as _;
use futures::prelude::*;

/// Fetches the user list with a single GET request
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a new source for the provided url
    pub fn new(url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(env!("USERSEARCH_USER_AGENT"))
            .build()
            .context("cannot build the http client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn get_users(&self) -> anyhow::Result<Vec<User>> {
        log::debug!("fetching users from {}", self.url);

        let req = self.client.get(&self.url).build()?;
        let users: Vec<User> = self
            .client
            .execute(req)
            .await
            .with_context(|| format!("cannot reach `{}`", self.url))?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("cannot decode users from `{}`", self.url))?;

        log::info!("got {} user(s) from {}", users.len(), self.url);
        Ok(users)
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> UsersFut<'_> {
        self.get_users().boxed()
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    const USERS: &str = r#"[
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "company": { "name": "Deckow-Crist", "bs": "synergize scalable supply-chains" }
        }
    ]"#;

    #[tokio::test]
    async fn fetch() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path("/users"),
                request::headers(contains(("user-agent", env!("USERSEARCH_USER_AGENT")))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("Content-Type", "application/json")
                    .body(USERS),
            ),
        );

        let source = HttpSource::new(server.url_str("/users")).unwrap();
        let users = source.fetch().await.unwrap();
        assert_eq!(
            users,
            vec![
                User::new(1, "Leanne Graham", "Romaguera-Crona"),
                User::new(2, "Ervin Howell", "Deckow-Crist"),
            ]
        );
    }

    #[tokio::test]
    async fn bad_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/users"))
                .respond_with(status_code(500)),
        );

        let source = HttpSource::new(server.url_str("/users")).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(err.to_string().contains("500"), "{}", err);
    }

    #[tokio::test]
    async fn malformed_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/users"))
                .respond_with(status_code(200).body(r#"{"users": []}"#)),
        );

        let source = HttpSource::new(server.url_str("/users")).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(err.to_string().contains("cannot decode users"), "{}", err);
    }

    #[tokio::test]
    async fn unreachable() {
        // nothing is listening on the discard port
        let source = HttpSource::new("http://127.0.0.1:9/users").unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(err.to_string().contains("cannot reach"), "{}", err);
    }
}
