use serde::Serialize;

/// Trivia about a number, as returned by the numbers API. The remote body is
/// taken verbatim; `fact` is `None` when the lookup failed.
#[derive(Clone, Debug, Serialize)]
pub struct NumberFact {
    pub number: i32,
    pub fact: Option<String>,
}

/// Client for a numbersapi.com-style trivia endpoint (`GET <base>/{number}`,
/// plain-text response).
pub struct FactClient {
    client: reqwest::Client,
    base_url: String,
}

impl FactClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch the trivia fact for `number`.
    ///
    /// A failed or timed-out lookup degrades to `fact: None` rather than
    /// erroring, so a trivia outage never fails the movie request.
    pub async fn fetch_fact(&self, number: i32) -> NumberFact {
        match self.try_fetch(number).await {
            Ok(fact) => NumberFact { number, fact: Some(fact) },
            Err(err) => {
                tracing::warn!(number, error = %err, "number fact lookup failed");
                NumberFact { number, fact: None }
            }
        }
    }

    async fn try_fetch(&self, number: i32) -> Result<String, reqwest::Error> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), number);
        self.client.get(url).send().await?.error_for_status()?.text().await
    }
}
