use gloo_net::http::Request;
use gloo_net::Error;
use serde::{de::DeserializeOwned, Serialize};

use crate::models::{Interface, Rule, RuleDraft, RulePatch};

/* URL de base de l'API */
const BASE: &str = "http://127.0.0.1:5000";

/// Transport seam. The endpoint operations below only see these three
/// calls, so they can run against an in-memory backend in tests.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error>;
    async fn post_form(&self, path: &str, body: String) -> Result<u16, Error>;
    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<u16, Error>;
}

/// Production transport over the browser fetch API.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct HttpBackend;

impl Backend for HttpBackend {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        Request::get(&format!("{BASE}{path}")).send().await?.json().await
    }

    async fn post_form(&self, path: &str, body: String) -> Result<u16, Error> {
        let resp = Request::post(&format!("{BASE}{path}"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)?
            .send()
            .await?;
        Ok(resp.status())
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<u16, Error> {
        let resp = Request::post(&format!("{BASE}{path}"))
            .json(body)?
            .send()
            .await?;
        Ok(resp.status())
    }
}

/// Outcome of a write followed by its snapshot refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    /// 2xx, and the follow-up rule fetch succeeded.
    Refreshed(Vec<Rule>),
    /// 2xx, but the follow-up rule fetch failed; the list stays stale.
    Accepted,
    /// Non-2xx status. No refresh is attempted.
    Rejected(u16),
}

/* -------------------------------------------------------------------------- */
/*                           endpoint operations                              */
/* -------------------------------------------------------------------------- */

pub async fn fetch_rules<B: Backend>(backend: &B) -> Result<Vec<Rule>, Error> {
    backend.get_json("/get_applications").await
}

pub async fn fetch_interfaces<B: Backend>(backend: &B) -> Result<Vec<Interface>, Error> {
    backend.get_json("/get_interfaces").await
}

// Values go out verbatim: a name containing `&`, `=` or `%` corrupts the
// body. The deployed backend expects exactly this encoding.
fn add_form(draft: &RuleDraft) -> String {
    format!("name={}&interface={}", draft.name, draft.interface)
}

pub async fn add_rule<B: Backend>(backend: &B, draft: &RuleDraft) -> Result<WriteOutcome, Error> {
    let status = backend.post_form("/add_rule", add_form(draft)).await?;
    refresh_after(backend, status).await
}

pub async fn delete_rule<B: Backend>(backend: &B, id: i64) -> Result<WriteOutcome, Error> {
    let status = backend.post_form("/delete_rule", format!("id={id}")).await?;
    refresh_after(backend, status).await
}

pub async fn update_rules<B: Backend>(
    backend: &B,
    pairs: &[RulePatch],
) -> Result<WriteOutcome, Error> {
    let status = backend.post_json("/update_rules", pairs).await?;
    refresh_after(backend, status).await
}

async fn refresh_after<B: Backend>(backend: &B, status: u16) -> Result<WriteOutcome, Error> {
    if !(200..300).contains(&status) {
        return Ok(WriteOutcome::Rejected(status));
    }
    match fetch_rules(backend).await {
        Ok(rules) => Ok(WriteOutcome::Refreshed(rules)),
        Err(err) => {
            log::error!("rule refresh after write: {err:?}");
            Ok(WriteOutcome::Accepted)
        }
    }
}

/* -------------------------------------------------------------------------- */
/*                                   tests                                    */
/* -------------------------------------------------------------------------- */
