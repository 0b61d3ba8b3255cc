use std::future::Future;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

/// A row of `team_members`. Every field is optional and anything we do not
/// name is kept in `extra` untouched.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A row of `testimonials`, read the same lenient way as `TeamMember`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

async fn fetch_collection<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let response = Request::get(&config::api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to reach {}: {}", path, e))?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("Request to {} failed with status {}", path, status),
        });
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", path, e))
}

pub async fn fetch_team_members() -> Result<Vec<TeamMember>, String> {
    fetch_collection(config::TEAM_MEMBERS_PATH).await
}

pub async fn fetch_testimonials() -> Result<Vec<Testimonial>, String> {
    fetch_collection(config::TESTIMONIALS_PATH).await
}

/// Runs `fetch` once on mount and exposes its progress.
#[hook]
pub fn use_collection<T, F, Fut>(fetch: F) -> FetchState<Vec<T>>
where
    T: Clone + PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match fetch().await {
                        Ok(rows) => state.set(FetchState::Loaded(rows)),
                        Err(e) => {
                            log::error!("{}", e);
                            state.set(FetchState::Failed(e));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }
    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn team_member_keeps_unknown_fields() {
        let member: TeamMember = serde_json::from_value(json!({
            "id": 3,
            "name": "Ada",
            "role": "Founder",
            "bio": null,
            "image_url": "/assets/team/ada.png",
            "created_at": 1_700_000_000,
            "linkedin": "https://linkedin.com/in/ada"
        }))
        .unwrap();

        assert_eq!(member.name.as_deref(), Some("Ada"));
        assert_eq!(member.bio, None);
        assert_eq!(member.extra["id"], json!(3));
        assert_eq!(member.extra["linkedin"], json!("https://linkedin.com/in/ada"));
    }

    #[test]
    fn records_with_missing_fields_still_parse() {
        let rows: Vec<Testimonial> = serde_json::from_str(r#"[{}, {"quote": "Great work"}]"#).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].author, None);
        assert_eq!(rows[1].quote.as_deref(), Some("Great work"));
        assert!(rows[1].extra.is_empty());
    }

    #[test]
    fn urls_point_at_the_content_routes() {
        assert!(config::api_url(config::TEAM_MEMBERS_PATH).ends_with("/api/team-members"));
        assert!(config::api_url(config::TESTIMONIALS_PATH).ends_with("/api/testimonials"));
    }
}
