use crate::config::{Config, GuideSource};
use crate::models::{
    error::AppError,
    guides::{GuideResults, catalog, filter_guides},
};
use crate::services::api::AgriClient;
use gloo_timers::future::TimeoutFuture;

/// Searches the in-memory catalog. Blank topics return every guide.
pub fn search_catalog(topic: &str) -> GuideResults {
    GuideResults {
        topic: topic.to_string(),
        guides: filter_guides(&catalog(), topic),
    }
}

/// Topic worth asking the backend about. Blank topics are answered from
/// the local catalog without a request.
fn remote_topic(topic: &str) -> Option<&str> {
    let topic = topic.trim();
    (!topic.is_empty()).then_some(topic)
}

/// Loads guides for `topic` from the configured [`GuideSource`].
pub async fn load_guides(topic: String) -> Result<GuideResults, AppError> {
    load_guides_from(Config::GUIDE_SOURCE, topic).await
}

pub async fn load_guides_from(
    source: GuideSource,
    topic: String,
) -> Result<GuideResults, AppError> {
    match source {
        GuideSource::Local => {
            TimeoutFuture::new(Config::LOCAL_GUIDES_DELAY_MS).await;
            Ok(search_catalog(&topic))
        }
        GuideSource::Remote => {
            let Some(query) = remote_topic(&topic) else {
                return Ok(search_catalog(&topic));
            };
            let guides = AgriClient::from_environment()?.fetch_guides(query).await?;
            Ok(GuideResults { topic, guides })
        }
    }
}
