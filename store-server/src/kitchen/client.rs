//! HTTP kitchen client

use std::time::Duration;

use async_trait::async_trait;
use shared::order::CookRequest;

use super::{KitchenNotifier, NotifyError};

/// Posts cook requests to `{base_url}/cook`
#[derive(Debug, Clone)]
pub struct HttpKitchen {
    client: reqwest::Client,
    cook_url: String,
}

impl HttpKitchen {
    /// Build a client whose every request is bounded by `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(NotifyError::Client)?;

        Ok(Self {
            client,
            cook_url: format!("{}/cook", base_url.trim_end_matches('/')),
        })
    }

    pub fn cook_url(&self) -> &str {
        &self.cook_url
    }
}

#[async_trait]
impl KitchenNotifier for HttpKitchen {
    async fn start_cooking(&self, request: &CookRequest) -> Result<(), NotifyError> {
        let response = self.client.post(&self.cook_url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::debug!(
            order_id = %request.order_id,
            status = status.as_u16(),
            "Kitchen acknowledged cook request"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cook_url_tolerates_trailing_slash() {
        let kitchen = HttpKitchen::new("http://kitchen:8081/", Duration::from_secs(1)).unwrap();
        assert_eq!(kitchen.cook_url(), "http://kitchen:8081/cook");

        let kitchen = HttpKitchen::new("http://kitchen:8081", Duration::from_secs(1)).unwrap();
        assert_eq!(kitchen.cook_url(), "http://kitchen:8081/cook");
    }

    #[tokio::test]
    async fn unreachable_kitchen_is_an_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let kitchen = HttpKitchen::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let request = CookRequest {
            order_id: uuid::Uuid::new_v4(),
            order_items: vec![shared::order::OrderItem::new("Margherita", 1)],
        };

        let err = kitchen.start_cooking(&request).await.unwrap_err();
        assert!(matches!(
            err,
            NotifyError::Unreachable(_) | NotifyError::Timeout
        ));
    }
}
