use std::sync::Arc;

use cypress_mock_common::StructureError;
use cypress_mock_store::BaseDocument;
use serde_json::Value;
use tokio::sync::Mutex;

/// Shared request state: the base document plus the request counter.
///
/// Cloning is cheap and every clone shares the same counter, so the value
/// persists across requests for the lifetime of the process.
#[derive(Clone)]
pub struct ResponseGenerator {
    base: Arc<BaseDocument>,
    /// Window size for the next request. Starts at 1.
    counter: Arc<Mutex<u64>>,
}

impl ResponseGenerator {
    pub fn new(base: BaseDocument) -> Self {
        Self {
            base: Arc::new(base),
            counter: Arc::new(Mutex::new(1)),
        }
    }

    /// Renders the response for the current counter value, then advances it.
    ///
    /// The lock is held across render and increment so concurrent requests
    /// never share a counter value. A failed render leaves the counter as is.
    pub async fn handle_request(&self) -> Result<Value, StructureError> {
        let mut counter = self.counter.lock().await;
        let window = *counter;

        let response = self.base.render(window)?;
        *counter = window.saturating_add(1);

        tracing::info!(window, next = *counter, "rendered runs window");
        Ok(response)
    }

    pub async fn current(&self) -> u64 {
        *self.counter.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn generator(nodes: Value) -> ResponseGenerator {
        ResponseGenerator::new(BaseDocument::new(json!({
            "data": { "project": { "runs": { "totalCount": 0, "nodes": nodes } } }
        })))
    }

    fn total_count(response: &Value) -> u64 {
        response["data"]["project"]["runs"]["totalCount"]
            .as_u64()
            .unwrap()
    }

    #[tokio::test]
    async fn test_sequential_requests() {
        let generator = generator(json!(["A", "B", "C"]));

        for i in 1..=6u64 {
            let response = generator.handle_request().await.unwrap();
            let nodes = response["data"]["project"]["runs"]["nodes"]
                .as_array()
                .unwrap();
            let expected: Vec<Value> = ["A", "B", "C"][3 - i.min(3) as usize..]
                .iter()
                .map(|s| json!(s))
                .collect();

            assert_eq!(nodes, &expected);
            assert_eq!(total_count(&response), 5000 + i);
        }
        assert_eq!(generator.current().await, 7);
    }

    #[tokio::test]
    async fn test_same_request_twice_differs() {
        let generator = generator(json!([1, 2, 3]));
        let first = generator.handle_request().await.unwrap();
        let second = generator.handle_request().await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_clones_share_counter() {
        let generator = generator(json!([1]));
        let clone = generator.clone();

        generator.handle_request().await.unwrap();
        clone.handle_request().await.unwrap();

        assert_eq!(generator.current().await, 3);
    }

    #[tokio::test]
    async fn test_failed_render_keeps_counter() {
        let generator = ResponseGenerator::new(BaseDocument::new(json!({ "data": {} })));

        let err = generator.handle_request().await.unwrap_err();
        assert!(matches!(err, StructureError::MissingPath(_)));
        assert_eq!(generator.current().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_requests_get_distinct_counts() {
        let generator = generator(json!([1, 2, 3]));

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let generator = generator.clone();
                tokio::spawn(async move { generator.handle_request().await })
            })
            .collect();

        let mut counts = BTreeSet::new();
        for handle in handles {
            let response = handle.await.unwrap().unwrap();
            assert!(counts.insert(total_count(&response)));
        }

        assert_eq!(counts, (5001..=5050).collect::<BTreeSet<u64>>());
        assert_eq!(generator.current().await, 51);
    }
}
