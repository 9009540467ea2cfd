//! Trait abstraction for the order service to enable mocking in tests

use super::client::{OrderClient, OrderClientError, OrderResponse};
use crate::state::OrderRequest;
use async_trait::async_trait;

/// Something that can place pizza orders
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Send one order and wait for the service's verdict
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, OrderClientError>;
}

#[async_trait]
impl OrderService for OrderClient {
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, OrderClientError> {
        OrderClient::place_order(self, order).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_service_returns_configured_reply() {
        let mut mock = MockOrderService::new();
        mock.expect_place_order()
            .withf(|order| order.full_name == "Alice")
            .times(1)
            .returning(|_| {
                Ok(OrderResponse {
                    message: "Order placed".into(),
                })
            });

        let order = OrderRequest {
            full_name: "Alice".into(),
            size: "L".into(),
            toppings: vec![],
        };
        let reply = tokio_test::block_on(mock.place_order(&order)).unwrap();
        assert_eq!(reply.message, "Order placed");
    }
}
