//! Remote generation and order service, exposed as processors.
//!
//! The generation and mail-order flows are generic over any
//! [`Processor`] with the right input and output, so tests can swap the
//! HTTP client for an in-memory fake.

use kanau::processor::Processor;
use letterdrop_sdk::client::{ApiClient, ClientError};
use letterdrop_sdk::objects::{
    CreateOrderRequest, GenerateLetterRequest, GenerateLetterResponse, OrderResponse,
};

/// The Letterdrop HTTP API.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    client: ApiClient,
}

impl RemoteApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Processor<GenerateLetterRequest> for RemoteApi {
    type Output = GenerateLetterResponse;
    type Error = ClientError;
    #[tracing::instrument(skip_all, name = "HTTP:GenerateLetter")]
    async fn process(
        &self,
        request: GenerateLetterRequest,
    ) -> Result<GenerateLetterResponse, ClientError> {
        self.client.generate_letter(&request).await
    }
}

impl Processor<CreateOrderRequest> for RemoteApi {
    type Output = OrderResponse;
    type Error = ClientError;
    #[tracing::instrument(skip_all, name = "HTTP:CreateOrder")]
    async fn process(&self, request: CreateOrderRequest) -> Result<OrderResponse, ClientError> {
        self.client.create_order(&request).await
    }
}
