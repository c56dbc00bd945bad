//! Scripted gateway shared by the application tests

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use study_domain::{ModelId, ResponseMode};

/// A prompt the gateway received
#[derive(Debug, Clone)]
pub struct SentPrompt {
    pub model: ModelId,
    pub prompt: String,
    pub mode: ResponseMode,
}

pub struct MockGateway {
    catalog: Result<Vec<ModelId>, GatewayError>,
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    sent: Mutex<Vec<SentPrompt>>,
    list_calls: AtomicUsize,
    /// Returned once the script runs out
    exhausted: Option<GatewayError>,
}

impl MockGateway {
    pub fn new(catalog: &[&str]) -> Self {
        Self {
            catalog: Ok(catalog.iter().map(ModelId::new).collect()),
            responses: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
            exhausted: None,
        }
    }

    pub fn with_catalog_error(mut self, error: GatewayError) -> Self {
        self.catalog = Err(error);
        self
    }

    pub fn always_fail(mut self, error: GatewayError) -> Self {
        self.exhausted = Some(error);
        self
    }

    pub fn respond(self, text: &str) -> Self {
        self.script(Ok(text.to_string()))
    }

    pub fn fail(self, error: GatewayError) -> Self {
        self.script(Err(error))
    }

    fn script(self, response: Result<String, GatewayError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn sent(&self) -> Vec<SentPrompt> {
        self.sent.lock().unwrap().clone()
    }

    pub fn generate_calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

pub fn rate_limited() -> GatewayError {
    GatewayError::RateLimited("429 RESOURCE_EXHAUSTED".to_string())
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn list_models(&self) -> Result<Vec<ModelId>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog.clone()
    }

    async fn generate(
        &self,
        model: &ModelId,
        prompt: &str,
        mode: ResponseMode,
    ) -> Result<String, GatewayError> {
        self.sent.lock().unwrap().push(SentPrompt {
            model: model.clone(),
            prompt: prompt.to_string(),
            mode,
        });
        let next = self.responses.lock().unwrap().pop_front();
        match (next, &self.exhausted) {
            (Some(response), _) => response,
            (None, Some(error)) => Err(error.clone()),
            (None, None) => Err(GatewayError::Provider {
                status: 500,
                message: "no scripted response".to_string(),
            }),
        }
    }
}

/// Task runner over a mock gateway with the default retry policy.
pub fn runner(gateway: std::sync::Arc<MockGateway>) -> crate::use_cases::shared::TaskRunner {
    use crate::config::RetryPolicy;
    use crate::invocation::InvocationClient;
    use crate::model_selector::ModelSelector;
    use std::sync::Arc;
    use study_domain::{ModelPreferences, PromptBuilder};

    let selector = Arc::new(ModelSelector::new(
        gateway.clone(),
        ModelPreferences::default(),
    ));
    let invocation = Arc::new(InvocationClient::new(
        gateway,
        selector,
        RetryPolicy::default(),
    ));
    crate::use_cases::shared::TaskRunner::new(invocation, PromptBuilder::default())
}
