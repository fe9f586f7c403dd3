use std::sync::{Arc, Mutex};

use crossbeam_queue::SegQueue;
use serde_json::{json, Value};
use teams_api::{GraphqlClient, GraphqlRequest, OperationKind, TransportResult};
use teams_api::errors::TransportError;

/// An operation as received by a test double.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedOperation {
    pub kind: OperationKind,
    pub request: GraphqlRequest,
}

impl RecordedOperation {
    pub fn root_field(&self) -> Option<&str> {
        self.request.root_field()
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.request.variable(name)
    }
}

/// Answers operations with a fixed sequence of responses, in order, whatever they ask for.
///
/// Clones share the same script and recordings, so a test can keep a clone around after
/// handing one to the client.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    responses: Arc<SegQueue<TransportResult<Value>>>,
    operations: Arc<Mutex<Vec<RecordedOperation>>>,
}

impl ScriptedClient {
    /// Queues raw response envelopes.
    #[must_use]
    pub fn with_responses(self, responses: impl IntoIterator<Item = Value>) -> Self {
        for response in responses {
            self.responses.push(Ok(response));
        }
        self
    }

    /// Queues a response carrying `data`.
    #[must_use]
    pub fn with_data(self, data: Value) -> Self {
        self.with_responses([json!({ "data": data })])
    }

    /// Queues a response without data or errors.
    #[must_use]
    pub fn with_empty_response(self) -> Self {
        self.with_responses([json!({ "data": null })])
    }

    /// Queues a response where the server rejects the operation.
    #[must_use]
    pub fn with_errors<'a>(self, messages: impl IntoIterator<Item = &'a str>) -> Self {
        let errors: Vec<Value> = messages.into_iter().map(|message| json!({ "message": message })).collect();
        self.with_responses([json!({ "data": null, "errors": errors })])
    }

    /// Queues a transport failure.
    #[must_use]
    pub fn with_failure(self, error: TransportError) -> Self {
        self.responses.push(Err(error));
        self
    }

    /// Every operation received so far, oldest first.
    pub fn operations(&self) -> Vec<RecordedOperation> {
        self.operations.lock().unwrap().clone()
    }

    pub fn operation_count(&self) -> usize {
        self.operations.lock().unwrap().len()
    }

    pub fn remaining_responses(&self) -> usize {
        self.responses.len()
    }

    fn answer(&self, kind: OperationKind, request: GraphqlRequest) -> TransportResult<Value> {
        self.operations.lock().unwrap().push(RecordedOperation { kind, request });

        self.responses
            .pop()
            .unwrap_or_else(|| Err(TransportError::Request("no more scripted responses".into())))
    }
}

#[async_trait::async_trait]
impl GraphqlClient for ScriptedClient {
    async fn query(&self, request: GraphqlRequest) -> TransportResult<Value> {
        self.answer(OperationKind::Query, request)
    }

    async fn mutate(&self, request: GraphqlRequest) -> TransportResult<Value> {
        self.answer(OperationKind::Mutation, request)
    }
}
