use crate::client::BackendClient;
use crate::errors::OperationError;
use crate::page::Page;
use crate::render;
use crate::requests::{self, ApiRequest, Operation};
use crate::responses;
use crate::tokens::RequestTokens;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// What happened to one operation invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result was rendered into the operation's container.
    Rendered,
    /// The operation failed and raised an alert.
    Failed,
    /// Input was missing or unusable; an alert was raised and nothing was sent.
    Aborted,
    /// A newer invocation of the same operation was issued meanwhile, so
    /// this response was dropped.
    Superseded,
}

/// Runs the page's operations against the backend and renders their results
/// into the shared [`Page`].
#[derive(Clone)]
pub struct PageController {
    client: BackendClient,
    page: Arc<Mutex<Page>>,
    tokens: Arc<RequestTokens>,
}

impl PageController {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            page: Arc::new(Mutex::new(Page::default())),
            tokens: Arc::new(RequestTokens::default()),
        }
    }

    pub fn page(&self) -> &Arc<Mutex<Page>> {
        &self.page
    }

    /// Page-ready trigger: statistics and column list load side by side.
    pub async fn initialize(&self) -> (Outcome, Outcome) {
        tokio::join!(self.load_statistics(), self.load_columns())
    }

    pub async fn load_statistics(&self) -> Outcome {
        self.run(requests::statistics_request()).await
    }

    pub async fn load_columns(&self) -> Outcome {
        self.run(requests::columns_request()).await
    }

    pub async fn load_data(&self, limite: &str) -> Outcome {
        self.run(requests::data_request(limite)).await
    }

    pub async fn filter_data(&self, columna: &str, valor: &str, operador: &str) -> Outcome {
        match requests::filter_request(columna, valor, operador) {
            Ok(request) => self.run(request).await,
            Err(missing) => self.abort(Operation::Filter, missing).await,
        }
    }

    pub async fn analyze_data(&self, tipo_analisis: &str) -> Outcome {
        self.run(requests::analysis_request(tipo_analisis)).await
    }

    pub async fn load_record(&self, id: &str) -> Outcome {
        match requests::record_request(id) {
            Ok(request) => self.run(request).await,
            Err(invalid) => self.abort(Operation::Record, invalid).await,
        }
    }

    async fn abort(&self, operation: Operation, reason: impl std::fmt::Display) -> Outcome {
        error!(operation = operation.name(), "aborted before sending: {reason}");
        self.page.lock().await.raise_alert(reason.to_string());
        Outcome::Aborted
    }

    async fn run(&self, request: ApiRequest) -> Outcome {
        let operation = request.operation;
        let token = self.tokens.issue(operation);

        let result = match self.client.send(&request).await {
            Ok(response) => responses::handle_response(operation, response.status, &response.body),
            Err(err) => Err(OperationError::from(err)),
        };

        let mut page = self.page.lock().await;
        if !self.tokens.is_current(token) {
            debug!(operation = operation.name(), "dropping superseded response");
            return Outcome::Superseded;
        }

        match result {
            Ok(model) => {
                page.set(operation.container(), render::render_model(&model));
                info!(
                    operation = operation.name(),
                    container = operation.container().id(),
                    "rendered"
                );
                Outcome::Rendered
            }
            Err(err) => {
                error!(operation = operation.name(), "{err}");
                page.raise_alert(err.to_string());
                Outcome::Failed
            }
        }
    }
}
