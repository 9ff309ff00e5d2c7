//! Response handling: `(status, body)` in, a render model or an
//! [`OperationError`] out.
//!
//! The body is parsed as JSON before the status is looked at, so a
//! rejected request with a non-JSON body reports the parse failure rather
//! than the operation's fixed message.

use crate::errors::OperationError;
use crate::models::{
    AnalysisResponse, DataResponse, FilterResponse, RecordResponse, Row, Statistics,
    StatisticsResponse,
};
use crate::requests::Operation;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderModel {
    Statistics(Statistics),
    Columns(Vec<String>),
    Rows(Vec<Row>),
    Analysis(Value),
    Record(Row),
}

pub fn handle_response(
    operation: Operation,
    status: StatusCode,
    body: &[u8],
) -> Result<RenderModel, OperationError> {
    let payload: Value = serde_json::from_slice(body).map_err(OperationError::connection)?;
    if !status.is_success() {
        return Err(OperationError::Rejected(operation.rejected_message()));
    }

    let model = match operation {
        Operation::Statistics => {
            RenderModel::Statistics(extract::<StatisticsResponse>(payload)?.estadisticas)
        }
        Operation::Columns => RenderModel::Columns(
            extract::<StatisticsResponse>(payload)?
                .estadisticas
                .columnas
                .unwrap_or_default(),
        ),
        Operation::Data => RenderModel::Rows(extract::<DataResponse>(payload)?.datos),
        Operation::Filter => RenderModel::Rows(extract::<FilterResponse>(payload)?.datos_filtrados),
        Operation::Analysis => RenderModel::Analysis(extract::<AnalysisResponse>(payload)?.analisis),
        Operation::Record => RenderModel::Record(extract::<RecordResponse>(payload)?.registro),
    };
    Ok(model)
}

fn extract<T: DeserializeOwned>(payload: Value) -> Result<T, OperationError> {
    serde_json::from_value(payload).map_err(OperationError::connection)
}
