//! Pure request builders: form input in, backend request out.
//!
//! Nothing here touches the network. Query values and path segments are
//! percent-encoded when the request is turned into a URL, so user input
//! containing `&`, `#` or spaces cannot corrupt the request.

use crate::errors::{InvalidRecordId, MissingInput};
use crate::page::Container;
use url::Url;

const API_PREFIX: [&str; 2] = ["excel", "negocio"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Statistics,
    Columns,
    Data,
    Filter,
    Analysis,
    Record,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Statistics,
        Operation::Columns,
        Operation::Data,
        Operation::Filter,
        Operation::Analysis,
        Operation::Record,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Statistics => "statistics",
            Operation::Columns => "columns",
            Operation::Data => "data",
            Operation::Filter => "filter",
            Operation::Analysis => "analysis",
            Operation::Record => "record",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Message shown when the backend rejects the request.
    pub fn rejected_message(self) -> &'static str {
        match self {
            Operation::Statistics => "Error al cargar estadísticas",
            Operation::Columns => "Error al cargar columnas",
            Operation::Data => "Error al cargar datos",
            Operation::Filter => "Error al filtrar datos",
            Operation::Analysis => "Error en el análisis",
            Operation::Record => "Error al cargar el registro",
        }
    }

    pub fn container(self) -> Container {
        match self {
            Operation::Statistics => Container::Estadisticas,
            Operation::Columns => Container::ColumnaOpciones,
            Operation::Data => Container::Datos,
            Operation::Filter => Container::FiltrosResultado,
            Operation::Analysis => Container::AnalisisResultado,
            Operation::Record => Container::RegistroResultado,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub operation: Operation,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn new(operation: Operation, endpoint: &str) -> Self {
        Self {
            operation,
            segments: vec![endpoint.to_string()],
            query: Vec::new(),
        }
    }

    fn segment(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    fn param(mut self, key: &'static str, value: &str) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Resolves the request against the backend base URL. A base that
    /// cannot carry a path is returned untouched; the config layer only
    /// accepts http(s) bases.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(API_PREFIX)
                .extend(self.segments.iter().map(String::as_str));
        }
        url.set_query(None);
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

pub fn statistics_request() -> ApiRequest {
    ApiRequest::new(Operation::Statistics, "estadisticas")
}

pub fn columns_request() -> ApiRequest {
    ApiRequest::new(Operation::Columns, "estadisticas")
}

/// `limite` is forwarded exactly as typed; the backend decides what it means.
pub fn data_request(limite: &str) -> ApiRequest {
    ApiRequest::new(Operation::Data, "datos").param("limite", limite)
}

/// An empty `operador` is left out so the backend applies its default.
pub fn filter_request(
    columna: &str,
    valor: &str,
    operador: &str,
) -> Result<ApiRequest, MissingInput> {
    if columna.is_empty() || valor.is_empty() {
        return Err(MissingInput);
    }
    let request = ApiRequest::new(Operation::Filter, "filtrar")
        .param("columna", columna)
        .param("valor", valor);
    if operador.is_empty() {
        return Ok(request);
    }
    Ok(request.param("operador", operador))
}

pub fn analysis_request(tipo_analisis: &str) -> ApiRequest {
    ApiRequest::new(Operation::Analysis, "analizar").param("tipo_analisis", tipo_analisis)
}

pub fn record_request(id: &str) -> Result<ApiRequest, InvalidRecordId> {
    // URL normalization drops `.`/`..` segments (encoded or not), and an
    // empty one addresses the listing endpoint.
    if matches!(id, "" | "." | "..") {
        return Err(InvalidRecordId);
    }
    Ok(ApiRequest::new(Operation::Record, "datos").segment(id))
}
