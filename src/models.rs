use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One record of business data. Key order is the order the backend sent.
pub type Row = Map<String, Value>;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Statistics {
    pub total_registros: u64,
    #[serde(default)]
    pub columnas: Option<Vec<String>>,
    #[serde(default)]
    pub tipos_datos: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub registros_nulos: Option<BTreeMap<String, u64>>,
}

impl Statistics {
    pub fn column_count(&self) -> usize {
        self.columnas.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Deserialize)]
pub struct StatisticsResponse {
    pub estadisticas: Statistics,
}

#[derive(Debug, Deserialize)]
pub struct DataResponse {
    pub datos: Vec<Row>,
}

#[derive(Debug, Deserialize)]
pub struct FilterResponse {
    pub datos_filtrados: Vec<Row>,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisResponse {
    pub analisis: Value,
}

#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    pub registro: Row,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitForm {
    #[serde(default)]
    pub limite: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub columna: String,
    #[serde(default)]
    pub valor: String,
    #[serde(default)]
    pub operador: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisForm {
    #[serde(default)]
    pub tipo_analisis: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordForm {
    #[serde(default)]
    pub id: String,
}
