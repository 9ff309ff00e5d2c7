#![allow(dead_code)]

//! In-process stand-in for the statistics backend. Every request URI
//! (path plus raw query) is recorded so tests can assert on what was sent.

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

impl RequestLog {
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.entries()
            .iter()
            .filter(|entry| entry.starts_with(prefix))
            .count()
    }

    fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub log: RequestLog,
}

impl MockBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self) -> Url {
        Url::parse(&self.base_url()).unwrap()
    }
}

pub async fn spawn_backend() -> MockBackend {
    serve(backend_router).await
}

/// A backend whose every endpoint answers 500 with a JSON error body.
pub async fn spawn_failing_backend() -> MockBackend {
    serve(failing_router).await
}

async fn serve(router: fn(RequestLog) -> Router) -> MockBackend {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind backend port");
    let addr = listener.local_addr().unwrap();
    let log = RequestLog::default();
    let app = router(log.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("backend server");
    });
    MockBackend { addr, log }
}

/// Runs the backend on a dedicated runtime thread so it outlives the
/// per-test runtimes of `#[tokio::test]`.
pub fn spawn_backend_thread() -> MockBackend {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("backend runtime");
        runtime.block_on(async move {
            tx.send(spawn_backend().await).expect("report backend");
            std::future::pending::<()>().await;
        });
    });
    rx.recv().expect("backend did not start")
}

fn backend_router(log: RequestLog) -> Router {
    Router::new()
        .route("/excel/negocio/estadisticas", get(estadisticas))
        .route("/excel/negocio/datos", get(datos))
        .route("/excel/negocio/datos/:id", get(registro))
        .route("/excel/negocio/filtrar", get(filtrar))
        .route("/excel/negocio/analizar", get(analizar))
        .layer(middleware::from_fn_with_state(log, record))
}

fn failing_router(log: RequestLog) -> Router {
    Router::new()
        .fallback(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "No se pudo leer el archivo"})),
            )
        })
        .layer(middleware::from_fn_with_state(log, record))
}

async fn record(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    log.push(request.uri().to_string());
    next.run(request).await
}

async fn estadisticas() -> Json<Value> {
    Json(json!({
        "estadisticas": {
            "total_registros": 100,
            "columnas": ["id", "nombre", "ventas"],
            "tipos_datos": {"id": "int64", "nombre": "object", "ventas": "int64"},
            "registros_nulos": {"id": 0, "nombre": 0, "ventas": 4}
        }
    }))
}

async fn datos(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("limite").map(String::as_str) {
        Some("0") => Json(json!({"datos": [], "total": 0})).into_response(),
        Some("falla") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "invalid literal for int()"})),
        )
            .into_response(),
        Some("html") => (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response(),
        _ => Json(json!({"datos": [{"a": 1, "b": 2}, {"a": 3, "b": 4}], "total": 2}))
            .into_response(),
    }
}

async fn filtrar(Query(params): Query<HashMap<String, String>>) -> Response {
    let columna = params.get("columna").cloned().unwrap_or_default();
    let valor = params.get("valor").cloned().unwrap_or_default();
    if columna == "no_existe" {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "'no_existe'"}))).into_response();
    }
    Json(json!({"datos_filtrados": [{"columna": columna, "valor": valor}]})).into_response()
}

async fn analizar(Query(params): Query<HashMap<String, String>>) -> Response {
    let tipo = params.get("tipo_analisis").cloned().unwrap_or_default();
    match tipo.as_str() {
        "lento" => {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Json(json!({"analisis": "Análisis lento completado"})).into_response()
        }
        "tabla" => Json(json!({"analisis": [{"zona": "centro", "negocios": 12}]})).into_response(),
        "roto" => (StatusCode::OK, "no es json").into_response(),
        "falla" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Tipo de análisis no soportado"})),
        )
            .into_response(),
        _ => Json(json!({"analisis": format!("Análisis {tipo} completado")})).into_response(),
    }
}

async fn registro(Path(id): Path<String>) -> Response {
    match id.parse::<u64>() {
        Ok(id) if id < 100 => Json(json!({
            "registro": {"id": id, "nombre": format!("Negocio {id}"), "ventas": 100 + id}
        }))
        .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Registro no encontrado"})),
        )
            .into_response(),
    }
}
