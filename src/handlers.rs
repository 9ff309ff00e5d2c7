use crate::models::{AnalysisForm, FilterForm, LimitForm, RecordForm};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut page = state.controller.page().lock().await;
    let alerts = page.take_alerts();
    Html(render_index(&page, &alerts))
}

pub async fn refresh(State(state): State<AppState>) -> Redirect {
    state.controller.initialize().await;
    Redirect::to("/")
}

pub async fn load_data(State(state): State<AppState>, Form(form): Form<LimitForm>) -> Redirect {
    state.controller.load_data(&form.limite).await;
    Redirect::to("/")
}

pub async fn filter_data(State(state): State<AppState>, Form(form): Form<FilterForm>) -> Redirect {
    state
        .controller
        .filter_data(&form.columna, &form.valor, &form.operador)
        .await;
    Redirect::to("/")
}

pub async fn analyze_data(
    State(state): State<AppState>,
    Form(form): Form<AnalysisForm>,
) -> Redirect {
    state.controller.analyze_data(&form.tipo_analisis).await;
    Redirect::to("/")
}

pub async fn load_record(State(state): State<AppState>, Form(form): Form<RecordForm>) -> Redirect {
    state.controller.load_record(&form.id).await;
    Redirect::to("/")
}
