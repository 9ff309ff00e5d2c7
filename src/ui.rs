use crate::page::{Container, Page};
use crate::render;

pub fn render_index(page: &Page, alerts: &[String]) -> String {
    let alerts: String = alerts.iter().map(|message| render::alert(message)).collect();
    fill_template(INDEX_HTML, |key| match key {
        "ALERTAS" => Some(alerts.as_str()),
        _ => Container::ALL
            .into_iter()
            .find(|container| placeholder_key(*container) == key)
            .map(|container| page.content(container)),
    })
}

fn placeholder_key(container: Container) -> &'static str {
    match container {
        Container::Estadisticas => "ESTADISTICAS",
        Container::ColumnaOpciones => "COLUMNA_OPCIONES",
        Container::Datos => "DATOS",
        Container::FiltrosResultado => "FILTROS",
        Container::AnalisisResultado => "ANALISIS",
        Container::RegistroResultado => "REGISTRO",
    }
}

// Single pass over the template, so `{{...}}` text inside backend data is
// never expanded.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}").and_then(|end| lookup(&after[..end]).map(|value| (end, value))) {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Panel de Negocio</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #2b2a28;
      --accent: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 18px 40px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    main {
      width: min(1080px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    section {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    h1, h2 {
      margin: 0 0 12px;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat-item {
      background: white;
      border-radius: 14px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .stat-item div {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    form {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
      margin-bottom: 16px;
    }

    input, select, button {
      font: inherit;
      padding: 8px 12px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.25);
    }

    button {
      background: var(--accent);
      color: white;
      border: none;
      cursor: pointer;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 6px 10px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
    }

    .alert {
      background: #fbe3df;
      color: var(--danger);
      border-radius: 12px;
      padding: 12px 16px;
      font-weight: 600;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Panel de Negocio</h1>
      <div id="alertas">{{ALERTAS}}</div>
    </header>

    <section>
      <h2>Estadísticas</h2>
      <div id="estadisticas" class="stats">{{ESTADISTICAS}}</div>
      <form method="post" action="/estadisticas">
        <button type="submit">Actualizar</button>
      </form>
    </section>

    <section>
      <h2>Datos</h2>
      <form method="post" action="/datos">
        <label for="limite">Límite</label>
        <input id="limite" name="limite" type="number" value="10" />
        <button type="submit">Cargar datos</button>
      </form>
      <div id="datos-container">{{DATOS}}</div>
    </section>

    <section>
      <h2>Filtrar</h2>
      <form method="post" action="/filtrar">
        <select id="columna" name="columna">
          <option value="">Selecciona columna</option>
          {{COLUMNA_OPCIONES}}
        </select>
        <input id="valor" name="valor" type="text" placeholder="Valor" />
        <input id="operador" name="operador" type="text" placeholder="Operador (igual)" />
        <button type="submit">Filtrar</button>
      </form>
      <div id="filtros-resultado">{{FILTROS}}</div>
    </section>

    <section>
      <h2>Análisis</h2>
      <form method="post" action="/analizar">
        <input id="tipo-analisis" name="tipo_analisis" type="text" placeholder="Tipo de análisis" />
        <button type="submit">Analizar</button>
      </form>
      <div id="analisis-resultado">{{ANALISIS}}</div>
    </section>

    <section>
      <h2>Registro</h2>
      <form method="post" action="/registro">
        <input id="registro-id" name="id" type="text" placeholder="Id" />
        <button type="submit">Buscar</button>
      </form>
      <div id="registro-resultado">{{REGISTRO}}</div>
    </section>
  </main>
</body>
</html>
"#;
