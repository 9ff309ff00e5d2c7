use std::collections::BTreeMap;

/// Named regions of the page. Each one is owned by a single operation and
/// every render replaces its whole content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Container {
    Estadisticas,
    ColumnaOpciones,
    Datos,
    FiltrosResultado,
    AnalisisResultado,
    RegistroResultado,
}

impl Container {
    pub const ALL: [Container; 6] = [
        Container::Estadisticas,
        Container::ColumnaOpciones,
        Container::Datos,
        Container::FiltrosResultado,
        Container::AnalisisResultado,
        Container::RegistroResultado,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Container::Estadisticas => "estadisticas",
            Container::ColumnaOpciones => "columna-opciones",
            Container::Datos => "datos-container",
            Container::FiltrosResultado => "filtros-resultado",
            Container::AnalisisResultado => "analisis-resultado",
            Container::RegistroResultado => "registro-resultado",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Container::Estadisticas => "<p>Cargando estadísticas...</p>",
            _ => "",
        }
    }
}

#[derive(Debug, Default)]
pub struct Page {
    containers: BTreeMap<Container, String>,
    alerts: Vec<String>,
}

impl Page {
    pub fn set(&mut self, container: Container, markup: String) {
        self.containers.insert(container, markup);
    }

    pub fn content(&self, container: Container) -> &str {
        self.containers
            .get(&container)
            .map(String::as_str)
            .unwrap_or_else(|| container.placeholder())
    }

    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    /// Alerts are shown once; taking them clears the page's error state.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}
