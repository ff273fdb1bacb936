use serde::Deserialize;
use serde_json::Value;

/// One row of `ps --format json`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceRow {
    pub name: String,
    pub service: String,
    pub state: String,
    pub status: String,
}

impl ServiceRow {
    pub fn is_running(&self) -> bool {
        self.state.eq_ignore_ascii_case("running")
    }

    pub fn matches(&self, service: &str) -> bool {
        self.service == service || self.name == service
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReport {
    Structured(Vec<ServiceRow>),
    /// The tool printed something that is not JSON (older Compose releases
    /// ignore `--format json`).
    Raw(String),
}

impl StatusReport {
    /// Expected services that are not in a running state.
    pub fn missing<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
        expected
            .iter()
            .copied()
            .filter(|service| !self.is_running(service))
            .collect()
    }

    pub fn all_running(&self, expected: &[&str]) -> bool {
        self.missing(expected).is_empty()
    }

    fn is_running(&self, service: &str) -> bool {
        match self {
            StatusReport::Structured(rows) => rows
                .iter()
                .any(|row| row.matches(service) && row.is_running()),
            StatusReport::Raw(text) => text.contains(service),
        }
    }
}

/// Parses `ps --format json` output. Compose emits a JSON array, a bare
/// object when there is exactly one row, or one object per line depending on
/// version.
pub fn parse_ps_output(text: &str) -> StatusReport {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return StatusReport::Structured(Vec::new());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Array(items) => StatusReport::Structured(rows_from_values(items)),
            Value::Object(_) => StatusReport::Structured(rows_from_values(vec![value])),
            Value::Null => StatusReport::Structured(Vec::new()),
            _ => StatusReport::Raw(text.to_string()),
        };
    }

    let mut rows = Vec::new();
    for line in trimmed.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match serde_json::from_str::<ServiceRow>(line) {
            Ok(row) => rows.push(row),
            Err(_) => return StatusReport::Raw(text.to_string()),
        }
    }
    StatusReport::Structured(rows)
}

fn rows_from_values(items: Vec<Value>) -> Vec<ServiceRow> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ServiceRow>(item) {
            Ok(row) => Some(row),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unparseable ps row");
                None
            }
        })
        .collect()
}
