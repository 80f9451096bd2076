use serde::Serialize;

/// Content of one grid cell.
///
/// A formula is kept as opaque text; the displayed value is the raw entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Cell {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Cell {
    /// Interpret user input: text starting with `=` is also recorded as a formula.
    pub fn from_input(text: &str) -> Self {
        Self {
            value: text.to_string(),
            formula: text.starts_with('=').then(|| text.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Numeric interpretation used by statistics: trimmed text parsing to a finite number.
    pub fn numeric_value(&self) -> Option<f64> {
        parse_numeric(&self.value)
    }
}

/// Parse a cell value as a finite number, if it is one.
pub fn parse_numeric(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
