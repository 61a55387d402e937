use indexmap::IndexMap;

/// Configuration for a [`FormatService`](crate::FormatService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    unit_format: String,
    quantity_format: String,
    number_delimiter: String,
    unit_labels: IndexMap<String, String>,
}

impl Config {
    /// The name of the unit format used when none is configured.
    pub const DEFAULT_UNIT_FORMAT: &'static str = "Default";
    /// The name of the quantity format used when none is configured.
    pub const DEFAULT_QUANTITY_FORMAT: &'static str = "Default";

    /// Creates a configuration with the default formats.
    #[must_use]
    pub fn new() -> Self {
        Self {
            unit_format: Self::DEFAULT_UNIT_FORMAT.to_string(),
            quantity_format: Self::DEFAULT_QUANTITY_FORMAT.to_string(),
            number_delimiter: " ".to_string(),
            unit_labels: IndexMap::new(),
        }
    }

    /// Sets the name of the default unit format.
    #[must_use]
    pub fn with_unit_format(mut self, name: impl Into<String>) -> Self {
        self.unit_format = name.into();
        self
    }

    /// Sets the name of the default quantity format.
    #[must_use]
    pub fn with_quantity_format(mut self, name: impl Into<String>) -> Self {
        self.quantity_format = name.into();
        self
    }

    /// Sets what the `NumberDelimiter` quantity format writes between the
    /// number and the unit.
    #[must_use]
    pub fn with_number_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.number_delimiter = delimiter.into();
        self
    }

    /// Sets the label the `Local` unit format uses for a symbol.
    #[must_use]
    pub fn with_unit_label(mut self, symbol: impl Into<String>, label: impl Into<String>) -> Self {
        self.unit_labels.insert(symbol.into(), label.into());
        self
    }

    /// The name of the default unit format.
    #[must_use]
    pub fn unit_format(&self) -> &str {
        &self.unit_format
    }

    /// The name of the default quantity format.
    #[must_use]
    pub fn quantity_format(&self) -> &str {
        &self.quantity_format
    }

    /// The delimiter of the `NumberDelimiter` quantity format.
    #[must_use]
    pub fn number_delimiter(&self) -> &str {
        &self.number_delimiter
    }

    /// The labels of the `Local` unit format, indexed by symbol.
    #[must_use]
    pub const fn unit_labels(&self) -> &IndexMap<String, String> {
        &self.unit_labels
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
