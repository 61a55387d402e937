use std::{fmt, sync::Arc};

use indexmap::IndexMap;

use crate::{
    AsciiUnitFormat, Config, DefaultQuantityFormat, DefaultUnitFormat, EbnfUnitFormat,
    FormatError, LocalUnitFormat, NumberDelimiterQuantityFormat, QuantityFormat,
    SimpleQuantityFormat, UnitFormat,
};

/// The kinds of formats a [`FormatService`] provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// Formats that render units
    Unit,
    /// Formats that render quantities
    Quantity,
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(f, "unit"),
            Self::Quantity => write!(f, "quantity"),
        }
    }
}

/// A registry of named unit and quantity formats.
///
/// Names are matched ignoring ASCII case, so `ebnf` finds the `EBNF`
/// format. A name that is not registered is not an error; the lookup
/// returns `None`.
#[derive(Debug, Clone)]
pub struct FormatService {
    unit_formats: IndexMap<&'static str, Arc<dyn UnitFormat>>,
    quantity_formats: IndexMap<&'static str, Arc<dyn QuantityFormat>>,
    default_unit_format: Arc<dyn UnitFormat>,
    default_quantity_format: Arc<dyn QuantityFormat>,
}

impl FormatService {
    /// Registers the standard formats and selects the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::UnknownDefaultFormat` if a configured default
    /// is not one of the standard formats.
    pub fn new(config: &Config) -> Result<Self, FormatError> {
        let unit_formats: [Arc<dyn UnitFormat>; 4] = [
            Arc::new(DefaultUnitFormat),
            Arc::new(AsciiUnitFormat),
            Arc::new(EbnfUnitFormat),
            Arc::new(LocalUnitFormat::new(config.unit_labels().clone())),
        ];
        let unit_formats = Self::register(unit_formats, |format| format.name());

        let default_unit_format = Self::find(&unit_formats, config.unit_format())
            .cloned()
            .ok_or_else(|| FormatError::UnknownDefaultFormat {
                format_type: FormatType::Unit,
                name: config.unit_format().to_string(),
                available: Self::names(&unit_formats),
            })?;

        // quantity formats render units with the default unit format
        let quantity_formats: [Arc<dyn QuantityFormat>; 3] = [
            Arc::new(DefaultQuantityFormat::new(Arc::clone(&default_unit_format))),
            Arc::new(SimpleQuantityFormat),
            Arc::new(NumberDelimiterQuantityFormat::new(
                config.number_delimiter(),
                Arc::clone(&default_unit_format),
            )),
        ];
        let quantity_formats = Self::register(quantity_formats, |format| format.name());

        let default_quantity_format = Self::find(&quantity_formats, config.quantity_format())
            .cloned()
            .ok_or_else(|| FormatError::UnknownDefaultFormat {
                format_type: FormatType::Quantity,
                name: config.quantity_format().to_string(),
                available: Self::names(&quantity_formats),
            })?;

        tracing::debug!(
            unit_format = default_unit_format.name(),
            quantity_format = default_quantity_format.name(),
            "created format service"
        );

        Ok(Self {
            unit_formats,
            quantity_formats,
            default_unit_format,
            default_quantity_format,
        })
    }

    fn register<T: ?Sized>(
        formats: impl IntoIterator<Item = Arc<T>>,
        name_of: impl Fn(&T) -> &'static str,
    ) -> IndexMap<&'static str, Arc<T>> {
        formats
            .into_iter()
            .map(|format| {
                let name = name_of(&*format);
                tracing::trace!(name, "registered format");
                (name, format)
            })
            .collect()
    }

    fn find<'a, T: ?Sized>(
        formats: &'a IndexMap<&'static str, Arc<T>>,
        name: &str,
    ) -> Option<&'a Arc<T>> {
        let found = formats.get(name).or_else(|| {
            formats
                .iter()
                .find(|(registered, _)| registered.eq_ignore_ascii_case(name))
                .map(|(_, format)| format)
        });

        if found.is_none() {
            tracing::debug!(name, "format not found");
        }

        found
    }

    fn names<T: ?Sized>(formats: &IndexMap<&'static str, Arc<T>>) -> Vec<String> {
        formats.keys().map(|name| (*name).to_string()).collect()
    }

    /// The default unit format.
    #[must_use]
    pub fn unit_format(&self) -> &dyn UnitFormat {
        self.default_unit_format.as_ref()
    }

    /// The default quantity format.
    #[must_use]
    pub fn quantity_format(&self) -> &dyn QuantityFormat {
        self.default_quantity_format.as_ref()
    }

    /// The unit format registered under `name`.
    #[must_use]
    pub fn get_unit_format(&self, name: &str) -> Option<&dyn UnitFormat> {
        Self::find(&self.unit_formats, name).map(Arc::as_ref)
    }

    /// The quantity format registered under `name`.
    #[must_use]
    pub fn get_quantity_format(&self, name: &str) -> Option<&dyn QuantityFormat> {
        Self::find(&self.quantity_formats, name).map(Arc::as_ref)
    }

    /// The names of the registered formats of a type, in registration
    /// order.
    #[must_use]
    pub fn available_format_names(&self, format_type: FormatType) -> Vec<&'static str> {
        match format_type {
            FormatType::Unit => self.unit_formats.keys().copied().collect(),
            FormatType::Quantity => self.quantity_formats.keys().copied().collect(),
        }
    }
}
