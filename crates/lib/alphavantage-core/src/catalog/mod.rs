//! Built-in tool catalog and the registry that indexes it.

use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt;
use std::iter::Copied;
use std::slice;

use alphavantage_schema::models::{
    Applicability,
    EndpointSchema,
    Family,
    MovingAverageType,
    ParamDefault,
    ParamKind,
    ParamSpec,
};

use crate::error::GatewayError;

/// Builds an [`EndpointSchema`] literal so nested parameter slices are promoted to `'static`.
macro_rules! endpoint {
    (
        name: $name:expr,
        family: $family:expr,
        function: $function:expr,
        shape: $shape:expr,
        description: $description:expr,
        parameters: [$($param:expr),* $(,)?] $(,)?
    ) => {
        alphavantage_schema::models::EndpointSchema {
            name: $name,
            family: $family,
            function: $function,
            shape: $shape,
            description: $description,
            parameters: &[$($param),*],
        }
    };
    (
        name: $name:expr,
        family: $family:expr,
        function: $function:expr,
        shape: $shape:expr,
        description: $description:expr,
        parameters: $params:expr $(,)?
    ) => {
        alphavantage_schema::models::EndpointSchema {
            name: $name,
            family: $family,
            function: $function,
            shape: $shape,
            description: $description,
            parameters: $params,
        }
    };
}

mod commodities;
mod crypto;
mod forex;
mod fundamentals;
mod indicators;
mod intelligence;
mod macro_indicators;
mod options;
mod params;
mod time_series;

/// Every built-in endpoint table, in the order tools are listed.
static TABLES: [&[EndpointSchema]; 9] = [
    time_series::ENDPOINTS,
    fundamentals::ENDPOINTS,
    indicators::ENDPOINTS,
    commodities::ENDPOINTS,
    forex::ENDPOINTS,
    crypto::ENDPOINTS,
    macro_indicators::ENDPOINTS,
    intelligence::ENDPOINTS,
    options::ENDPOINTS,
];

/// Iterates the built-in catalog without indexing it.
pub fn builtin_endpoints() -> impl Iterator<Item = &'static EndpointSchema> {
    TABLES.iter().copied().flatten()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateTool(String),
    InvalidDefault {
        tool: String,
        parameter: String,
        reason: String,
    },
    DanglingCondition {
        tool: String,
        parameter: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTool(name) => write!(f, "duplicate tool name: {name}"),
            Self::InvalidDefault {
                tool,
                parameter,
                reason,
            } => write!(f, "{tool}: invalid default for '{parameter}': {reason}"),
            Self::DanglingCondition { tool, parameter } => write!(
                f,
                "{tool}: '{parameter}' depends on 'interval' which is not declared before it"
            ),
        }
    }
}

impl Error for RegistryError {}

/// Immutable, name-indexed view over a set of endpoint schemas.
///
/// Built once at startup and shared read-only between invocations.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    endpoints: Vec<&'static EndpointSchema>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Indexes the built-in catalog.
    ///
    /// # Errors
    /// Returns a [`RegistryError`] if the catalog violates a schema invariant.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin_endpoints())
    }

    /// Validates and indexes an arbitrary endpoint table.
    ///
    /// # Errors
    /// Returns a [`RegistryError`] for duplicate names, defaults outside the
    /// declared kind, or conditions on an undeclared `interval`.
    pub fn new(
        endpoints: impl IntoIterator<Item = &'static EndpointSchema>,
    ) -> Result<Self, RegistryError> {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();
        for endpoint in endpoints {
            validate_endpoint(endpoint)?;
            if index.insert(endpoint.name, ordered.len()).is_some() {
                return Err(RegistryError::DuplicateTool(endpoint.name.to_string()));
            }
            ordered.push(endpoint);
        }
        Ok(Self {
            endpoints: ordered,
            index,
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static EndpointSchema> {
        self.index.get(name).map(|position| self.endpoints[*position])
    }

    /// Resolves a tool name, failing with [`GatewayError::UnknownTool`].
    ///
    /// # Errors
    /// Returns `UnknownTool` when no schema carries `name`.
    pub fn lookup(&self, name: &str) -> Result<&'static EndpointSchema, GatewayError> {
        self.get(name)
            .ok_or_else(|| GatewayError::UnknownTool(name.to_string()))
    }

    /// Endpoints in catalog order.
    pub fn iter(&self) -> Copied<slice::Iter<'_, &'static EndpointSchema>> {
        self.endpoints.iter().copied()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Tool names grouped by upstream family, each group in catalog order.
    #[must_use]
    pub fn families(&self) -> BTreeMap<Family, Vec<&'static str>> {
        let mut grouped: BTreeMap<Family, Vec<&'static str>> = BTreeMap::new();
        for endpoint in &self.endpoints {
            grouped.entry(endpoint.family).or_default().push(endpoint.name);
        }
        grouped
    }
}

impl<'a> IntoIterator for &'a ToolRegistry {
    type Item = &'static EndpointSchema;
    type IntoIter = Copied<slice::Iter<'a, &'static EndpointSchema>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_endpoint(endpoint: &EndpointSchema) -> Result<(), RegistryError> {
    let interval_position = endpoint
        .parameters
        .iter()
        .position(|spec| spec.name == "interval");
    for (position, spec) in endpoint.parameters.iter().enumerate() {
        // Conditions are evaluated in declaration order, so `interval` must come first.
        let resolvable = interval_position.is_some_and(|interval| interval < position);
        if spec.applicability != Applicability::Always && !resolvable {
            return Err(RegistryError::DanglingCondition {
                tool: endpoint.name.to_string(),
                parameter: spec.name.to_string(),
            });
        }
        check_default(spec).map_err(|reason| RegistryError::InvalidDefault {
            tool: endpoint.name.to_string(),
            parameter: spec.name.to_string(),
            reason,
        })?;
    }
    Ok(())
}

fn check_default(spec: &ParamSpec) -> Result<(), String> {
    if spec.required && spec.default != ParamDefault::Unset {
        return Err("required parameters cannot carry a default".to_string());
    }
    match (spec.kind, spec.default) {
        (_, ParamDefault::Unset) | (ParamKind::Text, ParamDefault::Text(_)) => Ok(()),
        (ParamKind::Choice(allowed), ParamDefault::Text(value)) => {
            if allowed.contains(&value) {
                Ok(())
            } else {
                Err(format!("'{value}' is not one of {}", allowed.join("|")))
            }
        }
        (ParamKind::MovingAverage, ParamDefault::Integer(code)) => {
            MovingAverageType::from_code(code)
                .map(|_| ())
                .ok_or_else(|| format!("{code} is not a moving-average code"))
        }
        (ParamKind::Integer { min, max }, ParamDefault::Integer(value)) => {
            if (min..=max).contains(&value) {
                Ok(())
            } else {
                Err(format!("{value} is outside {min}..={max}"))
            }
        }
        (ParamKind::Float { positive }, ParamDefault::Float(value)) => {
            if value.is_finite() && (!positive || value > 0.0) {
                Ok(())
            } else {
                Err(format!("{value} is not a valid float"))
            }
        }
        (kind, default) => Err(format!("{default:?} does not fit {kind:?}")),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use alphavantage_schema::models::ResponseShape;

    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let registry = ToolRegistry::builtin().unwrap();
        assert!(registry.len() > 100);
        assert!(!registry.is_empty());
    }

    #[test]
    fn names_are_unique_and_prefixed() {
        let mut seen = HashSet::new();
        for endpoint in builtin_endpoints() {
            assert!(endpoint.name.starts_with("get_"), "{}", endpoint.name);
            assert!(seen.insert(endpoint.name), "duplicate {}", endpoint.name);
        }
    }

    #[test]
    fn lookup_resolves_and_rejects() {
        let registry = ToolRegistry::builtin().unwrap();
        let intraday = registry.lookup("get_intraday").unwrap();
        assert_eq!(intraday.function, "TIME_SERIES_INTRADAY");
        assert_eq!(intraday.family, Family::TimeSeries);

        let err = registry.lookup("get_nothing").unwrap_err();
        assert_eq!(err, GatewayError::UnknownTool("get_nothing".to_string()));
    }

    #[test]
    fn every_family_is_populated() {
        let registry = ToolRegistry::builtin().unwrap();
        let families = registry.families();
        for family in Family::ALL {
            assert!(
                families.get(&family).is_some_and(|names| !names.is_empty()),
                "{family} has no tools"
            );
        }
        assert_eq!(
            families[&Family::News],
            vec!["get_news_sentiment", "get_top_gainers", "get_top_losers", "get_most_active"]
        );
    }

    #[test]
    fn indicator_catalog_matches_provider_functions() {
        let registry = ToolRegistry::builtin().unwrap();
        let indicators: Vec<_> = registry
            .iter()
            .filter(|endpoint| endpoint.family == Family::TechnicalIndicator)
            .collect();
        assert_eq!(indicators.len(), 53);
        for endpoint in indicators {
            assert_eq!(endpoint.shape, ResponseShape::Series);
            assert_eq!(
                endpoint.name.trim_start_matches("get_").to_ascii_uppercase(),
                endpoint.function
            );
            assert!(endpoint.parameter("symbol").is_some_and(|spec| spec.required));
        }
    }

    #[test]
    fn month_is_conditioned_on_interval_wherever_declared() {
        for endpoint in builtin_endpoints() {
            if let Some(month) = endpoint.parameter("month") {
                assert_eq!(month.applicability, Applicability::IntradayInterval);
                assert!(endpoint.parameter("interval").is_some(), "{}", endpoint.name);
            }
        }
    }

    #[test]
    fn rejects_duplicate_names() {
        static TABLE: &[EndpointSchema] = &[
            endpoint! {
                name: "get_twice",
                family: Family::Macro,
                function: "INFLATION",
                shape: ResponseShape::Document,
                description: "first",
                parameters: [],
            },
            endpoint! {
                name: "get_twice",
                family: Family::Macro,
                function: "INFLATION",
                shape: ResponseShape::Document,
                description: "second",
                parameters: [],
            },
        ];
        let err = ToolRegistry::new(TABLE).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTool("get_twice".to_string()));
    }

    #[test]
    fn rejects_default_outside_allowed_set() {
        static TABLE: &[EndpointSchema] = &[endpoint! {
            name: "get_bad_default",
            family: Family::Commodity,
            function: "WTI",
            shape: ResponseShape::Keyed("data"),
            description: "bad",
            parameters: [params::interval(&["daily", "weekly"], "hourly")],
        }];
        let err = ToolRegistry::new(TABLE).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDefault { ref parameter, .. } if parameter == "interval"));
    }

    #[test]
    fn rejects_required_parameter_with_default() {
        static TABLE: &[EndpointSchema] = &[endpoint! {
            name: "get_bad_required",
            family: Family::TimeSeries,
            function: "TIME_SERIES_DAILY",
            shape: ResponseShape::Series,
            description: "bad",
            parameters: [params::SYMBOL.with_default(ParamDefault::Text("IBM"))],
        }];
        assert!(matches!(
            ToolRegistry::new(TABLE),
            Err(RegistryError::InvalidDefault { .. })
        ));
    }

    #[test]
    fn rejects_condition_without_interval() {
        static TABLE: &[EndpointSchema] = &[endpoint! {
            name: "get_dangling",
            family: Family::TimeSeries,
            function: "TIME_SERIES_DAILY",
            shape: ResponseShape::Series,
            description: "bad",
            parameters: [params::SYMBOL, params::MONTH],
        }];
        assert_eq!(
            ToolRegistry::new(TABLE).unwrap_err(),
            RegistryError::DanglingCondition {
                tool: "get_dangling".to_string(),
                parameter: "month".to_string(),
            }
        );
    }
}
