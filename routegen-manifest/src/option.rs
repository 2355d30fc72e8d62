//! Plugin options and their resolution into a [`Config`].

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Result, SourceContext, error::Error};

/// Default name for the route-handler alias when `routeTypeName` is `true`.
pub const DEFAULT_ROUTE_TYPE_NAME: &str = "Route";

/// Name of the descriptor interface appended to every path declaration.
pub const DESCRIPTOR_NAME: &str = "Config";

/// The framework's generic request-handler type the alias instantiates.
pub const REQUEST_HANDLER: &str = "RequestHandler";

/// Fallback type for categories a path does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderType {
    Any,
    #[default]
    Unknown,
}

impl PlaceholderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceholderType::Any => "any",
            PlaceholderType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlaceholderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlaceholderType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "any" => Ok(PlaceholderType::Any),
            "unknown" => Ok(PlaceholderType::Unknown),
            _ => Err(format!(
                "unknown placeholder type '{}', expected 'any' or 'unknown'",
                s
            )),
        }
    }
}

/// How paths are gathered when the host yields several schemas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaSelection {
    /// Accumulate paths from every schema; later schemas win on identical templates.
    #[default]
    Merge,
    /// Keep only the paths of the last schema that had any.
    Last,
}

impl SchemaSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaSelection::Merge => "merge",
            SchemaSelection::Last => "last",
        }
    }
}

impl fmt::Display for SchemaSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemaSelection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "merge" => Ok(SchemaSelection::Merge),
            "last" => Ok(SchemaSelection::Last),
            _ => Err(format!(
                "unknown schema selection '{}', expected 'merge' or 'last'",
                s
            )),
        }
    }
}

/// `routeTypeName`: an alias name, or a boolean toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteTypeName {
    Toggle(bool),
    Name(String),
}

impl RouteTypeName {
    /// The alias name, or `None` when alias synthesis is off or the name is
    /// rejected by [`RouteTypeName::validate`].
    pub fn resolve(&self) -> Option<String> {
        match self {
            RouteTypeName::Toggle(false) => None,
            RouteTypeName::Toggle(true) => Some(DEFAULT_ROUTE_TYPE_NAME.to_string()),
            RouteTypeName::Name(name) if name.is_empty() => None,
            RouteTypeName::Name(name) => self.validate().ok().map(|()| name.clone()),
        }
    }

    /// Check that a non-empty name can be printed as the alias without
    /// clashing with the declarations it sits next to.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let RouteTypeName::Name(name) = self else {
            return Ok(());
        };
        if name.is_empty() {
            Ok(())
        } else if !is_type_name(name) {
            Err(format!("'{}' is not a valid type name", name))
        } else if name == DESCRIPTOR_NAME || name == REQUEST_HANDLER {
            Err(format!("'{}' is already used by the generated declarations", name))
        } else {
            Ok(())
        }
    }
}

/// Option object, as written in host configuration or `routegen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawOptions {
    /// `false` turns the plugin off (TOML has no bare `false` document).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_type: Option<PlaceholderType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_type_name: Option<RouteTypeName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_selection: Option<SchemaSelection>,
}

impl RawOptions {
    /// Load options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&src, &path.display().to_string())
    }

    /// Parse options from TOML source, validating them.
    pub fn from_str_with_filename(src: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(src, filename);
        let options: RawOptions = toml::from_str(src).map_err(|e| ctx.toml_error(e))?;
        options.validate(&ctx)?;
        Ok(options)
    }

    /// Reject alias names that cannot be printed as a type name.
    pub fn validate(&self, ctx: &SourceContext) -> Result<()> {
        match self.route_type_name.as_ref().map(RouteTypeName::validate) {
            Some(Err(message)) => Err(ctx.invalid_option("routeTypeName", message)),
            _ => Ok(()),
        }
    }
}

fn is_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// The host's `option` value: a boolean toggle or an option object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginOption {
    Toggle(bool),
    Options(RawOptions),
}

impl PluginOption {
    /// Check the option object the same way `routegen.toml` is checked.
    ///
    /// [`PluginOption::resolve`] never fails; a rejected `routeTypeName`
    /// only turns the alias off there.
    pub fn validate(&self) -> std::result::Result<(), String> {
        match self {
            PluginOption::Options(RawOptions {
                route_type_name: Some(name),
                ..
            }) => name.validate(),
            _ => Ok(()),
        }
    }

    /// Resolve to a [`Config`], or `None` when the plugin is disabled.
    pub fn resolve(&self) -> Option<Config> {
        match self {
            PluginOption::Toggle(false) => None,
            PluginOption::Toggle(true) => Some(Config::default()),
            PluginOption::Options(options) if options.enabled == Some(false) => None,
            PluginOption::Options(options) => {
                let defaults = Config::default();
                Some(Config {
                    placeholder: options.placeholder_type.unwrap_or(defaults.placeholder),
                    route_type_name: options
                        .route_type_name
                        .as_ref()
                        .map_or(defaults.route_type_name, RouteTypeName::resolve),
                    schema_selection: options
                        .schema_selection
                        .unwrap_or(defaults.schema_selection),
                })
            }
        }
    }
}

impl From<RawOptions> for PluginOption {
    fn from(value: RawOptions) -> Self {
        PluginOption::Options(value)
    }
}

/// Resolved plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub placeholder: PlaceholderType,
    /// Name of the route-handler alias; `None` disables the alias and the import.
    pub route_type_name: Option<String>,
    pub schema_selection: SchemaSelection,
}

impl Config {
    /// Resolve an optional host option; absent means disabled.
    pub fn from_option(option: Option<&PluginOption>) -> Option<Self> {
        option.and_then(PluginOption::resolve)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: PlaceholderType::Unknown,
            route_type_name: None,
            schema_selection: SchemaSelection::Merge,
        }
    }
}
