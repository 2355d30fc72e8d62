use std::path::PathBuf;

use clap::Args;
use routegen_manifest::{PlaceholderType, PluginOption, RawOptions, RouteTypeName, SchemaSelection};

/// Options file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "routegen.toml";

/// Plugin options: an optional `routegen.toml` plus command-line overrides.
#[derive(Args)]
pub struct OptionArgs {
    /// Path to routegen.toml (defaults to ./routegen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Type for categories a path does not declare (any, unknown)
    #[arg(short, long)]
    pub placeholder: Option<PlaceholderType>,

    /// Name of the route-handler alias; an empty name disables it
    #[arg(short, long)]
    pub route_type_name: Option<String>,

    /// How paths are gathered from several schemas (merge, last)
    #[arg(long)]
    pub schema_selection: Option<SchemaSelection>,
}

impl OptionArgs {
    /// The options file to read, if any.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| {
            let path = PathBuf::from(DEFAULT_CONFIG);
            path.is_file().then_some(path)
        })
    }

    /// Read the options file and apply the command-line overrides.
    ///
    /// The file is validated while it is read. Overrides are checked later by
    /// the plugin, which reports a rejected alias name as an error diagnostic.
    pub fn load(&self) -> routegen_manifest::Result<PluginOption> {
        let mut options = match self.config_path() {
            Some(path) => RawOptions::from_file(path)?,
            None => RawOptions::default(),
        };

        if let Some(placeholder) = self.placeholder {
            options.placeholder_type = Some(placeholder);
        }
        if let Some(selection) = self.schema_selection {
            options.schema_selection = Some(selection);
        }
        if let Some(name) = &self.route_type_name {
            options.route_type_name = Some(RouteTypeName::Name(name.clone()));
        }

        Ok(PluginOption::from(options))
    }
}
