use clap::{Args, Subcommand, ValueEnum};

#[derive(Args, Default, Debug)]
pub struct RenderArgs {
    /// Cell text format
    ///
    /// Supported values:
    ///   - **typed**: One rule per value type (default)
    ///   - **legacy**: JSON-stringify each value and drop its first and last
    ///     character, as the first browser panel did
    #[arg(long, env = "BEAGLE_FORMAT", global = true)]
    format: Option<String>,

    /// How body cells line up with the headers
    ///
    /// Supported values:
    ///   - **aligned**: One cell per column, gaps filled (default)
    ///   - **record**: Each occurrence in its own key order
    #[arg(long, env = "BEAGLE_LAYOUT", global = true)]
    layout: Option<String>,

    /// strftime format for timestamps in typed cells
    ///
    /// ```bash
    /// beagle-inspect show 3 --time-format "%Y-%m-%d %H:%M:%S"
    /// ```
    #[arg(long, env = "BEAGLE_TIME_FORMAT", global = true)]
    time_format: Option<String>,

    /// Text for null values in typed cells
    #[arg(long, global = true)]
    null_placeholder: Option<String>,

    /// Text for fields an occurrence does not have
    #[arg(long, global = true)]
    missing_placeholder: Option<String>,

    /// Shorthand for `--format legacy --layout record`
    #[arg(long, global = true)]
    legacy: bool,
}

impl RenderArgs {
    /// Render option settings in the order they should be applied.
    pub fn to_settings(&self) -> Vec<(&'static str, String)> {
        let mut settings = Vec::new();
        macro_rules! set_if_some {
            ($field:expr, $key:expr) => {
                if let Some(value) = &$field {
                    settings.push(($key, value.to_string()));
                }
            };
        }

        if self.legacy {
            settings.push(("format", "legacy".to_string()));
            settings.push(("layout", "record".to_string()));
        }

        set_if_some!(self.format, "format");
        set_if_some!(self.layout, "layout");
        set_if_some!(self.time_format, "time_format");
        set_if_some!(self.null_placeholder, "null_placeholder");
        set_if_some!(self.missing_placeholder, "missing_placeholder");

        settings
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the edges of the graph
    #[command(visible_aliases = ["ls", "l"])]
    Edges {
        /// Only edges of this type, e.g. "Wrote"
        #[arg(short = 't', long = "type")]
        label: Option<String>,
    },

    /// Show the property table of an edge
    ///
    /// Without an edge id the panel prompt is shown instead.
    #[command(visible_aliases = ["s"])]
    Show {
        edge_id: Option<u64>,

        /// Fail when occurrences carry fields their edge type does not declare
        #[arg(long)]
        strict: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Display the render options and their current values
    #[command(visible_aliases = ["cfg", "c"])]
    Config,
}

impl Commands {
    /// Whether this command reads the graph document.
    pub fn needs_graph(&self) -> bool {
        match self {
            Commands::Edges { .. } => true,
            Commands::Show { edge_id, .. } => edge_id.is_some(),
            Commands::Config => false,
        }
    }
}
