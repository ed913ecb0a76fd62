pub mod commands;

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Parser;

use beagle_core::{render, RenderOptions};
use beagle_proto::prelude::{EdgeSchema, Graph, ProtoError};

use crate::table::{render_edges, render_options, TextTable};
use commands::{Commands, OutputFormat, RenderArgs};

/// Inspect the edges of a Beagle graph from the terminal
#[derive(Parser, Debug)]
#[command(name = "beagle-inspect", version, about, long_about = None)]
pub struct Cli {
    /// Graph document in node-link JSON, `-` for stdin
    #[arg(short, long, env = "BEAGLE_GRAPH", default_value = "-", global = true)]
    graph: String,

    #[command(flatten)]
    render: RenderArgs,

    /// Render option as KEY=VALUE, applied after the flags above
    ///
    /// ```bash
    /// beagle-inspect --set missing-placeholder=- --set striped=false show 3
    /// ```
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    settings: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn render_options(&self) -> Result<RenderOptions> {
        let mut options = RenderOptions::default();
        for (key, value) in self.render.to_settings() {
            options.set(key, &value)?;
        }
        for setting in &self.settings {
            options
                .apply(setting)
                .with_context(|| format!("invalid --set `{setting}`"))?;
        }
        Ok(options)
    }

    pub fn load_graph(&self) -> Result<Graph> {
        let graph = if self.graph == "-" {
            log::debug!("Reading graph from stdin");
            Graph::from_reader(std::io::stdin().lock())
        } else {
            Graph::from_path(&self.graph)
        };
        graph.with_context(|| format!("failed to load graph from `{}`", self.graph))
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let options = self.render_options()?;
        let graph = if self.command.needs_graph() {
            Some(self.load_graph()?)
        } else {
            None
        };

        match &self.command {
            Commands::Edges { label } => {
                let graph = graph.unwrap_or_default();
                let edges: Vec<_> = match label {
                    Some(label) => graph.edges_of_type(label).collect(),
                    None => graph.edges().iter().collect(),
                };
                writeln!(out, "{}", render_edges(&graph, &edges))?;
            }
            Commands::Show {
                edge_id,
                strict,
                output,
            } => {
                let edge = match (edge_id, &graph) {
                    (Some(id), Some(graph)) => Some(graph.find_edge(*id)?),
                    _ => None,
                };

                if let (Some(edge), true) = (edge, *strict) {
                    if let Err(ProtoError::Schema { label, violations }) = EdgeSchema::check(edge) {
                        let details: Vec<_> = violations.iter().map(|v| v.to_string()).collect();
                        bail!(
                            "edge {} `{label}` does not match its schema: {}",
                            edge.id,
                            details.join("; ")
                        );
                    }
                }

                let view = render(edge, &options);
                match output {
                    OutputFormat::Text => {
                        writeln!(out, "{}", view.show(&TextTable::new(&options)))?
                    }
                    OutputFormat::Json => {
                        writeln!(out, "{}", serde_json::to_string_pretty(&view.to_dto())?)?
                    }
                }
            }
            Commands::Config => {
                writeln!(out, "{}", render_options(&options.options()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const GRAPH: &str = r#"{
        "directed": true,
        "multigraph": true,
        "nodes": [
            {"id": -12, "_node_type": "Process", "_display": "cmd.exe"},
            {"id": 34, "_node_type": "File", "_display": "evil.exe"}
        ],
        "links": [
            {"id": 3, "source": -12, "target": 34, "type": "Wrote",
             "properties": {"data": [
                {"contents": "MZ", "timestamp": 0},
                {"timestamp": 1, "extra": "x"}
             ]}}
        ]
    }"#;

    fn graph_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(GRAPH.as_bytes()).unwrap();
        file
    }

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        cli.run(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_show_with_settings() {
        let cli = Cli::try_parse_from([
            "beagle-inspect",
            "--set",
            "striped=false",
            "show",
            "3",
            "--legacy",
        ])
        .unwrap();

        let options = cli.render_options().unwrap();
        assert_eq!(options, RenderOptions {
            striped: false,
            ..RenderOptions::legacy()
        });
        assert!(matches!(
            cli.command,
            Commands::Show {
                edge_id: Some(3),
                strict: false,
                output: OutputFormat::Text
            }
        ));
    }

    #[test]
    fn test_bad_setting_is_an_error() {
        let cli = Cli::try_parse_from(["beagle-inspect", "--set", "colour=red", "config"]).unwrap();
        assert!(cli.render_options().is_err());

        let cli = Cli::try_parse_from(["beagle-inspect", "--format", "fancy", "config"]).unwrap();
        assert!(cli.render_options().is_err());
    }

    #[test]
    fn test_show_without_id_prints_placeholder() {
        let out = run(&["beagle-inspect", "show"]).unwrap();
        assert!(out.contains("Click an Edge to view information"));
    }

    #[test]
    fn test_show_json() {
        let file = graph_file();
        let path = file.path().to_str().unwrap();
        let out = run(&["beagle-inspect", "-g", path, "show", "3", "-o", "json"]).unwrap();

        let dto: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(dto["type"], "Table");
        assert_eq!(
            dto["value"]["headers"],
            serde_json::json!(["Occurence", "Contents", "Timestamp", "Extra"])
        );
        assert_eq!(
            dto["value"]["rows"][1],
            serde_json::json!(["2", "", "1970-01-01T00:00:01.000Z", "x"])
        );
    }

    #[test]
    fn test_show_text_contains_cells() {
        let file = graph_file();
        let path = file.path().to_str().unwrap();
        let out = run(&["beagle-inspect", "--graph", path, "show", "3"]).unwrap();
        assert!(out.starts_with("Wrote"));
        assert!(out.contains("Occurence"));
        assert!(out.contains("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_strict_rejects_unknown_fields() {
        let file = graph_file();
        let path = file.path().to_str().unwrap();
        let err = run(&["beagle-inspect", "-g", path, "show", "3", "--strict"]).unwrap_err();
        assert!(err.to_string().contains("occurrence 2: unknown field `extra`"));
    }

    #[test]
    fn test_missing_edge_is_an_error() {
        let file = graph_file();
        let path = file.path().to_str().unwrap();
        assert!(run(&["beagle-inspect", "-g", path, "show", "99"]).is_err());
    }

    #[test]
    fn test_edges_filtered_by_type() {
        let file = graph_file();
        let path = file.path().to_str().unwrap();

        let out = run(&["beagle-inspect", "-g", path, "edges"]).unwrap();
        assert!(out.contains("Wrote"));

        let out = run(&["beagle-inspect", "-g", path, "ls", "--type", "Launched"]).unwrap();
        assert!(!out.contains("Wrote"));
    }

    #[test]
    fn test_config_lists_current_values() {
        let out = run(&["beagle-inspect", "--layout", "record", "config"]).unwrap();
        assert!(out.contains("layout"));
        assert!(out.contains("record"));
        assert!(out.contains("time_format"));
    }
}
