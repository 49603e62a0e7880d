//! Render explored state spaces to graphviz `.dot` files.
//!
//! Generally, use `space.render_to(filename, RenderSettings::default())` for the most basic
//! rendering.

use crate::explore::{StateID, StateSpace};
use std::fmt::Display;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

/// Global settings related to rendering state spaces.
pub struct RenderSettings {
    /// Whether to print the expression of every state inside its node.
    ///
    /// Expressions grow quickly, so when this is off nodes only show their id.
    pub show_expressions: bool,
    /// The title which should be displayed above the graph.
    ///
    /// Defaults to the filename given to [`StateSpace::render_to`].
    pub title: Option<String>,
}

impl RenderSettings {
    /// Sets the name of the state space
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.title = Some(name.as_ref().to_string());
        self
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_expressions: true,
            title: None,
        }
    }
}

fn state_to_node_name(s: StateID) -> String {
    format!("state_{s}")
}

fn escape_text(inp: &str) -> String {
    inp.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<T: Display> StateSpace<T> {
    /// Visualize the explored states as a graph, by emitting a graphviz dot file.
    pub fn render<W: Write>(&self, output: &mut W, settings: RenderSettings) -> io::Result<()> {
        writeln!(output, "digraph {{")?;

        if let Some(ref i) = settings.title {
            writeln!(output, r#"labelloc="t";"#)?;
            writeln!(output, r#"label="{}";"#, escape_text(i))?;
        }

        // an arrow into the initial state
        writeln!(output, r#"start [shape="point"]"#)?;
        writeln!(output, "start -> {}", state_to_node_name(self.initial))?;

        for (id, state) in self.states.iter().enumerate() {
            let name = state_to_node_name(id);

            let mut attrs = Vec::new();
            if state.accepting {
                attrs.push(r#"[shape="doublecircle"]"#.to_string());
            } else {
                attrs.push(r#"[shape="circle"]"#.to_string());
            }

            let label = if settings.show_expressions {
                state.configuration.to_string()
            } else {
                id.to_string()
            };
            attrs.push(format!(r#"[label="{}"]"#, escape_text(&label)));

            if state.truncated {
                attrs.push(r#"[style="dashed"]"#.to_string());
            }

            writeln!(output, "{name} {}", attrs.join(""))?;
        }

        for transition in &self.transitions {
            let from = state_to_node_name(transition.source);
            let to = state_to_node_name(transition.target);
            let label = escape_text(&transition.token.to_string());
            writeln!(output, r#"{from} -> {to} [label="{label}"]"#)?;
        }

        writeln!(output, "}}")?;

        Ok(())
    }

    /// [`render`](StateSpace::render) directly to a file.
    pub fn render_to(
        &self,
        path: impl AsRef<Path>,
        mut settings: RenderSettings,
    ) -> io::Result<()> {
        let path = path.as_ref();
        let mut w = File::create(path)?;

        if settings.title.is_none() {
            settings.title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }

        self.render(&mut w, settings)
    }
}
