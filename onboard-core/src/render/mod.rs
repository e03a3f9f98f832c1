use std::fmt::Write;

use crate::types::Flow;

impl Flow {
    /// Graphviz rendering of the step graph.
    ///
    /// Solid edges follow list order, labelled edges are decision branches, and dashed nodes
    /// carry a visibility conditional.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph onboarding {\n");
        let _ = writeln!(out, "  label=\"flow: {}\";", escape(&self.version));
        out.push_str("  labelloc=t;\n");
        out.push_str("  rankdir=LR;\n");

        for step in &self.steps {
            match &step.conditional {
                Some(c) => {
                    let op = if c.show { "==" } else { "!=" };
                    let _ = writeln!(
                        out,
                        "  \"{}\" [style=dashed, tooltip=\"{} {op} {}\"];",
                        escape(&step.id),
                        escape(&c.field),
                        escape(&c.value)
                    );
                }
                None => {
                    let _ = writeln!(out, "  \"{}\";", escape(&step.id));
                }
            }
        }

        for pair in self.steps.windows(2) {
            if self.decision_point(&pair[0].id).is_some() {
                let _ = writeln!(
                    out,
                    "  \"{}\" -> \"{}\" [style=dotted, label=\"otherwise\"];",
                    escape(&pair[0].id),
                    escape(&pair[1].id)
                );
            } else {
                let _ = writeln!(
                    out,
                    "  \"{}\" -> \"{}\";",
                    escape(&pair[0].id),
                    escape(&pair[1].id)
                );
            }
        }

        for dp in &self.decision_points {
            for branch in &dp.branches {
                let _ = writeln!(
                    out,
                    "  \"{}\" -> \"{}\" [label=\"{}={}\"];",
                    escape(&dp.step_id),
                    escape(&branch.next_step),
                    escape(&dp.field),
                    escape(&branch.value)
                );
            }
        }

        out.push_str("}\n");
        out
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use crate::parser::{parse_flow_str, FlowFormat};

    #[test]
    fn dot_contains_sequential_and_branch_edges() {
        let flow = parse_flow_str(
            r#"
version: v2
steps:
  - { id: a, route: /a }
  - { id: b, route: /b, conditional: { field: kind, value: x, show: true } }
  - { id: c, route: /c }
decisionPoints:
  - stepId: a
    field: kind
    branches:
      - { value: y, nextStep: c }
"#,
            FlowFormat::Yaml,
        )
        .unwrap()
        .flow;

        let dot = flow.to_dot();
        assert!(dot.starts_with("digraph onboarding {"));
        assert!(dot.contains("\"a\" -> \"b\" [style=dotted, label=\"otherwise\"];"));
        assert!(dot.contains("\"b\" -> \"c\";"));
        assert!(dot.contains("\"a\" -> \"c\" [label=\"kind=y\"];"));
        assert!(dot.contains("\"b\" [style=dashed"));
    }
}
