//! Table template - aligned columns for reading in a terminal

use serde::Serialize;
use tinytemplate::TinyTemplate;

use super::Template;
use crate::language::{ProfilerSample, RenderingError};

static TEMPLATE: &'static str = r#"     %      total       self      calls  name
{{ for row in rows }}{row.percent} {row.total} {row.own} {row.calls}  {row.name}
{{ endfor }}"#;

#[derive(Serialize)]
struct Row<'a> {
    percent: String,
    total: String,
    own: String,
    calls: String,
    name: &'a str,
}

#[derive(Serialize)]
struct Context<'a> {
    rows: Vec<Row<'a>>,
}

/// Template rendering samples as a fixed-width table
pub struct Table;

impl Template for Table {
    fn render(&self, samples: &[&ProfilerSample]) -> Result<String, RenderingError> {
        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template("table", TEMPLATE)
            .map_err(|error| RenderingError(error.to_string()))?;

        let context = Context {
            rows: samples
                .iter()
                .map(|sample| Row {
                    percent: format!("{:6.2}", sample.percent),
                    total: format!("{:10.2}", sample.total_seconds),
                    own: format!("{:10.2}", sample.self_seconds),
                    calls: format!("{:10}", sample.calls),
                    name: &sample.name,
                })
                .collect(),
        };

        tt.render("table", &context)
            .map_err(|error| RenderingError(error.to_string()))
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn rendering_rows() {
        let sample = ProfilerSample {
            percent: 12.5,
            total_seconds: 1.2,
            self_seconds: 0.8,
            calls: 100.0,
            name: "SharedVector<Event>::push_back(Event const&)".to_string(),
        };

        let output = Table
            .render(&[&sample])
            .unwrap();
        let lines: Vec<&str> = output
            .lines()
            .collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("name"));
        assert_eq!(
            lines[1],
            " 12.50       1.20       0.80        100  SharedVector<Event>::push_back(Event const&)"
        );
    }

    #[test]
    fn rendering_nothing() {
        let output = Table
            .render(&[])
            .unwrap();
        assert_eq!(
            output
                .lines()
                .count(),
            1
        );
    }
}
