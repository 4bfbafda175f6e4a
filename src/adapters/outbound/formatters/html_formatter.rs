use crate::application::read_models::{GraphOutcome, GraphView};
use crate::ports::outbound::GraphFormatter;
use crate::shared::html::{escape_html, escape_script_json};
use crate::shared::Result;
use serde_json::json;

/// Default location of the vis-network standalone bundle
pub const DEFAULT_VIS_NETWORK_SRC: &str =
    "https://unpkg.com/vis-network/standalone/umd/vis-network.min.js";

/// HtmlFormatter adapter producing a standalone graph page
///
/// The page has two mount points, `summary` and `graph`. Graph data is
/// embedded as a JSON literal inside a `<script>` element.
pub struct HtmlFormatter {
    vis_network_src: String,
}

impl HtmlFormatter {
    pub fn new(vis_network_src: impl Into<String>) -> Self {
        Self {
            vis_network_src: vis_network_src.into(),
        }
    }

    fn graph_page(&self, view: &GraphView) -> Result<String> {
        let data = json!({
            "nodes": view.nodes,
            "edges": view.edges,
        });
        let data_json = escape_script_json(&serde_json::to_string(&data)?);
        let options_json = escape_script_json(&serde_json::to_string(&view.options)?);

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <title>Graph for {title}</title>
  <script src="{vis_src}"></script>
  <style>
    html,body{{height:100%;margin:0;background:#0f1421;color:#ddd;font-family:arial,sans-serif}}
    #summary{{position:absolute;top:0;left:0;z-index:1;max-width:480px;padding:16px 24px;background:#0f1421e6}}
    #summary a{{color:#8cf}}
    #summary .meta{{color:#999;font-size:13px}}
    #graph{{width:100%;height:100%}}
    .version{{font-family:monospace}}
  </style>
</head>
<body>
  <div id="summary">{summary}</div>
  <div id="graph"></div>
  <script>
    const data = {data};
    const options = {options};
    const network = new vis.Network(
      document.getElementById("graph"),
      {{ nodes: new vis.DataSet(data.nodes), edges: new vis.DataSet(data.edges) }},
      options
    );
    network.on("doubleClick", function (properties) {{
      if (properties.nodes && properties.nodes.length) {{
        console.log(properties.nodes[0]);
      }}
    }});
  </script>
</body>
</html>
"#,
            title = escape_html(&view.summary.query),
            vis_src = escape_html(&self.vis_network_src),
            summary = view.summary.to_html(),
            data = data_json,
            options = options_json,
        ))
    }

    fn redirect_page(location: &str) -> Result<String> {
        let target = escape_script_json(&serde_json::to_string(location)?);
        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta http-equiv="refresh" content="0; url={href}">
  <title>Redirecting</title>
</head>
<body>
  <p>No report found. <a href="{href}">Search again</a>.</p>
  <script>window.location.href = {target};</script>
</body>
</html>
"#,
            href = escape_html(location),
            target = target,
        ))
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_VIS_NETWORK_SRC)
    }
}

impl GraphFormatter for HtmlFormatter {
    fn format(&self, outcome: &GraphOutcome) -> Result<String> {
        match outcome {
            GraphOutcome::Rendered(view) => self.graph_page(view),
            GraphOutcome::Redirect { location } => Self::redirect_page(location),
        }
    }
}
