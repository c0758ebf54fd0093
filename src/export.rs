//! HTML export — serialize a consistent collection as an interactive
//! vis-network page.
//!
//! Produces a single self-contained HTML file: dark background, Barnes–Hut
//! physics, node size scaled by degree, edge thickness by category strength,
//! and a hover title listing each node's partners per category.
//!
//! ```text
//! Collection → render_html() → socnetvis.html → open in a browser
//! ```
//!
//! Callers are responsible for only handing over a collection the engine has
//! verified: on an inconsistent one the page would draw asymmetric edges as
//! if they were mutual.

use std::io::Write;

use serde_json::json;

use crate::model::Collection;
use crate::{Error, Result};

/// Render the collection as a self-contained HTML page.
///
/// Each unordered pair is drawn once; symmetry guarantees both sides agree on
/// the category, so the side with the lexicographically smaller name owns the
/// edge.
pub fn render_html(nodes: &Collection, writer: &mut dyn Write) -> Result<()> {
    let mut net_nodes = Vec::with_capacity(nodes.len());
    let mut net_edges = Vec::new();

    for (name, node) in nodes {
        let degree = node.connections.degree();
        let mut title = format!("{name} <br>{degree} Connections<br>");
        for (category, list) in node.connections.iter() {
            if list.is_empty() {
                continue;
            }
            title.push_str(&format!("<br>{}<br>&nbsp&nbsp", capitalize(category.as_str())));
            title.push_str(&list.join("<br>&nbsp&nbsp"));
            title.push_str("<br>");
        }
        net_nodes.push(json!({
            "id": name,
            "label": name,
            "title": title,
            "value": degree,
        }));

        for (category, list) in node.connections.iter() {
            for partner in list {
                if name.as_str() < partner.as_str() {
                    net_edges.push(json!({
                        "from": name,
                        "to": partner,
                        "value": category.weight(),
                    }));
                }
            }
        }
    }

    let nodes_json = serde_json::to_string(&net_nodes).map_err(|e| Error::Encode {
        name: "network nodes".to_string(),
        source: e,
    })?;
    let edges_json = serde_json::to_string(&net_edges).map_err(|e| Error::Encode {
        name: "network edges".to_string(),
        source: e,
    })?;

    write_page(writer, &nodes_json, &edges_json)?;
    Ok(())
}

fn write_page(writer: &mut dyn Write, nodes_json: &str, edges_json: &str) -> std::io::Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "<meta charset=\"utf-8\">")?;
    writeln!(writer, "<title>socnetvis</title>")?;
    writeln!(
        writer,
        "<script src=\"https://unpkg.com/vis-network/standalone/umd/vis-network.min.js\"></script>"
    )?;
    writeln!(
        writer,
        "<style>html, body {{ margin: 0; height: 100%; }} \
         #network {{ width: 100%; height: 100%; background-color: #222222; }}</style>"
    )?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "<div id=\"network\"></div>")?;
    writeln!(writer, "<script>")?;
    writeln!(writer, "const nodes = new vis.DataSet({nodes_json});")?;
    writeln!(writer, "const edges = new vis.DataSet({edges_json});")?;
    writeln!(
        writer,
        "const options = {{\
           nodes: {{ font: {{ color: \"white\" }}, scaling: {{ min: 10, max: 40 }} }},\
           edges: {{ scaling: {{ min: 1, max: 8 }}, color: {{ inherit: \"both\" }} }},\
           physics: {{ barnesHut: {{ gravitationalConstant: -8000, springConstant: 0.001, springLength: 200 }} }}\
         }};"
    )?;
    writeln!(
        writer,
        "new vis.Network(document.getElementById(\"network\"), {{ nodes, edges }}, options);"
    )?;
    writeln!(writer, "</script>")?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
