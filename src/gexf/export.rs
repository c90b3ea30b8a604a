use crate::gexf::{escape_xml, GexfAttribute, GexfDocument, GEXF};
use std::io::{Error, Write};

impl GexfDocument {
    pub fn to_gexf(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write(&mut buffer)
            .expect("I/O error converting `GexfDocument` to string.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in GEXF string.")
    }

    pub fn write(&self, out: &mut dyn Write) -> Result<(), Error> {
        writeln!(out, "<?xml version='1.0' encoding='utf-8'?>")?;
        writeln!(out, "<gexf xmlns=\"{}\" version=\"1.2\">", GEXF)?;
        writeln!(
            out,
            "  <meta><creator>{} {}</creator></meta>",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        let edge_type = if self.directed {
            "directed"
        } else {
            "undirected"
        };
        writeln!(
            out,
            "  <graph defaultedgetype=\"{}\" mode=\"static\">",
            edge_type
        )?;
        write_attributes(out, "node", &self.node_attributes)?;
        write_attributes(out, "edge", &self.edge_attributes)?;

        writeln!(out, "    <nodes>")?;
        for node in &self.nodes {
            write!(
                out,
                "      <node id=\"{}\" label=\"{}\"",
                escape_xml(&node.id),
                escape_xml(&node.label)
            )?;
            if node.values.is_empty() {
                writeln!(out, " />")?;
            } else {
                writeln!(out, ">")?;
                write_values(out, &node.values)?;
                writeln!(out, "      </node>")?;
            }
        }
        writeln!(out, "    </nodes>")?;

        writeln!(out, "    <edges>")?;
        for (i, edge) in self.edges.iter().enumerate() {
            write!(
                out,
                "      <edge id=\"{}\" source=\"{}\" target=\"{}\"",
                i,
                escape_xml(&edge.source),
                escape_xml(&edge.target)
            )?;
            if let Some(weight) = edge.weight {
                write!(out, " weight=\"{}\"", weight)?;
            }
            if edge.values.is_empty() {
                writeln!(out, " />")?;
            } else {
                writeln!(out, ">")?;
                write_values(out, &edge.values)?;
                writeln!(out, "      </edge>")?;
            }
        }
        writeln!(out, "    </edges>")?;
        writeln!(out, "  </graph>")?;
        writeln!(out, "</gexf>")?;
        Ok(())
    }
}

fn write_attributes(
    out: &mut dyn Write,
    class: &str,
    attributes: &[GexfAttribute],
) -> Result<(), Error> {
    if attributes.is_empty() {
        return Ok(());
    }
    writeln!(out, "    <attributes class=\"{}\" mode=\"static\">", class)?;
    for attribute in attributes {
        writeln!(
            out,
            "      <attribute id=\"{}\" title=\"{}\" type=\"{}\" />",
            escape_xml(&attribute.id),
            escape_xml(&attribute.title),
            attribute.kind.as_str()
        )?;
    }
    writeln!(out, "    </attributes>")?;
    Ok(())
}

fn write_values(out: &mut dyn Write, values: &[(String, String)]) -> Result<(), Error> {
    writeln!(out, "        <attvalues>")?;
    for (id, value) in values {
        writeln!(
            out,
            "          <attvalue for=\"{}\" value=\"{}\" />",
            escape_xml(id),
            escape_xml(value)
        )?;
    }
    writeln!(out, "        </attvalues>")?;
    Ok(())
}
