use crate::{InteractionType, SubnetworkGraph};
use std::io::Write;

impl SubnetworkGraph {
    /// Export this subnetwork graph to a `.dot` format.
    ///
    /// Direct regulations of the query gene are green, other regulon memberships grey and
    /// validated adjacencies blue (dashed). Edge labels show the weights.
    pub fn to_dot(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_as_dot(&mut buffer)
            .expect("I/O error converting `SubnetworkGraph` to `.dot`.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .dot string.")
    }

    pub fn write_as_dot(&self, output: &mut dyn Write) -> Result<(), std::io::Error> {
        writeln!(output, "digraph G {{")?;
        for node in self.nodes() {
            let name = self.get_node_name(node).replace('"', "\\\"");
            writeln!(
                output,
                "n{} [shape=box, label=\"{}\", style=filled];",
                node.0, name
            )?;
        }
        for interaction in self.interactions() {
            let line = match interaction.kind {
                InteractionType::AdjacencyValidated => "dashed",
                _ => "filled",
            };
            let color = match interaction.kind {
                InteractionType::DirectTarget => "#4abd73",
                InteractionType::RegulonMember => "#797979",
                InteractionType::AdjacencyValidated => "#4a7fbd",
            };
            writeln!(
                output,
                "n{} -> n{} [style=\"{}\", color=\"{}\", label=\"{}\"];",
                interaction.source.0, interaction.target.0, line, color, interaction.weight,
            )?;
        }
        writeln!(output, "}}")?;
        Ok(())
    }
}
