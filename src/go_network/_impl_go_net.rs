use crate::go_network::{
    organism_for_species, ChromosomeAnnotation, DegResult, Direction, EnrichmentRequest,
    EnrichmentService, GeneListResult, GoNetConfig, ListOutcome, TermNetwork,
};
use crate::SubnetError;
use std::collections::HashSet;
use tracing::info;

/// Build GO term networks for the up- and down-regulated genes of every group.
///
/// For each group, genes on the sex chromosomes are optionally removed first (this needs
/// an `annotation` source). Then the up- and down-regulated genes are selected and each
/// list which is long enough is sent to the `enrichment` service. The enrichment table is
/// turned into a `TermNetwork` and exported to `GOnet_<group>_<direction>.gexf` in
/// `config.out_dir`.
pub fn go_net(
    degs: &[DegResult],
    enrichment: &dyn EnrichmentService,
    annotation: Option<&dyn ChromosomeAnnotation>,
    config: &GoNetConfig,
) -> Result<Vec<GeneListResult>, SubnetError> {
    let organism = organism_for_species(&config.species)?;
    if config.remove_sex_genes && annotation.is_none() {
        return Err(SubnetError::Config(
            "Removing sex-linked genes requires a chromosome annotation source.".to_string(),
        ));
    }

    let mut results = Vec::new();
    for deg in degs {
        let deg = match annotation {
            Some(annotation) if config.remove_sex_genes => {
                let sex_genes = sex_linked_genes(annotation, &config.species, deg)?;
                let clean = deg.without(&sex_genes);
                info!(
                    "Processing {}: {} genes (after sex-gene removal)",
                    deg.group(),
                    clean.genes().len()
                );
                clean
            }
            _ => deg.clone(),
        };

        for direction in [Direction::Up, Direction::Down] {
            let genes = deg.select(direction, config.lfc_up, config.lfc_down);
            let outcome = if genes.len() < config.min_genes {
                info!(
                    "Skipping {} {}: list too small ({} genes)",
                    deg.group(),
                    direction,
                    genes.len()
                );
                ListOutcome::Skipped
            } else {
                info!("Making GOnetwork table for {} genes.", genes.len());
                let request = EnrichmentRequest {
                    genes: &genes,
                    organism,
                    gene_sets: &config.gene_sets,
                    cutoff: config.cutoff,
                };
                let terms = enrichment.enrich(&request)?;
                let network = TermNetwork::enrichment_map(&terms, config.cutoff, config.top_term);
                let path = config.output_path(deg.group(), direction);
                info!("Saving network table to {}", path.display());
                network.export_gexf(&path)?;
                ListOutcome::Enriched {
                    terms,
                    network,
                    path,
                }
            };
            results.push(GeneListResult {
                group: deg.group().to_string(),
                direction,
                genes,
                outcome,
            });
        }
    }
    Ok(results)
}

/// **(internal)** Genes of `deg` which are located on the X or Y chromosome.
fn sex_linked_genes(
    annotation: &dyn ChromosomeAnnotation,
    species: &str,
    deg: &DegResult,
) -> Result<HashSet<String>, SubnetError> {
    let chromosomes = annotation.chromosomes(species, &deg.gene_names())?;
    Ok(chromosomes
        .into_iter()
        .filter(|(_, chromosome)| chromosome == "X" || chromosome == "Y")
        .map(|(gene, _)| gene)
        .collect())
}
