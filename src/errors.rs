error_chain! {
    errors {
        GeneNotFound(name: String) {
            description("gene not found in genome")
            display("gene {:?} not found in genome", name)
        }

        PositionOutOfRange(gene: String, position: usize) {
            description("mutation position outside safe window bounds")
            display(
                "position {} of gene {:?} maps outside the searchable region",
                position, gene
            )
        }
    }
}
