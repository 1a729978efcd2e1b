use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The qualified name of the type to analyze
    pub type_name: String,

    #[arg(long("mp"))]
    /// A list of paths to search for compiled metadata artifacts
    pub metadata_path: Vec<String>,

    #[arg(long)]
    /// The accessor convention to resolve for each field (get, set or with)
    pub accessor: Option<String>,

    #[arg(long)]
    /// Whether to report only modifiable (non final) fields
    pub modifiable: bool,
}
