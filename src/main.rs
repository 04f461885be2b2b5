use eks_vpc_topology::output::{topology_print, topology_to_json};
use eks_vpc_topology::resolve_from_config;
use eks_vpc_topology::TopologyConfig;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config_path =
        std::env::var("TOPOLOGY_CONFIG").unwrap_or_else(|_| "topology_config.json".to_string());
    let config =
        TopologyConfig::from_file(&config_path).expect("Error loading topology config file");
    let identity = config
        .cluster_identity()
        .expect("Error building cluster identity");

    let topology = resolve_from_config(&config, &identity).expect("Error resolving topology");

    topology_print(&topology)?;

    if std::env::var("TOPOLOGY_JSON").is_ok() {
        println!("{}", topology_to_json(&topology)?);
    }

    Ok(())
}
