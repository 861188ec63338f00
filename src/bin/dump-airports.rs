use airport_dump::airport::OptionalField;
use airport_dump::{AirportDumper, Config, WikidataClient};
use anyhow::Context;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "dump-airports")]
/// Write the IATA code, ICAO code, english wikipedia article, coordinates and country
/// of all the airports of wikidata, one airport per line
struct Opt {
    /// output file
    #[structopt(short = "f", long = "f", parse(from_os_str))]
    output: PathBuf,

    /// Configuration file used to define the endpoints, the properties and items’ id
    /// and the written fields. Every value is optional, wikidata is used by default
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Endpoint of the wikibase api, overrides the configuration file
    #[structopt(long)]
    api: Option<String>,

    /// Endpoint of the sparql query service, overrides the configuration file
    #[structopt(long)]
    sparql: Option<String>,

    /// Do not write the country of the airports
    #[structopt(long)]
    no_country: bool,
}

fn dump(opt: Opt) -> Result<usize, anyhow::Error> {
    let Opt {
        output,
        config,
        api,
        sparql,
        no_country,
    } = opt;

    let mut config = match config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(api) = api {
        config.api_endpoint = api;
    }
    if let Some(sparql) = sparql {
        config.sparql_endpoint = sparql;
    }
    if no_country {
        config
            .optional_fields
            .retain(|f| *f != OptionalField::Country);
    }
    log::debug!("configuration: {:#?}", config);

    let mut file = std::fs::File::create(&output)
        .with_context(|| format!("impossible to create {}", output.display()))?;
    let client = WikidataClient::new(&config)?;
    AirportDumper::new(&config).dump(&client, &mut file)
}

fn main() {
    airport_dump::log::init();

    let opt = Opt::from_args();
    dump(opt).expect("impossible to dump the airports");
}
