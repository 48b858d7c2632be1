//! badcase CLI entry point.

use badcase_cli::{run, RunConfig};
use badcase_core::Domain;
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("badcase")
        .version(badcase_core::VERSION)
        .about("Synthetic malformed code/formula/table sample generator")
        .arg(
            Arg::new("domain")
                .long("domain")
                .default_value("all")
                .help("Domain to generate: code, formula, table, or all"),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .default_value("100")
                .value_parser(value_parser!(u64))
                .help("Records to append per output file"),
        )
        .arg(
            Arg::new("paragraphs")
                .long("paragraphs")
                .default_value("5")
                .value_parser(value_parser!(usize))
                .help("Paragraphs per document"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Seed the RNG for reproducible output"),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .default_value(".")
                .help("Directory for the JSONL output files"),
        )
        .get_matches();

    let domain_arg = cli
        .get_one::<String>("domain")
        .map_or("all", String::as_str);
    let domains: Vec<Domain> = if domain_arg == "all" {
        Domain::ALL.to_vec()
    } else {
        vec![domain_arg.parse()?]
    };
    let count = cli.get_one::<u64>("count").copied().unwrap_or(100);
    let paragraphs = cli.get_one::<usize>("paragraphs").copied().unwrap_or(5);
    let seed = cli.get_one::<u64>("seed").copied();
    let out_dir = cli
        .get_one::<String>("out-dir")
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    for domain in domains {
        let config = RunConfig {
            domain,
            count,
            paragraphs,
            out_dir: out_dir.clone(),
            seed,
        };
        let path = run(&config)?;
        println!("appended {} records to {}", count, path.display());
    }
    Ok(())
}
