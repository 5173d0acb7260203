use anyhow::{Context, Result};
use clap::Parser;
use crypto_rest::{Capability, Rest};

const SAMPLE_PAIRS: usize = 5;

/// Resolve exchanges through the REST registry and print their state.
#[derive(Parser, Debug)]
#[command(name = "rest_lookup")]
#[command(about, long_about = None)]
struct Cli {
    /// Point exchanges that have one at their sandbox
    #[arg(long)]
    sandbox: bool,

    /// Path to the YAML config
    #[arg(long, env = "REST_CONFIG")]
    config: Option<String>,

    /// Exchanges to resolve (case-insensitive)
    #[arg(required = true)]
    names: Vec<String>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let rest = Rest::new(cli.config.as_deref(), cli.sandbox).context("building REST clients")?;
    println!("Supported exchanges: {}\n", rest.names().join(", "));

    for name in &cli.names {
        let client = rest
            .get(name)
            .with_context(|| format!("resolving {name}"))?;

        println!("{}", client.id());
        println!("{:-<60}", "");
        println!("  base url    : {}", client.base_url());
        println!(
            "  sandbox     : {} (supported: {})",
            client.is_sandbox(),
            client.supports(Capability::Sandbox)
        );
        println!("  credentials : {}", client.has_credentials());
        println!("  mapped      : {}", client.is_mapped());

        let table = client.mapping()?;
        let mut pairs: Vec<(&str, &str)> = table.iter().collect();
        pairs.sort();
        println!("  pairs       : {}", pairs.len());
        for (canonical, native) in pairs.iter().take(SAMPLE_PAIRS) {
            println!("    {:20} -> {}", canonical, native);
        }
        println!();
    }

    Ok(())
}
