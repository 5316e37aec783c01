use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "filter-cli")]
#[command(about = "Command-line client for the product filter service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the catalog by category, price bracket and shipping
    Filter {
        /// Category label: 家电, 服装 or 食品
        #[arg(long)]
        category: String,
        /// Price label: 0-100元, 100-500元 or 500元以上
        #[arg(long)]
        price: String,
        /// Free shipping label: 是 or 否
        #[arg(long)]
        shipping: String,
    },
    /// Show condition-set sizes
    Statistics,
    /// List the catalog
    Products,
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Filter {
            category,
            price,
            shipping,
        } => {
            client
                .post(format!("{base}/filter"))
                .json(&json!({
                    "category": category,
                    "price": price,
                    "shipping": shipping,
                }))
                .send()
                .await?
        }
        Commands::Statistics => client.get(format!("{base}/statistics")).send().await?,
        Commands::Products => client.get(format!("{base}/products")).send().await?,
        Commands::Health => client.get(format!("{base}/health")).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Err(format!("service returned status {}", status).into());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
