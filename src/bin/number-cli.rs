use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "number-cli")]
#[command(about = "Query CLI for the Number Classification API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a number and print the full JSON response
    Classify { number: String },
    /// Print only the fun fact for a number
    Fact { number: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Classify { number } => {
            let res = client
                .get(format!("{}/api/classify-number", cli.url))
                .query(&[("number", number)])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Fact { number } => {
            let res = client
                .get(format!("{}/api/classify-number", cli.url))
                .query(&[("number", number)])
                .send()
                .await?;
            let status = res.status();
            let json: Value = res.json().await?;
            if !status.is_success() {
                eprintln!("Error: API returned status {}", status);
                eprintln!("Response: {}", serde_json::to_string_pretty(&json)?);
                return Ok(());
            }
            match json.get("fun_fact").and_then(Value::as_str) {
                Some(fact) => println!("{}", fact),
                None => eprintln!("Error: response carried no fun_fact field"),
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
