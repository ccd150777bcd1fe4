use clap::{Parser, Subcommand};
use inspecta::analyze::analyze_description_with_len;
use inspecta::keywords;
use inspecta::report;
use inspecta::summary::DEFAULT_MAX_LEN;
use std::io::Read;

#[derive(Parser)]
#[command(author, version, about = "Inspecta inspection text analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one inspection description (argument or stdin)
    Analyze {
        text: Option<String>,
        /// Emit the result as a JSON envelope instead of the console report
        #[arg(long)]
        json: bool,
        /// Maximum summary length in characters
        #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
        max_len: usize,
    },
    /// Print the keyword tables behind the risk rules
    Keywords,
}

fn read_description(text: Option<String>) -> Result<String, String> {
    let raw = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            buf
        }
    };
    if raw.trim().is_empty() {
        return Err("No inspection text provided. Pass it as an argument or on stdin.".to_string());
    }
    Ok(raw)
}

fn analyze_command(text: Option<String>, json: bool, max_len: usize) -> Result<(), String> {
    if max_len == 0 {
        return Err("--max-len must be at least 1".to_string());
    }
    let description = read_description(text)?;
    let result = analyze_description_with_len(&description, max_len);

    if json {
        let payload = report::to_json(&result);
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?
        );
    } else {
        report::print_report(&result);
    }
    Ok(())
}

fn keywords_command() {
    println!("Critical-high: {}", keywords::CRITICAL_HIGH_KEYWORDS.join(", "));
    println!("High:          {}", keywords::HIGH_RISK_KEYWORDS.join(", "));
    println!("Medium:        {}", keywords::MEDIUM_RISK_KEYWORDS.join(", "));
    println!("Low:           {}", keywords::LOW_RISK_KEYWORDS.join(", "));
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            text,
            json,
            max_len,
        } => {
            if let Err(e) = analyze_command(text, json, max_len) {
                eprintln!("Analysis failed: {e}");
                std::process::exit(1);
            }
        }
        Commands::Keywords => keywords_command(),
    }
}
