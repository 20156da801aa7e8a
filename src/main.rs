use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use promptproxy::{
    credentials, AskPersonaUseCase, CompletionClient, ComposedPrompt, CompletionRequest,
    HttpCompletionClient, MockCompletionClient, Persona, DEFAULT_MODEL,
};

/// Canned prompt for the temperature comparison demo.
const DEMO_PROMPT: &str = "Write a short email to a professor asking for an extension on an assignment. Keep it polite and concise.";

/// Temperatures contrasted by the demo: deterministic vs. high-variance.
const DEMO_TEMPERATURES: [f32; 2] = [0.0, 1.5];

#[derive(Parser)]
#[command(name = "promptproxy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer offline with the mock client instead of calling the endpoint
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the persona catalog
    Personas,

    /// Compose a persona prompt and send it to the completion endpoint
    Ask {
        prompt: String,

        /// Persona label; unknown labels fall back to the default
        #[arg(short, long)]
        persona: Option<String>,

        #[arg(short, long)]
        model: Option<String>,

        #[arg(short, long, default_value_t = 0.7)]
        temperature: f32,

        /// API token; the HF_TOKEN environment variable takes precedence
        #[arg(long)]
        token: Option<String>,

        /// Print the outgoing JSON payload (credential excluded) before sending
        #[arg(long)]
        show_payload: bool,
    },

    /// Send the canned demo prompt at temperature 0.0 and 1.5
    Demo {
        /// Persona label; unknown labels fall back to the default
        #[arg(short, long)]
        persona: Option<String>,

        /// API token; the HF_TOKEN environment variable takes precedence
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client: Arc<dyn CompletionClient> = if cli.mock {
        info!("Using mock completion client");
        Arc::new(MockCompletionClient::new())
    } else {
        Arc::new(HttpCompletionClient::from_env())
    };

    match cli.command {
        Commands::Personas => {
            println!("Available personas:\n");
            for (i, persona) in Persona::all().iter().enumerate() {
                let marker = if i == 0 { " (default)" } else { "" };
                println!("  {}{}", persona.label(), marker);
                println!("    {}", persona.system_text());
                println!();
            }
        }

        Commands::Ask {
            prompt,
            persona,
            model,
            temperature,
            token,
            show_payload,
        } => {
            let model = resolve_model(model);
            let persona_label = persona
                .unwrap_or_else(|| Persona::default_persona().label().to_string());
            let credential = credentials::resolve(token.as_deref()).unwrap_or_default();

            if show_payload {
                let composed = ComposedPrompt::compose(&persona_label, &prompt);
                let request = CompletionRequest::new(&model, &composed, temperature);
                println!("{}\n", serde_json::to_string_pretty(&request)?);
            }

            let use_case = AskPersonaUseCase::new(client);

            eprintln!("Sending request…");
            let text = use_case
                .execute(&persona_label, &prompt, &model, temperature, &credential)
                .await?;

            println!("{text}");
            eprintln!("Done.");
        }

        Commands::Demo { persona, token } => {
            let model = resolve_model(None);
            let persona_label = persona
                .unwrap_or_else(|| Persona::default_persona().label().to_string());
            let credential = credentials::resolve(token.as_deref()).unwrap_or_default();

            let use_case = AskPersonaUseCase::new(client);

            println!("Demo prompt: {DEMO_PROMPT}\n");

            for temperature in DEMO_TEMPERATURES {
                println!("--- temperature {temperature:.1} ---");
                match use_case
                    .execute(&persona_label, DEMO_PROMPT, &model, temperature, &credential)
                    .await
                {
                    Ok(text) => println!("{text}\n"),
                    Err(e) => eprintln!("{e}\n"),
                }
            }
            eprintln!("Done.");
        }
    }

    Ok(())
}

/// Model precedence: `--model` flag, then `HF_MODEL`, then the default.
fn resolve_model(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("HF_MODEL").ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}
