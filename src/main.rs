use blockpress::config::Config;
use blockpress::storage::{InMemoryStorage, Storage};
use blockpress::{demo, graphql, logging, server};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "blockpress")]
#[command(about = "Block-structured content backend with a GraphQL API")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL/HTTP server
    Serve {
        /// Port to listen on (overrides config file and BLOCKPRESS_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Seed a sample post with demo blocks before serving
        #[arg(long)]
        seed_demo: bool,
    },
    /// Print the GraphQL SDL and exit
    Schema,
}

fn resolve_port(config: &mut Config, flag: Option<u16>) {
    let env_port = std::env::var("BLOCKPRESS_PORT")
        .ok()
        .and_then(|p| p.parse().ok());
    if let Some(port) = flag.or(env_port) {
        config.server.port = port;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, seed_demo } => {
            logging::init_logging();

            let mut config = Config::load()?;
            resolve_port(&mut config, port);

            let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());

            if seed_demo {
                let post_id = demo::seed_demo_content(storage.clone()).await?;
                println!("🌱 Seeded demo post: {post_id}");
                println!("   Try: {{ getPost(id: \"{post_id}\") {{ title blocks {{ __typename }} }} }}");
            }

            info!("Starting server on port {}", config.server.port);
            server::start_server(storage, &config).await?;
        }
        Commands::Schema => {
            let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
            let schema = graphql::create_schema(storage);
            println!("{}", schema.sdl());
        }
    }

    Ok(())
}
