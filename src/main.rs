use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use huegrid::api;
use huegrid::models::AppConfig;
use huegrid::server;
use huegrid::worksheet;

#[derive(Parser)]
#[command(name = "huegrid")]
#[command(about = "Huegrid - coordinate coloring worksheet generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Generate a worksheet and render it as text (no server needed)
    Worksheet {
        /// Number of rows (1..=1000)
        #[arg(short, long, default_value_t = 5)]
        rows: usize,

        /// Number of columns (1..=702)
        #[arg(short, long, default_value_t = 5)]
        cols: usize,

        /// Number of color slots (1..=10)
        #[arg(short = 'k', long, default_value_t = 3)]
        colors: usize,

        /// Cells to paint, as comma-separated LABEL=SLOT pairs (e.g. "A1=0,C7=2")
        #[arg(short, long)]
        paint: Option<String>,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Huegrid API",
        description = "Coordinate coloring worksheet generator and palette server",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_list_colors,
        api::handle_add_color,
        api::handle_update_color,
        api::handle_delete_color,
        api::handle_generate_sheet,
        api::handle_get_sheet,
        api::handle_paint_cell,
        api::handle_set_slot,
        api::handle_set_active_slot,
    ),
    components(schemas(
        api::ColorRequest,
        api::ColorResponse,
        api::DeleteColorResponse,
        api::GenerateRequest,
        api::PaintRequest,
        api::SlotRequest,
        api::ActiveSlotRequest,
        api::SheetResponse,
        api::CoordinateListResponse,
    )),
    tags(
        (name = "Palette", description = "Palette color management"),
        (name = "Sheet", description = "Sheet generation and painting")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Worksheet {
            rows,
            cols,
            colors,
            paint,
            output,
        }) => run_worksheet_command(rows, cols, colors, paint.as_deref(), output.as_deref()),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huegrid=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let config = AppConfig::load(config_file.as_deref());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| config.bind_addr.clone());

    let state = server::create_app_state(&config).await;

    let app = server::build_router(state)
        // OpenAPI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Huegrid server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Generate and render a worksheet without a server
fn run_worksheet_command(
    rows: usize,
    cols: usize,
    colors: usize,
    paint: Option<&str>,
    output: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    use coord_sheet::{Color, ColorId, HexColor, SheetSession};
    use huegrid::models::SeedColor;
    use huegrid::services::DEFAULT_PALETTE;

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huegrid=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let config = AppConfig::load(config_file.as_deref());

    // Same pool the server would seed: config colors, or the defaults.
    let seeds: Vec<SeedColor> = if config.seed_colors.is_empty() {
        DEFAULT_PALETTE
            .iter()
            .map(|(name, hex_value)| SeedColor {
                name: name.to_string(),
                hex_value: hex_value.to_string(),
            })
            .collect()
    } else {
        config.seed_colors
    };

    let mut pool = Vec::with_capacity(seeds.len());
    for (i, seed) in seeds.iter().enumerate() {
        let hex: HexColor = seed
            .hex_value
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid seed color '{}': {e}", seed.name))?;
        pool.push(Color::new(ColorId(i as i64 + 1), seed.name.clone(), hex));
    }

    let mut session = SheetSession::generate(rows, cols, colors, &pool)
        .map_err(|e| anyhow::anyhow!("Cannot generate sheet: {e}"))?;

    if let Some(paint) = paint {
        for spec in paint.split(',').filter(|s| !s.trim().is_empty()) {
            let (row, col, slot) = worksheet::parse_cell_spec(spec)
                .ok_or_else(|| anyhow::anyhow!("Invalid paint spec '{spec}' (expected LABEL=SLOT, e.g. C7=2)"))?;
            session
                .set_active_slot(slot)
                .and_then(|_| session.paint_active(row, col))
                .map_err(|e| anyhow::anyhow!("Cannot paint '{spec}': {e}"))?;
        }
    }

    let text = worksheet::render(&session.snapshot());
    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            println!("Wrote worksheet to {} ({} bytes)", path.display(), text.len());
        }
        None => print!("{text}"),
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Huegrid v{VERSION}");
    println!("Coordinate coloring worksheet generator\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:4000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  huegrid serve      Start the HTTP server");
    println!("  huegrid worksheet  Render a worksheet to text");
    println!("\nRun 'huegrid --help' for more details.");
}
