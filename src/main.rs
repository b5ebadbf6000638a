use clap::{ArgAction, Parser, Subcommand};
use souk_moussel::types::OrderId;
use souk_moussel::{config, content, generate, images, output, routes};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("SOUK_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("SOUK_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "souk-moussel")]
#[command(about = "Static storefront generator for the Souk-Moussel marketplace")]
#[command(long_about = "\
Static storefront generator for the Souk-Moussel marketplace

Renders the landing page and order confirmation pages to plain HTML.

Layout:

  .
  ├── config.toml        # Site config (optional, see 'gen-config')
  └── public/            # Static assets, copied to the output root

Output:

  dist/
  ├── index.html                 # Landing page
  ├── content.json               # Modules, features, testimonials
  ├── _headers                   # Only when http.powered_by_header = true
  └── commande/<id>/index.html   # One per --order

Set RUST_LOG to override the log filter chosen by -v.")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding config.toml and the assets directory
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build {
        /// Also render the confirmation page for this order id (repeatable)
        #[arg(long = "order", value_name = "ID")]
        orders: Vec<String>,
    },
    /// Print one order confirmation page to stdout
    Order(OrderArgs),
    /// Validate config and content image origins without writing anything
    Check,
    /// Print the content tables as JSON
    Content,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct OrderArgs {
    /// Order id, displayed verbatim
    #[arg(allow_hyphen_values = true)]
    id: Option<String>,

    /// Request path instead of a bare id, e.g. /commande/ORD-12345
    #[arg(long)]
    path: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build { orders } => {
            let site = config::load_config(&cli.config_dir)?;
            let orders: Vec<OrderId> = orders.into_iter().map(OrderId::from).collect();
            println!("==> Building {}", cli.output.display());
            let report = generate::generate(&site, &cli.config_dir, &cli.output, &orders)?;
            output::print_generate_output(&report);
        }
        Command::Order(args) => {
            let id = match (args.id, args.path) {
                (Some(id), _) => OrderId::from(id),
                (None, Some(path)) => routes::order_id_from_path(&path).ok_or_else(|| {
                    format!(
                        "{path:?} is not an order route ({}<id>)",
                        routes::ORDER_ROUTE_PREFIX
                    )
                })?,
                (None, None) => return Err("an order id or --path is required".into()),
            };
            let site = config::load_config(&cli.config_dir)?;
            let css = generate::site_css(&site);
            println!(
                "{}",
                generate::render_order_confirmation(&id, &site, &css).into_string()
            );
        }
        Command::Check => {
            let site = config::load_config(&cli.config_dir)?;
            let refs: Vec<&str> = content::image_refs().collect();
            let rejected =
                images::rejected_images(refs.iter().copied(), &site.images.remote_patterns);
            for err in &rejected {
                warn!("{err}");
            }
            output::print_check_output(&site, refs.len(), &rejected);
            if !rejected.is_empty() {
                return Err(format!("{} content image(s) rejected", rejected.len()).into());
            }
            println!("==> Configuration is valid");
        }
        Command::Content => {
            println!("{}", content::export_json()?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so page output on stdout stays clean.
///
/// `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
