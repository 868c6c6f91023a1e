use checkout::application::manager::PurchaseManager;
use checkout::domain::ports::{AuthorizerBox, CardValidationBox, OrderStore};
use checkout::domain::validation::CardValidator;
use checkout::infrastructure::authorizers::{AlwaysApproveAuthorizer, ProcessorAuthorizer};
use checkout::infrastructure::in_memory::InMemoryOrderStore;
use checkout::interfaces::csv::order_reader::OrderReader;
use checkout::interfaces::csv::order_writer::OrderWriter;
use checkout::interfaces::csv::purchase_reader::PurchaseReader;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Order seed CSV file
    orders: PathBuf,

    /// Purchase requests CSV file
    purchases: PathBuf,

    /// Merchant processor submit endpoint. Uses the always-approve demo
    /// backend when absent.
    #[arg(long)]
    processor_url: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the order CSV.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkout=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let store = InMemoryOrderStore::new();

    let file = File::open(&cli.orders).into_diagnostic()?;
    for order in OrderReader::new(file).orders() {
        let order = order.into_diagnostic()?;
        store.create_order(order).await.into_diagnostic()?;
    }

    let authorizer: AuthorizerBox = match &cli.processor_url {
        Some(url) => Box::new(ProcessorAuthorizer::new(url.clone())),
        None => Box::new(AlwaysApproveAuthorizer::new()),
    };
    let validator: CardValidationBox = Box::new(CardValidator::new());

    // The manager and this caller share the one store.
    let manager = PurchaseManager::new(validator, authorizer, Box::new(store.clone()));

    let file = File::open(&cli.purchases).into_diagnostic()?;
    for request in PurchaseReader::new(file).purchases() {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Error reading purchase: {e}");
                continue;
            }
        };

        let order = store.order_by_id(request.order).await.into_diagnostic()?;
        let Some(mut order) = order else {
            tracing::warn!(order = request.order, "purchase for unknown order skipped");
            continue;
        };

        match manager.complete_purchase(&mut order, &request.card_info()).await {
            Ok(Some(_)) => tracing::info!(order = order.order, "purchase completed"),
            Ok(None) => tracing::info!(order = order.order, "purchase not authorized"),
            Err(e) => eprintln!("Error completing purchase for order {}: {e}", order.order),
        }
    }

    let orders = store.orders().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());
    writer.write_orders(&orders).into_diagnostic()?;

    Ok(())
}
