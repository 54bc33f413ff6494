use anyhow::Context;

use stockroom_console::ConsoleController;
use stockroom_observability::LogConfig;
use stockroom_persistence::{GatewayConfig, PersistenceGateway};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init(&LogConfig::default());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let gateway = PersistenceGateway::new(GatewayConfig::default());

    tracing::info!(extension = %gateway.config().extension, "starting inventory console");

    let mut controller = ConsoleController::new(stdin.lock(), stdout.lock(), gateway);
    controller.run().context("console session failed")?;
    Ok(())
}
