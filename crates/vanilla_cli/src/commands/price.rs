//! Price command implementation
//!
//! Prices one contract with the requested model.

use serde::Serialize;
use tracing::info;
use vanilla_engines::{PriceRequest, Pricer};

use crate::config::OutputFormat;
use crate::Result;

#[derive(Debug, Serialize)]
struct PriceOutput {
    price: f64,
}

/// Run the price command
pub fn run(request: &PriceRequest, format: OutputFormat) -> Result<()> {
    info!(
        model = %request.model,
        option_type = %request.option_type,
        "Starting pricing"
    );

    let price = Pricer::new().price_request(request)?;

    match format {
        OutputFormat::Text => println!("Price: {:.4}", price),
        OutputFormat::Json => println!("{}", serde_json::to_string(&PriceOutput { price })?),
    }

    info!(price, "Pricing complete");
    Ok(())
}
