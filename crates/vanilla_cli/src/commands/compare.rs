//! Compare command implementation
//!
//! Prices one contract with every model and prints the results side by side.
//! A model that fails is reported in place; the first failure becomes the
//! command's exit status once all results have been printed.

use serde::Serialize;
use tracing::{info, warn};
use vanilla_core::types::PricingError;
use vanilla_engines::{PriceRequest, Pricer};

use crate::config::OutputFormat;
use crate::Result;

#[derive(Debug, Serialize)]
struct ModelOutput {
    model: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the compare command
pub fn run(request: &PriceRequest, format: OutputFormat) -> Result<()> {
    info!("Comparing all models");

    let (_, contract, config) = request.parse()?;
    let results = Pricer::new().price_all(&contract, &config);

    let mut first_error: Option<PricingError> = None;
    let mut rows = Vec::with_capacity(results.len());
    for (model, result) in results {
        match result {
            Ok(price) => rows.push(ModelOutput {
                model: model.display_name(),
                price: Some(price),
                error: None,
            }),
            Err(e) => {
                warn!(model = %model, error = %e, "Model failed");
                rows.push(ModelOutput {
                    model: model.display_name(),
                    price: None,
                    error: Some(e.to_string()),
                });
                first_error.get_or_insert(e);
            }
        }
    }

    match format {
        OutputFormat::Text => {
            for row in &rows {
                match (&row.price, &row.error) {
                    (Some(price), _) => println!("{}: {:.2}", row.model, price),
                    (None, Some(error)) => println!("{}: error: {}", row.model, error),
                    (None, None) => {}
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    match first_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
