//! Score a product JSON document from a file or stdin
//!
//! Usage: `score_product [product.json]`
//!
//! The document may carry a `product_name` string next to the usual
//! OpenFoodFacts fields; it feeds category classification. Output is the
//! scoring result as pretty JSON on stdout.

use std::io::Read;

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use nutriscore::{classify, normalize, score};

fn read_input() -> Result<String, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw: Value = serde_json::from_str(&read_input()?)?;

    let product_name = raw
        .get("product_name")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let nutrition = normalize(&raw);
    let category = classify(product_name, &raw);
    let result = score(&nutrition, category)?;
    let grade = result.grade;

    let output = json!({
        "result": result,
        "display": {
            "color": grade.color(),
            "description": grade.description(),
            "health_score": grade.health_score(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
