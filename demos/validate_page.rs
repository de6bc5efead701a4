use std::sync::Arc;

use pagecraft::{PageDocument, PageSpecValidator, SchemaCatalog};
use serde_json::{Value, json};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let raw: Value = serde_json::from_str(include_str!("../tests/data/pages/valid/demo.json"))?;
    let validator = PageSpecValidator::new(Arc::new(SchemaCatalog::builtin()));

    let spec = validator.validate(&PageDocument::from_value(raw.clone()))?;
    println!("normalized demo page:");
    println!("{}", serde_json::to_string_pretty(&spec.to_value()?)?);

    // Break one section and show the aggregated report.
    let mut broken = raw;
    broken["page"]["sections"][1]["props"] = json!({"align": "diagonal"});
    if let Err(report) = validator.validate(&PageDocument::from_value(broken)) {
        println!();
        println!("issues after breaking section 1:");
        println!("{report}");
        println!();
        println!(
            "details payload: {}",
            serde_json::to_string_pretty(&report.details())?
        );
    }

    Ok(())
}
