use codicil::{FilesystemTemplateStore, IntakeRecord, NopRenderer, PlanScope, fill_document};
use std::env;
use std::fs;

/// A simple CLI to fill a document template from an intake record.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        eprintln!("Fills an estate-planning document template from an intake record.");
        eprintln!();
        eprintln!(
            "Usage: {} <templates-dir> <intake.json> <output-file> [--complete-plan]",
            args[0]
        );
        std::process::exit(1);
    }

    let templates_dir = &args[1];
    let intake_path = &args[2];
    let output_path = &args[3];
    let scope = if args.get(4).is_some_and(|a| a == "--complete-plan") {
        PlanScope::CompletePlan
    } else {
        PlanScope::TrustOnly
    };

    let intake_json = match fs::read_to_string(intake_path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error reading {intake_path}: {e}");
            std::process::exit(1);
        }
    };
    let record: IntakeRecord = match serde_json::from_str(&intake_json) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error parsing {intake_path}: {e}");
            std::process::exit(1);
        }
    };

    let store = FilesystemTemplateStore::new(templates_dir);
    match fill_document(&record, scope, &store, &NopRenderer).await {
        Ok(filled) => {
            if let Err(e) = fs::write(output_path, &filled.bytes) {
                eprintln!("Error writing {output_path}: {e}");
                std::process::exit(1);
            }
            println!(
                "Wrote {} ({} bytes, {} variant)",
                output_path,
                filled.bytes.len(),
                filled.variant
            );
            for warning in &filled.repair_warnings {
                eprintln!("warning: {warning}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
