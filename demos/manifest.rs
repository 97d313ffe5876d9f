//! Driving generation from a JSON declaration manifest and writing `.g.cs` files.
//!
//! Run with: cargo run --example manifest -- declarations.json out/
//!
//! Without arguments a built-in manifest is used and nothing is written.

use char_generators::{generate_with_options, CancellationToken, DeclarationSet, GeneratorOptions};
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const BUILTIN: &str = r#"{
    "declarations": [
        {
            "id": "Csv.cs#CsvReader",
            "name": "CsvReader",
            "scope_path": "Demo.Csv",
            "visibility": "public",
            "attributes": [
                {
                    "name": "CharGenerators.CharExtensionsAttribute",
                    "arguments": { "OptimizeFor": ",;\"'\\" }
                }
            ]
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let manifest = match args.first() {
        Some(path) => fs::read_to_string(path)?,
        None => BUILTIN.to_string(),
    };
    let declarations: DeclarationSet = serde_json::from_str(&manifest)?;

    let options = GeneratorOptions::new().with_embed_attribute(false);
    let generation = generate_with_options(&declarations, &options, &CancellationToken::new())?;

    for diagnostic in &generation.diagnostics {
        eprintln!("warning: {}: {}", diagnostic.declaration, diagnostic.error);
    }

    match args.get(1) {
        Some(out_dir) => {
            let out_dir = Path::new(out_dir);
            fs::create_dir_all(out_dir)?;
            for artifact in generation.artifacts {
                let path = out_dir.join(&artifact.hint_name);
                fs::write(&path, artifact.source)?;
                println!("wrote {}", path.display());
            }
        }
        None => {
            for (hint_name, source) in generation.artifacts.iter() {
                println!("// ===== {} =====\n{}", hint_name, source);
            }
        }
    }

    Ok(())
}
