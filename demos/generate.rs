//! Generating both artifact shapes from declarations built in code.
//!
//! Run with: RUST_LOG=debug cargo run --example generate

use char_generators::{
    generate, ArgumentValue, CancellationToken, DeclarationEntry, DeclarationSet, Visibility,
    DEFAULT_MARKER,
};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let declarations = DeclarationSet::new()
        // [CharExtensions(Global = true, OptimizeFor = "0123456789")]
        .with_declaration(DeclarationEntry::new("Numbers").with_attribute(
            DEFAULT_MARKER,
            [
                ("Global", ArgumentValue::from(true)),
                ("OptimizeFor", ArgumentValue::from("0123456789")),
            ],
        ))
        // [CharExtensions] on an internal class, default character set
        .with_declaration(
            DeclarationEntry::new("JsonWriter")
                .in_scope("Demo.Serialization")
                .with_visibility(Visibility::Internal)
                .with_attribute(DEFAULT_MARKER, Vec::<(String, ArgumentValue)>::new()),
        );

    let generation = generate(&declarations, &CancellationToken::new())?;

    for (hint_name, source) in generation.artifacts.iter() {
        println!("// ===== {} =====", hint_name);
        println!("{}", source);
    }
    for diagnostic in &generation.diagnostics {
        eprintln!("{}: {}", diagnostic.declaration, diagnostic.error);
    }

    Ok(())
}
