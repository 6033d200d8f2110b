//! Tightening key parsing and unknown-tag handling with CodecOptions.
//!
//! Run with: cargo run --example custom_options

use serde_leaf::{
    transform_value_with_options, untransform_value_with_options, value, CodecOptions, Error,
    KeyParsing, Transform, UnknownTagPolicy, Value,
};
use std::error::Error as StdError;

fn main() -> Result<(), Box<dyn StdError>> {
    // "01" reads as index 1 under the default prefix parsing
    let loose_keys = value!({ "0": "a", "01": "b" });

    println!("Default (prefix key parsing):");
    let default = CodecOptions::new();
    let transform = transform_value_with_options(&loose_keys, &default);
    println!("  {} -> {:?}\n", loose_keys, transform.as_ref().map(Transform::tag));

    println!("Strict key parsing:");
    let strict_keys = CodecOptions::new().with_key_parsing(KeyParsing::Strict);
    let transform = transform_value_with_options(&loose_keys, &strict_keys);
    println!("  {} -> {:?}\n", loose_keys, transform.as_ref().map(Transform::tag));
    assert!(transform.is_none());

    // Tags written by a newer encoder
    println!("Unknown tag, pass-through:");
    let payload = Value::from("Symbol(id)");
    let passed = untransform_value_with_options(payload.clone(), "symbol", &default)?;
    println!("  {}\n", passed);

    println!("Unknown tag, rejected:");
    let rejecting = CodecOptions::new().with_unknown_tags(UnknownTagPolicy::Reject);
    match untransform_value_with_options(payload, "symbol", &rejecting) {
        Err(err @ Error::UnknownTag(_)) => println!("  {}", err),
        other => return Err(format!("expected an unknown-tag error, got {:?}", other).into()),
    }

    println!("\nBoth at once: {:?}", CodecOptions::strict());

    Ok(())
}
