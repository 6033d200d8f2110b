//! Encoding a few leaves to JSON and back.
//!
//! Run with: cargo run --example simple

use chrono::{TimeZone, Utc};
use num_bigint::BigInt;
use serde_leaf::{encode_value, untransform_value, RegExp, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let leaves = vec![
        Value::BigInt("123456789012345678901234567890".parse::<BigInt>()?),
        Value::from(
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
                .single()
                .ok_or("invalid date")?,
        ),
        Value::RegExp(RegExp::new("a/b", "gi")),
        Value::from(f64::NEG_INFINITY),
        Value::Undefined,
    ];

    for leaf in leaves {
        let Some((payload, tag)) = encode_value(&leaf) else {
            continue;
        };

        // The payload is plain JSON; the tag travels next to it
        let json = serde_json::to_string(&payload)?;
        println!("{:<10} {:<40} {}", tag, json, leaf);

        let parsed: Value = serde_json::from_str(&json)?;
        let restored = untransform_value(parsed, tag.as_str())?;
        assert_eq!(restored, leaf);
    }
    println!("✓ Round-trip successful");

    Ok(())
}
