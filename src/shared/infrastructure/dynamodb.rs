// Typed accessors over raw DynamoDB items.
//
// Each adapter maps its own record shape; these helpers only make the
// "attribute missing or of the wrong type" failures uniform.

use anyhow::{Context, anyhow};
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

pub type Item = HashMap<String, AttributeValue>;

pub fn string_attr(item: &Item, name: &str) -> anyhow::Result<String> {
    item.get(name)
        .ok_or_else(|| anyhow!("attribute `{name}` missing"))?
        .as_s()
        .map(Clone::clone)
        .map_err(|_| anyhow!("attribute `{name}` is not a string"))
}

pub fn bool_attr(item: &Item, name: &str) -> anyhow::Result<bool> {
    item.get(name)
        .ok_or_else(|| anyhow!("attribute `{name}` missing"))?
        .as_bool()
        .copied()
        .map_err(|_| anyhow!("attribute `{name}` is not a boolean"))
}

pub fn number_attr(item: &Item, name: &str) -> anyhow::Result<i64> {
    let raw = item
        .get(name)
        .ok_or_else(|| anyhow!("attribute `{name}` missing"))?
        .as_n()
        .map_err(|_| anyhow!("attribute `{name}` is not a number"))?;
    raw.parse::<i64>()
        .with_context(|| format!("attribute `{name}` is not an integer: {raw}"))
}
