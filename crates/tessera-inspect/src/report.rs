use std::fmt::Display;

use serde::Serialize;
use tessera_geom::{Corner, Quad};

/// Text block printed for one quad: string form, bounds, and JSON encoding.
pub fn render<C>(quad: &Quad<C>) -> serde_json::Result<String>
where
    C: Corner + Display + Serialize,
{
    let bounds = quad.bounds();
    let json = serde_json::to_string_pretty(quad)?;

    let mut out = format!("quad:   {quad}\nbounds: {bounds}");
    if bounds.is_inverted() {
        out.push_str(" (inverted)");
    }
    out.push_str("\njson:\n");
    out.push_str(&json);
    Ok(out)
}
