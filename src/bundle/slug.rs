//! Name Slugification
//!
//! One pure `slugify` shared by tool-id derivation and export filenames, so
//! the two can never drift apart. The mapping must stay byte-for-byte stable:
//! downstream tooling matches on the generated identifiers.

use std::collections::HashMap;

use crate::constants::export::TOOL_ID_PREFIX;

/// Lowercase the name, then collapse every maximal run of characters outside
/// `[a-z0-9]` into a single underscore.
///
/// `"Customer Segmentation & Targeting"` → `"customer_segmentation_targeting"`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_run = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('_');
            in_run = true;
        }
    }

    slug
}

/// Tool identifier for a knowledge document: `kb_` + slug of its name.
pub fn derive_tool_id(name: &str) -> String {
    format!("{}{}", TOOL_ID_PREFIX, slugify(name))
}

/// Derive tool ids for a set of names in order, disambiguating collisions
/// with a numeric suffix (`kb_x`, `kb_x_2`, `kb_x_3`, …). The reference
/// behavior left colliding ids undefined; suffixing keeps them unique for
/// downstream tooling while preserving order determinism.
pub fn unique_tool_ids<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut ids = Vec::new();

    for name in names {
        let base = derive_tool_id(name);
        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            ids.push(base);
        } else {
            ids.push(format!("{}_{}", base, count));
        }
    }

    ids
}
