//! Part list: pieces needed per color name and shape.

use std::collections::BTreeMap;

use mosaic_quant::{ColorCatalog, QuantizedMosaic, ShapeCategory};

/// Per-name piece counts, indexed by [`ShapeCategory::index`].
///
/// Every catalog name is present, including those the mosaic never uses.
/// Swatches sharing a name are summed.
pub fn count_parts(
    mosaic: &QuantizedMosaic,
    catalog: &ColorCatalog,
) -> BTreeMap<String, [usize; ShapeCategory::COUNT]> {
    let mut counts: BTreeMap<String, [usize; ShapeCategory::COUNT]> = catalog
        .swatches()
        .iter()
        .map(|s| (s.name().to_string(), [0; ShapeCategory::COUNT]))
        .collect();

    for (idx, per_shape) in mosaic.shape_counts(catalog.len()).into_iter().enumerate() {
        if let Some(entry) = counts.get_mut(catalog.swatch(idx).name()) {
            for (total, n) in entry.iter_mut().zip(per_shape) {
                *total += n;
            }
        }
    }
    counts
}

/// Render the counts as `name,plate,tile,round1x1,round2x2` lines in name
/// order.
pub fn render_part_list(mosaic: &QuantizedMosaic, catalog: &ColorCatalog) -> String {
    let mut out = String::new();
    for (name, counts) in count_parts(mosaic, catalog) {
        out.push_str(&name);
        for n in counts {
            out.push(',');
            out.push_str(&n.to_string());
        }
        out.push('\n');
    }
    out
}
