use resvg::{tiny_skia, usvg};

use super::RenderError;

/// Rasterizes an SVG document to PNG bytes at its intrinsic size.
///
/// System fonts are loaded so that text commands render; on a host without
/// any fonts the labels are silently dropped by `usvg`.
pub fn render_png(svg: &str) -> Result<Vec<u8>, RenderError> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::Parse(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(RenderError::EmptyCanvas)?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    log::debug!("rasterized {}x{} frame", size.width(), size.height());

    pixmap.encode_png().map_err(|e| RenderError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_minimal_document() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"><rect width="8" height="8" fill="red"/></svg>"#;
        let png = render_png(svg).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(render_png("not svg"), Err(RenderError::Parse(_))));
    }
}
