use flow_core::{PathError, PathGeometry, MAX_PIXEL_RATIO};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

/// An inline svg element queried through the browser's geometry API.
pub struct DomPath {
    element: web::SvgGeometryElement,
}

impl PathGeometry for DomPath {
    fn total_length(&self) -> f32 {
        self.element.get_total_length()
    }

    fn point_at_length(&self, distance: f32) -> Result<Vec2, PathError> {
        let p = self
            .element
            .get_point_at_length(distance)
            .map_err(|e| PathError::Query {
                distance,
                reason: format!("{:?}", e),
            })?;
        Ok(Vec2::new(p.x(), p.y()))
    }
}

/// Collect every element matching `selector` as a measurable path, in
/// document order. Elements without the geometry API fail the whole set.
pub fn collect_paths(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Vec<DomPath>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {selector}: {:?}", e))?;
    let mut paths = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let element = node.dyn_into::<web::SvgGeometryElement>().map_err(|node| {
            PathError::Unsupported(node.node_name().to_lowercase())
        })?;
        paths.push(DomPath { element });
    }
    log::info!("[dom] found {} paths matching {}", paths.len(), selector);
    Ok(paths)
}
