use glam::Vec2;
use musictoy_core::StateStore;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn canvas_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width() as f32, canvas.height() as f32)
}

/// Client coordinates of a mouse event mapped into canvas backing pixels.
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width().max(1.0) as f32;
    let h = rect.height().max(1.0) as f32;
    Vec2::new(
        x_css / w * canvas.width() as f32,
        y_css / h * canvas.height() as f32,
    )
}

/// `window.location.hash` as the sequencer's persisted state.
pub struct LocationHash {
    location: web::Location,
}

impl LocationHash {
    pub fn new(window: &web::Window) -> Self {
        Self {
            location: window.location(),
        }
    }

    /// Drop the stored grid and start over from a fresh page.
    pub fn reset_and_reload(&mut self) {
        self.save("");
        if let Err(e) = self.location.reload() {
            log::error!("[dom] reload failed: {:?}", e);
        }
    }
}

impl StateStore for LocationHash {
    fn load(&self) -> String {
        match self.location.hash() {
            Ok(h) => h.trim_start_matches('#').to_string(),
            Err(e) => {
                log::warn!("[dom] cannot read location hash: {:?}", e);
                String::new()
            }
        }
    }

    fn save(&mut self, encoded: &str) {
        if let Err(e) = self.location.set_hash(encoded) {
            log::error!("[dom] cannot write location hash: {:?}", e);
        }
    }
}
