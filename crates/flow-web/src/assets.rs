use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Fetch `url` and decode it into an `ImageBitmap` without touching the DOM.
pub async fn load_image_bitmap(url: &str) -> anyhow::Result<web::ImageBitmap> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("fetch {} failed with status {}", url, resp.status());
    }
    let blob: web::Blob = JsFuture::from(resp.blob().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let bitmap = JsFuture::from(window.create_image_bitmap_with_blob(&blob).map_err(js_err)?)
        .await
        .map_err(js_err)?
        .dyn_into::<web::ImageBitmap>()
        .map_err(js_err)?;
    Ok(bitmap)
}

/// Start loading the background; the bitmap lands in `slot` for the next frame.
pub fn queue_background(url: &'static str, slot: Rc<RefCell<Option<web::ImageBitmap>>>) {
    spawn_local(async move {
        match load_image_bitmap(url).await {
            Ok(bitmap) => {
                *slot.borrow_mut() = Some(bitmap);
            }
            Err(e) => log::error!("background load error: {:?}", e),
        }
    });
}
