use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::{PageElement, PageError, PageSurface};

/// Applies page commands to the live document. Elements are looked up on
/// every call, so nothing browser-side is held across frames.
pub struct DomPage;

impl PageSurface for DomPage {
    fn set_opacity(&mut self, element: PageElement, opacity: f32) -> Result<(), PageError> {
        html_element(element.id())?
            .style()
            .set_property("opacity", &opacity.to_string())
            .map_err(js_error)
    }

    fn hide(&mut self, element: PageElement) -> Result<(), PageError> {
        html_element(element.id())?
            .style()
            .set_property("display", "none")
            .map_err(js_error)
    }
}

/// Create `<canvas id=canvas_id>` inside the container, unless it already exists.
pub fn mount_canvas(container: PageElement, canvas_id: &'static str) -> Result<(), PageError> {
    let document = document()?;
    if document.get_element_by_id(canvas_id).is_some() {
        return Ok(());
    }

    let container_id = container.id();
    let parent = document
        .get_element_by_id(container_id)
        .ok_or(PageError::MissingElement(container_id))?;

    let canvas = document.create_element("canvas").map_err(js_error)?;
    canvas.set_id(canvas_id);
    parent.append_child(&canvas).map_err(js_error)?;
    Ok(())
}

fn document() -> Result<Document, PageError> {
    web_sys::window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)
}

fn html_element(id: &'static str) -> Result<HtmlElement, PageError> {
    document()?
        .get_element_by_id(id)
        .ok_or(PageError::MissingElement(id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::NotHtml(id))
}

fn js_error(error: JsValue) -> PageError {
    PageError::Js(format!("{error:?}"))
}
