//! Browser glue: DOM lookup, overlay panels and the image-load barrier

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlImageElement};

use super::Overlay;
use crate::error::StartupError;

/// Class that hides an overlay panel
const HIDDEN_CLASS: &str = "hidden";

pub fn document() -> Result<Document, StartupError> {
    web_sys::window()
        .ok_or(StartupError::NoWindow)?
        .document()
        .ok_or(StartupError::NoDocument)
}

/// Look up an element by id and cast it to the expected type
pub fn element_by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, StartupError> {
    document
        .get_element_by_id(id)
        .ok_or(StartupError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| StartupError::WrongElementType(id))
}

/// Resolve once the image has finished loading
async fn image_ready(image: &HtmlImageElement, id: &'static str) -> Result<(), StartupError> {
    if image.complete() {
        return Ok(());
    }
    let promise = Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    let result = JsFuture::from(promise).await;
    image.set_onload(None);
    image.set_onerror(None);
    result.map(|_| ()).map_err(|_| StartupError::ImageLoad(id))
}

/// Startup barrier: wait until every image reports loaded
pub async fn wait_for_images(images: &[(&HtmlImageElement, &'static str)]) -> Result<(), StartupError> {
    for &(image, id) in images {
        image_ready(image, id).await?;
        log::debug!("Image #{} ready", id);
    }
    Ok(())
}

/// Title and game-over panels declared in the page
pub struct DomOverlay {
    title: Element,
    game_over: Element,
    final_score: Element,
}

impl DomOverlay {
    pub fn new(document: &Document) -> Result<Self, StartupError> {
        Ok(Self {
            title: element_by_id(document, "title-screen")?,
            game_over: element_by_id(document, "game-over")?,
            final_score: element_by_id(document, "final-score")?,
        })
    }

    fn set_visible(element: &Element, visible: bool) {
        if let Err(e) = element
            .class_list()
            .toggle_with_force(HIDDEN_CLASS, !visible)
        {
            log::warn!("Failed to toggle #{} visibility: {:?}", element.id(), e);
        }
    }
}

impl Overlay for DomOverlay {
    fn set_title_visible(&mut self, visible: bool) {
        Self::set_visible(&self.title, visible);
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        Self::set_visible(&self.game_over, visible);
    }

    fn set_final_score(&mut self, text: &str) {
        if self.final_score.text_content().as_deref() != Some(text) {
            self.final_score.set_text_content(Some(text));
        }
    }
}
