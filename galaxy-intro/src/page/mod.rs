//! The HTML side of the intro: the flash overlay, the content container and
//! the canvas containers.
//!
//! The transition only produces [`PageCommand`]s. A [`PageSurface`] applies
//! them, against the DOM in the browser or as log lines natively.

use bevy::prelude::*;
use constants::page::{CONTENT_ID, COSMIC_CONTAINER_ID, FLASH_ID, GALAXY_CONTAINER_ID};
use thiserror::Error;

/// Browser DOM access for wasm builds.
#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Page elements the intro touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageElement {
    Flash,
    Content,
    GalaxyContainer,
    CosmicContainer,
}

impl PageElement {
    pub fn id(self) -> &'static str {
        match self {
            PageElement::Flash => FLASH_ID,
            PageElement::Content => CONTENT_ID,
            PageElement::GalaxyContainer => GALAXY_CONTAINER_ID,
            PageElement::CosmicContainer => COSMIC_CONTAINER_ID,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageCommand {
    SetOpacity { element: PageElement, opacity: f32 },
    Hide(PageElement),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{0} is not an HTML element")]
    NotHtml(&'static str),
    #[error("DOM call failed: {0}")]
    Js(String),
}

/// Something that can show the effect of a [`PageCommand`].
pub trait PageSurface: Send + Sync + 'static {
    fn set_opacity(&mut self, element: PageElement, opacity: f32) -> Result<(), PageError>;
    fn hide(&mut self, element: PageElement) -> Result<(), PageError>;
}

/// The page the intro reports to.
#[derive(Resource)]
pub struct Page(Box<dyn PageSurface>);

impl Page {
    pub fn new(surface: impl PageSurface) -> Self {
        Self(Box::new(surface))
    }

    pub fn apply(&mut self, command: PageCommand) -> Result<(), PageError> {
        match command {
            PageCommand::SetOpacity { element, opacity } => self.0.set_opacity(element, opacity),
            PageCommand::Hide(element) => self.0.hide(element),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(dom::DomPage)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(DetachedPage)
        }
    }
}

/// Native stand-in with no HTML behind it; commands are only logged.
#[cfg(not(target_arch = "wasm32"))]
pub struct DetachedPage;

#[cfg(not(target_arch = "wasm32"))]
impl PageSurface for DetachedPage {
    fn set_opacity(&mut self, element: PageElement, opacity: f32) -> Result<(), PageError> {
        debug!("#{} opacity -> {:.3}", element.id(), opacity);
        Ok(())
    }

    fn hide(&mut self, element: PageElement) -> Result<(), PageError> {
        info!("#{} hidden", element.id());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingPage;
    use super::*;

    #[test]
    fn page_routes_commands_to_surface() {
        let recording = RecordingPage::default();
        let mut page = Page::new(recording.clone());

        page.apply(PageCommand::Hide(PageElement::GalaxyContainer))
            .unwrap();
        page.apply(PageCommand::SetOpacity {
            element: PageElement::Content,
            opacity: 1.0,
        })
        .unwrap();

        assert_eq!(recording.commands().len(), 2);
        assert_eq!(
            recording.commands()[0],
            PageCommand::Hide(PageElement::GalaxyContainer)
        );
    }

    #[test]
    fn element_ids_match_the_page() {
        assert_eq!(PageElement::Flash.id(), "flash");
        assert_eq!(PageElement::Content.id(), "content");
        assert_eq!(PageElement::GalaxyContainer.id(), "galaxy-container");
        assert_eq!(PageElement::CosmicContainer.id(), "cosmic-3d");
    }
}
