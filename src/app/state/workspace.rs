use iced::widget::text_editor;

/// A decoded image waiting for OCR, with its preview dimensions.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub struct WorkspaceState {
    pub(in crate::app) input: text_editor::Content,
    pub(in crate::app) sentences: Vec<String>,
    pub(in crate::app) image_path_input: String,
    pub(in crate::app) image: Option<LoadedImage>,
    pub(in crate::app) image_loading: bool,
}

impl WorkspaceState {
    pub(in crate::app) fn new() -> Self {
        Self {
            input: text_editor::Content::new(),
            sentences: Vec::new(),
            image_path_input: String::new(),
            image: None,
            image_loading: false,
        }
    }

    pub(in crate::app) fn input_text(&self) -> String {
        self.input.text()
    }

    pub(in crate::app) fn set_input_text(&mut self, text: &str) {
        self.input = text_editor::Content::with_text(text);
    }
}
