use super::super::state::{App, LoadedImage, Severity};
use super::Effect;
use std::path::Path;
use tracing::{info, warn};

impl App {
    pub(super) fn handle_image_path_changed(&mut self, path: String) {
        self.workspace.image_path_input = path;
    }

    pub(super) fn handle_load_image(&mut self, effects: &mut Vec<Effect>) {
        if self.workspace.image_loading {
            return;
        }
        let path = self.workspace.image_path_input.trim().to_string();
        if path.is_empty() {
            self.set_status("Error: No image selected", Severity::Error);
            return;
        }
        self.workspace.image_loading = true;
        info!(%path, "Loading image for OCR preview");
        effects.push(Effect::LoadImage { path });
    }

    pub(super) fn handle_image_loaded(
        &mut self,
        path: String,
        result: Result<LoadedImage, String>,
    ) {
        self.workspace.image_loading = false;
        match result {
            Ok(image) => {
                info!(
                    %path,
                    width = image.width,
                    height = image.height,
                    "Image preview ready"
                );
                self.set_status(
                    format!("Ready | Image loaded ({}x{})", image.width, image.height),
                    Severity::Success,
                );
                self.workspace.image = Some(image);
            }
            Err(err) => {
                warn!(%path, "Image load failed: {err}");
                self.set_status(
                    format!("Error: Failed to load image - {err}"),
                    Severity::Error,
                );
            }
        }
    }

    pub(super) fn handle_run_ocr(&mut self, effects: &mut Vec<Effect>) {
        if self.busy() {
            self.set_status(
                "Processing: Please wait for tasks to finish...",
                Severity::Processing,
            );
            return;
        }
        let Some(image) = &self.workspace.image else {
            self.set_status("Error: No image selected", Severity::Error);
            return;
        };

        let bytes = image.bytes.clone();
        let filename = Path::new(self.workspace.image_path_input.trim())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.png".to_string());
        self.set_status("Processing: Performing OCR on image...", Severity::Processing);
        effects.push(Effect::RunOcr {
            bytes,
            filename,
        });
    }

    pub(super) fn handle_ocr_finished(&mut self, result: Result<String, String>) {
        match result {
            Ok(text) => {
                info!(chars = text.len(), "OCR text imported into editor");
                self.workspace.set_input_text(&text);
                self.set_status("Success: OCR completed, text imported", Severity::Success);
            }
            Err(err) => {
                self.set_status(
                    format!("Error: OCR processing failed - {err}"),
                    Severity::Error,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::state::{test_app, LoadedImage};
    use super::super::Effect;

    #[test]
    fn ocr_without_image_reports_error() {
        let mut app = test_app();
        let mut effects = Vec::new();
        app.handle_run_ocr(&mut effects);
        assert!(effects.is_empty());
        assert_eq!(app.status.message, "Error: No image selected");
    }

    #[test]
    fn ocr_uploads_loaded_image_with_its_filename() {
        let mut app = test_app();
        app.workspace.image_path_input = "/tmp/shots/receipt.png".to_string();
        app.workspace.image = Some(LoadedImage {
            bytes: vec![1, 2, 3],
            width: 10,
            height: 20,
        });

        let mut effects = Vec::new();
        app.handle_run_ocr(&mut effects);
        assert!(matches!(
            effects.as_slice(),
            [Effect::RunOcr { filename, .. }] if filename == "receipt.png"
        ));
        assert_eq!(app.status.message, "Processing: Performing OCR on image...");
    }

    #[test]
    fn ocr_success_imports_text_into_editor() {
        let mut app = test_app();
        app.handle_ocr_finished(Ok("你好。 世界。".to_string()));
        assert_eq!(app.workspace.input_text().trim(), "你好。 世界。");
        assert_eq!(app.status.message, "Success: OCR completed, text imported");
    }

    #[test]
    fn ocr_failure_surfaces_message() {
        let mut app = test_app();
        app.handle_ocr_finished(Err("no text detected".to_string()));
        assert_eq!(
            app.status.message,
            "Error: OCR processing failed - no text detected"
        );
    }

    #[test]
    fn image_load_failure_clears_loading_flag() {
        let mut app = test_app();
        app.workspace.image_loading = true;
        app.handle_image_loaded("/tmp/x.png".into(), Err("not an image".into()));
        assert!(!app.workspace.image_loading);
        assert_eq!(
            app.status.message,
            "Error: Failed to load image - not an image"
        );
    }
}
