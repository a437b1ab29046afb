use egui::{ColorImage, TextureId, Vec2};

use crate::command::Command;
use crate::components::{ColorDialog, DialogResponse};
use crate::config::PaintConfig;
use crate::editor::Editor;
use crate::gallery::{GalleryStore, Thumbnail};
use crate::input::InputHandler;
use crate::panels;
use crate::texture_manager::TextureManager;

const TEXTURE_CACHE_SIZE: usize = 256;

/// A message shown under the controls until dismissed or replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

pub struct PaintApp {
    editor: Editor,
    input: InputHandler,
    textures: TextureManager,
    color_dialog: ColorDialog,
    thumbnails: Vec<Thumbnail>,
    /// Bumped on every gallery refresh so thumbnail textures are re-uploaded.
    gallery_version: u64,
    notice: Option<Notice>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig, gallery: GalleryStore) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_editor(Editor::new(config, gallery))
    }

    pub fn with_editor(editor: Editor) -> Self {
        let mut app = Self {
            editor,
            input: InputHandler::new(),
            textures: TextureManager::new(TEXTURE_CACHE_SIZE),
            color_dialog: ColorDialog::default(),
            thumbnails: Vec::new(),
            gallery_version: 0,
            notice: None,
        };
        app.refresh_gallery();
        app
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Runs a command and turns its result into a notice. Failures never
    /// propagate: the drawing in memory is kept and the app stays usable.
    pub fn execute(&mut self, command: Command) {
        let name = command.name();
        match self.editor.execute(command) {
            Ok(outcome) => {
                if let Some(text) = outcome.message() {
                    log::info!("{}", text);
                    self.notice = Some(Notice { text, is_error: false });
                }
                if outcome.changes_gallery() {
                    self.refresh_gallery();
                }
            }
            Err(err) => {
                log::error!("Command '{}' failed: {}", name, err);
                self.notice = Some(Notice {
                    text: format!("Could not {}: {}", name, err),
                    is_error: true,
                });
            }
        }
    }

    /// Re-reads the gallery directory and rebuilds the thumbnails.
    pub fn refresh_gallery(&mut self) {
        match self.editor.thumbnails() {
            Ok(thumbnails) => {
                for old in &self.thumbnails {
                    self.textures.invalidate(&thumbnail_texture_name(old));
                }
                self.thumbnails = thumbnails;
                self.gallery_version += 1;
                log::debug!("Gallery has {} drawings", self.thumbnails.len());
            }
            Err(err) => {
                log::error!("Failed to refresh gallery: {}", err);
                self.notice = Some(Notice {
                    text: format!("Could not read the gallery: {}", err),
                    is_error: true,
                });
            }
        }
    }

    pub fn has_thumbnails(&self) -> bool {
        !self.thumbnails.is_empty()
    }

    /// Uploads (or reuses) a texture per thumbnail.
    pub fn thumbnail_textures(&mut self, ctx: &egui::Context) -> Vec<(TextureId, Vec2, String)> {
        let mut textures = Vec::with_capacity(self.thumbnails.len());
        for thumbnail in &self.thumbnails {
            let image = &thumbnail.image;
            let size = egui::vec2(image.width() as f32, image.height() as f32);
            let result = self.textures.get_or_create_texture(
                &thumbnail_texture_name(thumbnail),
                self.gallery_version,
                || {
                    let size = [image.width() as usize, image.height() as usize];
                    Ok(ColorImage::from_rgb(size, image.as_raw()))
                },
                ctx,
            );
            match result {
                Ok(id) => textures.push((id, size, thumbnail.entry.file_name().to_owned())),
                Err(err) => log::warn!("No thumbnail for {}: {}", thumbnail.entry.file_name(), err),
            }
        }
        textures
    }

    pub fn open_color_dialog(&mut self) {
        let current = self.editor.brush().color();
        self.color_dialog.open(current);
    }

    pub fn show_color_dialog(&mut self, ctx: &egui::Context) -> DialogResponse {
        self.color_dialog.show(ctx)
    }

    pub fn handle_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        for event in self.input.process_input(ctx, canvas) {
            self.editor.handle_input(&event);
        }
    }

    pub fn paint_canvas(&mut self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        self.editor.surface().paint(painter, canvas_rect, &mut self.textures);
    }
}

fn thumbnail_texture_name(thumbnail: &Thumbnail) -> String {
    format!("thumbnail/{}", thumbnail.entry.file_name())
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.textures.begin_frame();

        // bottom panels stack upwards: gallery below the controls
        panels::gallery_panel(self, ctx);
        panels::controls_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
