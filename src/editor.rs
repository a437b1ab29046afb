use crate::brush::BrushState;
use crate::command::{Command, CommandOutcome};
use crate::config::PaintConfig;
use crate::error::PaintResult;
use crate::gallery::{GalleryStore, Thumbnail};
use crate::input::{InputEvent, InputRouter};
use crate::raster::RasterModel;
use crate::surface::{CanvasSurface, DisplaySurface};

/// The UI-independent core: brush and stroke routing, the raster, the on-screen
/// shapes and the gallery. Every button goes through [`Editor::execute`].
pub struct Editor {
    config: PaintConfig,
    router: InputRouter,
    raster: RasterModel,
    surface: CanvasSurface,
    gallery: GalleryStore,
}

impl Editor {
    pub fn new(config: PaintConfig, gallery: GalleryStore) -> Self {
        Self {
            router: InputRouter::new(BrushState::from_config(&config)),
            raster: RasterModel::new(config.canvas_width, config.canvas_height, config.background),
            surface: CanvasSurface::new(config.background),
            gallery,
            config,
        }
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn brush(&self) -> &BrushState {
        self.router.brush()
    }

    pub fn raster(&self) -> &RasterModel {
        &self.raster
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn gallery(&self) -> &GalleryStore {
        &self.gallery
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        self.router.route_event(event, &mut self.surface, &mut self.raster);
    }

    pub fn execute(&mut self, command: Command) -> PaintResult<CommandOutcome> {
        log::debug!("Executing {}", command.name());
        match command {
            Command::SetBrushSize(size) => {
                self.router.brush_mut().set_size(size);
                Ok(CommandOutcome::Done)
            }
            Command::ChooseColor(choice) => {
                self.router.brush_mut().choose_color(choice);
                Ok(CommandOutcome::Done)
            }
            Command::ToggleEraser => {
                let (background, ink) = (self.config.background, self.config.default_color);
                self.router.brush_mut().toggle_eraser(background, ink);
                log::info!("Eraser {}", if self.brush().is_eraser() { "on" } else { "off" });
                Ok(CommandOutcome::Done)
            }
            Command::Clear => {
                self.clear();
                Ok(CommandOutcome::Done)
            }
            Command::Save => {
                let entry = self.gallery.save(self.raster.snapshot())?;
                Ok(CommandOutcome::Saved(entry))
            }
            Command::Load => self.load_latest(),
            Command::Delete => match self.gallery.delete_latest()? {
                Some(entry) => Ok(CommandOutcome::Deleted(entry)),
                None => Ok(CommandOutcome::GalleryEmpty),
            },
        }
    }

    fn clear(&mut self) {
        self.raster.clear();
        self.surface.delete_all();
        self.router.forget_preview();
    }

    /// The raster is only replaced once the file decoded successfully.
    fn load_latest(&mut self) -> PaintResult<CommandOutcome> {
        let Some((entry, image)) = self.gallery.load_latest()? else {
            return Ok(CommandOutcome::GalleryEmpty);
        };
        self.surface.delete_all();
        self.surface.blit(&image);
        self.router.forget_preview();
        self.raster.load(image);
        Ok(CommandOutcome::Loaded(entry))
    }

    pub fn thumbnails(&self) -> PaintResult<Vec<Thumbnail>> {
        Ok(self.gallery.thumbnails(self.config.thumbnail_size)?)
    }
}
