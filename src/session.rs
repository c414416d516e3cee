//! The single owned controller behind the UI.
//!
//! A `Session` owns the catalog, the display list, the configuration and
//! the viewport controller. The UI shell calls `add`/`reset` on input,
//! `frame` once per paint, and reads the scale and count readouts.

use crate::catalog::CatalogStore;
use crate::config::ComparatorConfig;
use crate::display_list::{DisplayList, DisplayedInstance};
use crate::error::{ComparatorError, Result};
use crate::layout::{plan_frame, Layout};
use crate::scale::ScaleReadout;
use crate::viewport::ViewportController;

pub struct Session {
    catalog: CatalogStore,
    list: DisplayList,
    config: ComparatorConfig,
    viewport: ViewportController,
    last_scale: f64,
}

impl Session {
    /// Validates the config and shows the default body.
    pub fn start(catalog: CatalogStore, config: ComparatorConfig) -> Result<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ComparatorError::Catalog("catalog has no entries".into()));
        }
        if !catalog.contains(&config.default_body) {
            return Err(ComparatorError::Config(format!(
                "default body {} is not in the catalog",
                config.default_body
            )));
        }
        let mut session = Self {
            catalog,
            list: DisplayList::new(),
            viewport: ViewportController::new(config.drag_speed, config.scroll_duration),
            config,
            last_scale: 0.0,
        };
        session.reset()?;
        log::info!(
            "session started with {} catalog entries, home body {}",
            session.catalog.len(),
            session.config.default_body
        );
        Ok(session)
    }

    /// Cancels any scroll still in flight. Called when the window closes.
    pub fn teardown(&mut self) {
        self.viewport.reset();
        log::info!("session closed with {} bodies on display", self.list.len());
    }

    pub fn reset(&mut self) -> Result<()> {
        self.list.reset_to(&self.catalog, &self.config.default_body)?;
        self.viewport.reset();
        log::debug!("display reset to {}", self.config.default_body);
        Ok(())
    }

    /// Appends `key` and schedules centering on the new body.
    pub fn add(&mut self, key: &str) -> Result<DisplayedInstance> {
        let instance = match self.list.append(&self.catalog, key) {
            Ok(instance) => instance.clone(),
            Err(e) => {
                log::warn!("add rejected: {e}");
                return Err(e);
            }
        };
        self.viewport.schedule_focus(instance.sequence_id);
        log::debug!(
            "added {} as #{} ({} on display)",
            instance.catalog_key,
            instance.sequence_id,
            self.list.len()
        );
        Ok(instance)
    }

    /// Layout for a viewport of the given height, or `None` when it is
    /// too small to draw. Updates the scale readout.
    pub fn frame(&mut self, viewport_height: f64) -> Option<Layout> {
        match plan_frame(self.list.all(), viewport_height, self.config.horizontal_gap) {
            Ok(layout) => {
                self.last_scale = layout.as_ref().map_or(0.0, |l| l.scale);
                layout
            }
            Err(e) => {
                log::error!("layout failed: {e}");
                self.last_scale = 0.0;
                None
            }
        }
    }

    pub fn scale_readout(&self) -> ScaleReadout {
        ScaleReadout::from_scale(self.last_scale)
    }

    pub fn count(&self) -> usize {
        self.list.len()
    }

    pub fn instances(&self) -> &[DisplayedInstance] {
        self.list.all()
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }
}
