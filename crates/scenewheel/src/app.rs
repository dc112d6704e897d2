use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::menu;
use crate::scenes::{Catalog, Workspace};
use async_channel::Receiver;
use radial::{Engine, Response};
use std::cell::RefCell;
use std::rc::Rc;

/// Owns the menu engine and everything its actions touch. Lives on one thread.
pub struct AppModel {
    pub engine: Engine,
    pub workspace: Rc<RefCell<Workspace>>,
    pub catalog: Catalog,
    pub config: Config,
}

impl AppModel {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let workspace = Rc::new(RefCell::new(Workspace::new()));
        let tree = menu::build_menu(&catalog.scenes(), &workspace, &config);
        let mut engine = Engine::new(config.menu_settings(), tree);
        engine.start();

        Self {
            engine,
            workspace,
            catalog,
            config,
        }
    }

    fn rebuild_menu(&mut self) -> Response {
        let tree = menu::build_menu(&self.catalog.scenes(), &self.workspace, &self.config);
        self.engine.rebuild_tree(tree)
    }

    pub fn update(&mut self, event: AppEvent) -> Response {
        match event {
            AppEvent::Input(input) => self.engine.handle_event(&input),
            AppEvent::Show => self.engine.activate(),
            AppEvent::Hide => self.engine.deactivate(),
            AppEvent::SurfaceChanged => self.engine.surface_changed(),
            AppEvent::Rescan => {
                self.catalog.refresh();
                self.rebuild_menu()
            }
            AppEvent::AssetsChanged => self.rebuild_menu(),
            AppEvent::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    log::info!("Configuration reloaded");
                    self.apply_config(new_config)
                }
                Err(e) => {
                    log::error!("Failed to reload config: {}", e);
                    Response::default()
                }
            },
        }
    }

    /// The assets directory is fixed for the process; other settings apply immediately.
    pub fn apply_config(&mut self, new_config: Config) -> Response {
        if new_config.assets_dir != self.config.assets_dir {
            log::warn!("Assets directory changes take effect after a restart");
        }
        self.config = new_config;
        let settings = self.engine.set_settings(self.config.menu_settings());
        let rebuilt = self.rebuild_menu();
        Response {
            redraw: settings.redraw || rebuilt.redraw,
            relayout: settings.relayout || rebuilt.relayout,
            ..rebuilt
        }
    }

    fn present(&self, response: &Response) {
        if response.redraw && self.engine.is_open() {
            log::info!("\n{}", menu::render(&self.engine).trim_end());
        }
        if response.hidden {
            log::info!("Menu hidden");
        }
    }

    /// Processes events until every sender is gone.
    pub fn run(mut self, rx: Receiver<AppEvent>) {
        while let Ok(event) = rx.recv_blocking() {
            log::trace!("Event: {:?}", event);
            let response = self.update(event);
            self.present(&response);
        }
        self.engine.stop();
    }
}
