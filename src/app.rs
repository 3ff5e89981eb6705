use crate::config::Config;
use crate::container::RootStore;
use crate::event_bus::AppEvent;
use crate::icons::Icons;
use crate::keymap::Action;
use crate::navigation::NavigationHost;
use crate::observable::{RedrawHandle, Subscription};
use crate::screens::{
    ScreenAction, ScreenContext, SpacedRepetitionScreenContainer,
    SpacedRepetitionScreenPassedProps,
};
use crate::services::JsonVocabularyRepository;
use crate::styles::ThemeType;
use crate::tui::Tui;
use anyhow::{bail, Context, Result};
use crossterm::event::{Event, KeyEventKind};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{error, info};

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub categories: Vec<String>,
    pub set: Option<String>,
    pub theme: Option<ThemeType>,
}

impl LaunchOptions {
    /// The configuration this session runs with.
    ///
    /// Overrides only apply to the returned copy, so they never reach the
    /// config file when `config` is saved later.
    pub fn session_config(&self, config: &Config) -> Result<Config> {
        let mut session = config.clone();
        if let Some(set) = &self.set {
            if !config.has_set(set) {
                bail!("Unknown set '{}'", set);
            }
            session.active_set = set.clone();
        }
        if let Some(theme) = self.theme {
            session.theme = theme;
        }
        Ok(session)
    }
}

/// Main application state
pub struct App {
    // Dropped first so screens unmount before the runtime shuts down
    host: NavigationHost,
    root_store: RootStore,
    /// Contents of the config file, without command-line overrides
    config: Config,
    config_path: PathBuf,
    tui: Tui,
    redraw: RedrawHandle,
    should_quit: Rc<Cell<bool>>,
    /// Set id waiting to be written to the config file
    pending_active_set: Rc<RefCell<Option<String>>>,
    _set_changed: Subscription,
    _runtime: Runtime,
}

impl App {
    pub fn new(options: LaunchOptions) -> Result<Self> {
        let config_path = crate::utils::get_config_path();
        let config = Config::load_or_create(&config_path)?;
        let session = options.session_config(&config)?;

        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let repository = Arc::new(JsonVocabularyRepository::new(&session.data_dir));
        let root_store =
            RootStore::from_config(&session, repository, runtime.handle().clone(), Icons::new());
        let mut host = NavigationHost::new(root_store.theme_store.clone(), root_store.commands.clone());
        let redraw = RedrawHandle::new();
        let tui = Tui::new()?;

        let pending_active_set = Rc::new(RefCell::new(None));
        let pending = Rc::clone(&pending_active_set);
        let set_changed = root_store.event_bus.subscribe(move |event| {
            let AppEvent::SetChanged(set) = event;
            *pending.borrow_mut() = Some(set.id.clone());
        });

        let should_quit = Rc::new(Cell::new(false));
        let quit = Rc::clone(&should_quit);
        let passed_props = SpacedRepetitionScreenPassedProps {
            selected_category_names: if options.categories.is_empty() {
                None
            } else {
                Some(options.categories)
            },
            on_close: Some(Box::new(move || quit.set(true))),
        };
        host.push_screen(SpacedRepetitionScreenContainer::new(
            root_store.props(passed_props),
            &redraw,
        ));
        host.process_commands();

        info!(
            "Started with set '{}' and {} theme",
            session.active_set,
            session.theme.name()
        );

        Ok(Self {
            host,
            root_store,
            config,
            config_path,
            tui,
            redraw,
            should_quit,
            pending_active_set,
            _set_changed: set_changed,
            _runtime: runtime,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            self.host.tick();
            self.persist_active_set();

            if self.should_quit.get() || self.host.is_empty() {
                break;
            }

            if self.redraw.take() {
                self.draw()?;
            }

            // Poll for events with 100ms timeout
            if let Some(event) = self.tui.poll_event(Duration::from_millis(100))? {
                self.handle_event(event)?;
            }
        }

        self.host.unmount_all();
        self.persist_active_set();
        self.tui.exit()?;
        info!("Exited");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let host = &mut self.host;
        let keymap = &self.config.keymap;
        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            host.render(frame, area, keymap);
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        self.redraw.request();

        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press
                && self.config.keymap.get_action(key.code, key.modifiers) == Some(Action::ToggleTheme)
            {
                self.toggle_theme();
                return Ok(());
            }
        }

        let ctx = ScreenContext::new(&self.config);
        if self.host.handle_event(event, &ctx)? == ScreenAction::Quit {
            self.should_quit.set(true);
        }
        Ok(())
    }

    fn toggle_theme(&mut self) {
        let theme = self.root_store.theme_store.theme_type().toggled();
        if !self.root_store.theme_store.set_theme(theme) {
            return;
        }
        info!("Switched to {} theme", theme.name());
        self.host.theme_changed(theme);

        self.config.theme = theme;
        if let Err(e) = self.config.save(&self.config_path) {
            error!("Failed to save theme: {:#}", e);
        }
    }

    fn persist_active_set(&mut self) {
        let Some(set_id) = self.pending_active_set.borrow_mut().take() else {
            return;
        };
        self.config.active_set = set_id;
        if let Err(e) = self.config.save(&self.config_path) {
            error!("Failed to save active set: {:#}", e);
        }
    }
}
