//! Spaced-repetition screen workflows.
//!
//! The first half drives the container with recording delegates to check the
//! lifecycle contract. The second half runs the default factory against JSON
//! vocabulary files, a tokio runtime and a real navigation host.

mod common;

use chrono::{Duration as ChronoDuration, Utc};
use common::{key, TestEnv};
use crossterm::event::{
    Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use lingodeck::config::Config;
use lingodeck::container::RootStore;
use lingodeck::delegates::{
    NavigatorDelegate, SetSelectionMenuDelegate, SpacedRepetitionScreenDelegate,
};
use lingodeck::factories::SpacedRepetitionScreenFactory;
use lingodeck::icons::{IconSet, Icons, Image};
use lingodeck::navigation::{NavigationHost, OptionsPatch, ScreenOptions, TouchableTopBar};
use lingodeck::observable::{Observable, RedrawHandle};
use lingodeck::screens::{
    RenderContext, Screen, ScreenAction, ScreenContext, SpacedRepetitionScreenContainer,
    SpacedRepetitionScreenPassedProps, SCREEN_DARK_STYLES_ONLY, SCREEN_FULL_DARK_STYLES,
    SCREEN_FULL_LIGHT_STYLES, SCREEN_LIGHT_STYLES_ONLY,
};
use lingodeck::services::{
    DueAndNewCounts, InMemoryVocabularyRepository, Vocabulary, VocabularyStatus,
};
use lingodeck::state::{CountsState, ObservableSpacedRepetitionScreen};
use lingodeck::styles::{Theme, ThemeType};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

// ==================== Recording delegates ====================

#[derive(Default)]
struct Calls {
    auto_update: Cell<usize>,
    show_sets: Cell<usize>,
    refresh: Cell<usize>,
    clear: Cell<usize>,
    dismiss: Cell<usize>,
    closes: Cell<usize>,
    merges: RefCell<Vec<OptionsPatch>>,
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

struct RecordingSetSelection {
    calls: Rc<Calls>,
}

impl SetSelectionMenuDelegate for RecordingSetSelection {
    fn current_set_name(&self) -> String {
        "Spanish".to_string()
    }

    fn current_flag_icon(&self) -> Option<Image> {
        Some(Image::new("[ES]", None))
    }

    fn show_active_sets_for_set_selection(&self) {
        bump(&self.calls.show_sets);
    }

    fn auto_update_subtitle_on_set_change(&mut self, _top_bar: Observable<TouchableTopBar>) {
        bump(&self.calls.auto_update);
    }
}

struct RecordingNavigator {
    calls: Rc<Calls>,
}

impl NavigatorDelegate for RecordingNavigator {
    fn dismiss_screen(&self) {
        bump(&self.calls.dismiss);
    }

    fn merge_options(&self, patch: OptionsPatch) {
        self.calls.merges.borrow_mut().push(patch);
    }

    fn show_overlay(&self, _screen: Box<dyn Screen>, _options: ScreenOptions) {}
}

struct RecordingScreenDelegate {
    calls: Rc<Calls>,
    counts: Observable<CountsState>,
}

impl SpacedRepetitionScreenDelegate for RecordingScreenDelegate {
    fn refresh_due_and_new_counts(&self) {
        bump(&self.calls.refresh);
        self.counts.set(CountsState::Loading);
    }

    fn clear_due_and_new_counts(&self) {
        bump(&self.calls.clear);
        self.counts.set(CountsState::NotLoaded);
    }

    fn poll_updates(&self) -> bool {
        false
    }

    fn counts(&self) -> CountsState {
        self.counts.get().clone()
    }
}

struct RecordingFactory {
    calls: Rc<Calls>,
}

impl SpacedRepetitionScreenFactory for RecordingFactory {
    fn create_set_selection_menu_delegate(&self) -> Box<dyn SetSelectionMenuDelegate> {
        Box::new(RecordingSetSelection {
            calls: Rc::clone(&self.calls),
        })
    }

    fn create_navigator_delegate(&self) -> Box<dyn NavigatorDelegate> {
        Box::new(RecordingNavigator {
            calls: Rc::clone(&self.calls),
        })
    }

    fn create_screen_delegate(
        &self,
        observable_screen: &ObservableSpacedRepetitionScreen,
    ) -> Box<dyn SpacedRepetitionScreenDelegate> {
        Box::new(RecordingScreenDelegate {
            calls: Rc::clone(&self.calls),
            counts: observable_screen.counts.clone(),
        })
    }
}

struct Fixture {
    root_store: RootStore,
    calls: Rc<Calls>,
    redraw: RedrawHandle,
    _runtime: Runtime,
}

impl Fixture {
    fn new() -> Self {
        let runtime = Runtime::new().unwrap();
        let root_store = RootStore::from_config(
            &Config::default(),
            Arc::new(InMemoryVocabularyRepository::new()),
            runtime.handle().clone(),
            Icons::with_icon_set(IconSet::Ascii),
        );
        Self {
            root_store,
            calls: Rc::new(Calls::default()),
            redraw: RedrawHandle::new(),
            _runtime: runtime,
        }
    }

    fn container(
        &self,
        categories: Option<Vec<String>>,
        with_on_close: bool,
    ) -> SpacedRepetitionScreenContainer {
        let on_close: Option<Box<dyn FnOnce()>> = if with_on_close {
            let calls = Rc::clone(&self.calls);
            Some(Box::new(move || bump(&calls.closes)))
        } else {
            None
        };
        let props = self.root_store.props(SpacedRepetitionScreenPassedProps {
            selected_category_names: categories,
            on_close,
        });
        let factory = RecordingFactory {
            calls: Rc::clone(&self.calls),
        };
        SpacedRepetitionScreenContainer::with_factory(props, &factory, &self.redraw)
    }
}

// ==================== Lifecycle contract ====================

#[test]
fn test_options_follow_theme() {
    assert_eq!(
        SpacedRepetitionScreenContainer::options(ThemeType::Light),
        SCREEN_FULL_LIGHT_STYLES
    );
    assert_eq!(
        SpacedRepetitionScreenContainer::options(ThemeType::Dark),
        SCREEN_FULL_DARK_STYLES
    );
}

#[test]
fn test_construction_builds_top_bar_from_active_set() {
    let fixture = Fixture::new();
    let container = fixture.container(None, false);

    let screen = container.observable_screen();
    let bar = screen.top_bar.get();
    assert_eq!(bar.title, "Spanish");
    assert_eq!(bar.icon, Some(Image::new("[ES]", None)));
    assert!(bar.right_button.is_none());
    assert_eq!(*screen.counts.get(), CountsState::NotLoaded);

    // Nothing runs before the host mounts the screen
    assert_eq!(fixture.calls.auto_update.get(), 0);
    assert_eq!(fixture.calls.refresh.get(), 0);
}

#[test]
fn test_mount_subscribes_to_set_changes_once() {
    let fixture = Fixture::new();
    let mut container = fixture.container(None, false);

    container.on_mount().unwrap();
    container.on_mount().unwrap();

    assert_eq!(fixture.calls.auto_update.get(), 1);
}

#[test]
fn test_every_appearance_refreshes_counts() {
    let fixture = Fixture::new();
    let mut container = fixture.container(None, false);

    container.on_mount().unwrap();
    container.on_appear().unwrap();
    assert_eq!(fixture.calls.refresh.get(), 1);

    container.on_appear().unwrap();
    container.on_appear().unwrap();
    assert_eq!(fixture.calls.refresh.get(), 3);
    assert_eq!(*container.observable_screen().counts.get(), CountsState::Loading);
}

#[test]
fn test_unmount_clears_counts_then_closes_once() {
    let fixture = Fixture::new();
    let mut container = fixture.container(None, true);

    container.on_mount().unwrap();
    container.on_appear().unwrap();
    container.on_unmount().unwrap();

    assert_eq!(fixture.calls.clear.get(), 1);
    assert_eq!(fixture.calls.closes.get(), 1);
    assert_eq!(*container.observable_screen().counts.get(), CountsState::NotLoaded);

    // Dropping after an explicit unmount does not repeat either step
    drop(container);
    assert_eq!(fixture.calls.clear.get(), 1);
    assert_eq!(fixture.calls.closes.get(), 1);
}

#[test]
fn test_unmount_without_on_close() {
    let fixture = Fixture::new();
    let mut container = fixture.container(None, false);

    container.on_unmount().unwrap();

    assert_eq!(fixture.calls.clear.get(), 1);
    assert_eq!(fixture.calls.closes.get(), 0);
}

#[test]
fn test_drop_unmounts_a_screen_never_unmounted() {
    let fixture = Fixture::new();
    let container = fixture.container(None, true);

    drop(container);

    assert_eq!(fixture.calls.clear.get(), 1);
    assert_eq!(fixture.calls.closes.get(), 1);
}

#[test]
fn test_theme_change_merges_style_patch_once() {
    let fixture = Fixture::new();
    let mut container = fixture.container(None, false);

    container.on_theme_changed(ThemeType::Light).unwrap();
    assert_eq!(*fixture.calls.merges.borrow(), vec![SCREEN_LIGHT_STYLES_ONLY]);

    container.on_theme_changed(ThemeType::Dark).unwrap();
    assert_eq!(
        *fixture.calls.merges.borrow(),
        vec![SCREEN_LIGHT_STYLES_ONLY, SCREEN_DARK_STYLES_ONLY]
    );
}

#[test]
fn test_selected_categories_keep_caller_order() {
    let fixture = Fixture::new();
    let categories = vec!["Travel".to_string(), "Food".to_string(), "Verbs".to_string()];
    let container = fixture.container(Some(categories.clone()), false);

    assert_eq!(
        *container.observable_screen().selected_categories.get(),
        Some(categories)
    );
}

#[test]
fn test_top_bar_keys_route_to_delegates() {
    let fixture = Fixture::new();
    let mut container = fixture.container(None, false);
    let config = Config::default();
    let ctx = ScreenContext::new(&config);

    container.handle_event(key(KeyCode::Char('s')), &ctx).unwrap();
    assert_eq!(fixture.calls.show_sets.get(), 1);

    container.handle_event(key(KeyCode::Esc), &ctx).unwrap();
    assert_eq!(fixture.calls.dismiss.get(), 1);

    container.handle_event(key(KeyCode::Char('r')), &ctx).unwrap();
    assert_eq!(fixture.calls.refresh.get(), 1);

    let action = container.handle_event(key(KeyCode::Char('q')), &ctx).unwrap();
    assert_eq!(action, ScreenAction::Quit);
}

fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Render the container once and return the buffer it drew.
fn render_container(container: &mut SpacedRepetitionScreenContainer, config: &Config) -> Buffer {
    let theme = Theme::new(ThemeType::Dark);
    let options = SpacedRepetitionScreenContainer::options(ThemeType::Dark);
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            let ctx = RenderContext::new(&theme, &options, &config.keymap);
            container.render(frame, area, &ctx).unwrap();
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Column and row where `needle` starts in the rendered buffer.
fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    (0..buffer.area.height).find_map(|y| {
        let row: Vec<String> = (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect();
        let line = row.concat();
        let byte_index = line.find(needle)?;
        let column = line[..byte_index].chars().count();
        Some((column as u16, y))
    })
}

#[test]
fn test_clicks_on_top_bar_targets_route_to_delegates() {
    let fixture = Fixture::new();
    let mut container = fixture.container(None, false);
    let config = Config::default();
    let ctx = ScreenContext::new(&config);

    let buffer = render_container(&mut container, &config);
    let (title_x, title_y) = find_text(&buffer, "Spanish").expect("title is drawn");

    // Somewhere in the counts panel, away from every touch target
    container.handle_event(left_click(40, 10), &ctx).unwrap();
    assert_eq!(fixture.calls.dismiss.get(), 0);
    assert_eq!(fixture.calls.show_sets.get(), 0);

    // The back button starts at the left edge of the bar row
    container.handle_event(left_click(0, title_y), &ctx).unwrap();
    assert_eq!(fixture.calls.dismiss.get(), 1);
    assert_eq!(fixture.calls.show_sets.get(), 0);

    container.handle_event(left_click(title_x, title_y), &ctx).unwrap();
    assert_eq!(fixture.calls.dismiss.get(), 1);
    assert_eq!(fixture.calls.show_sets.get(), 1);
}

#[test]
fn test_clicks_before_first_render_are_ignored() {
    let fixture = Fixture::new();
    let mut container = fixture.container(None, false);
    let config = Config::default();
    let ctx = ScreenContext::new(&config);

    container.handle_event(left_click(0, 0), &ctx).unwrap();

    assert_eq!(fixture.calls.dismiss.get(), 0);
    assert_eq!(fixture.calls.show_sets.get(), 0);
}

#[test]
fn test_host_drives_mount_then_appear() {
    let fixture = Fixture::new();
    let mut host = NavigationHost::new(
        fixture.root_store.theme_store.clone(),
        fixture.root_store.commands.clone(),
    );

    host.push_screen(fixture.container(None, true));
    assert_eq!(fixture.calls.auto_update.get(), 1);
    assert_eq!(fixture.calls.refresh.get(), 1);

    drop(host);
    assert_eq!(fixture.calls.clear.get(), 1);
    assert_eq!(fixture.calls.closes.get(), 1);
}

// ==================== Default factory end to end ====================

fn spanish_vocabulary() -> Vec<Vocabulary> {
    let now = Utc::now();
    vec![
        Vocabulary::new("1", "hola"),
        Vocabulary::new("2", "manzana").with_category("Food"),
        Vocabulary::new("3", "tren")
            .with_category("Travel")
            .with_level(1, Some(now - ChronoDuration::days(2))),
        Vocabulary::new("4", "correr").with_level(3, Some(now - ChronoDuration::hours(1))),
        Vocabulary::new("5", "viejo").with_status(VocabularyStatus::Archived),
    ]
}

fn japanese_vocabulary() -> Vec<Vocabulary> {
    vec![
        Vocabulary::new("1", "ねこ"),
        Vocabulary::new("2", "いぬ"),
        Vocabulary::new("3", "さかな").with_category("Food"),
    ]
}

fn language_env() -> TestEnv {
    TestEnv::new()
        .with_set("es", "Spanish", "es")
        .with_set("ja", "Japanese", "ja")
        .with_active_set("es")
        .with_vocabulary("es", spanish_vocabulary())
        .with_vocabulary("ja", japanese_vocabulary())
        .build()
        .unwrap()
}

/// Tick the host until `done` holds or a few seconds pass.
fn tick_until(host: &mut NavigationHost, done: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        host.tick();
        if done() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

fn counts_of(screen: &ObservableSpacedRepetitionScreen) -> Option<DueAndNewCounts> {
    screen.counts.get().counts()
}

struct Session {
    host: NavigationHost,
    root_store: RootStore,
    screen: ObservableSpacedRepetitionScreen,
    config: Config,
    _runtime: Runtime,
}

fn open_session(env: &TestEnv, categories: Option<Vec<String>>) -> Session {
    let runtime = Runtime::new().unwrap();
    let root_store = env.root_store(runtime.handle().clone()).unwrap();
    let mut host = NavigationHost::new(root_store.theme_store.clone(), root_store.commands.clone());
    let container = SpacedRepetitionScreenContainer::new(
        root_store.props(SpacedRepetitionScreenPassedProps {
            selected_category_names: categories,
            on_close: None,
        }),
        &RedrawHandle::new(),
    );
    let screen = container.observable_screen().clone();
    host.push_screen(container);

    Session {
        host,
        root_store,
        screen,
        config: env.load_config().unwrap(),
        _runtime: runtime,
    }
}

#[test]
fn test_counts_load_for_active_set() {
    let env = language_env();
    let mut session = open_session(&env, None);
    assert!(session.screen.counts.get().is_loading());

    let screen = session.screen.clone();
    assert!(tick_until(&mut session.host, || counts_of(&screen).is_some()));
    assert_eq!(
        counts_of(&session.screen),
        Some(DueAndNewCounts { due: 1, new: 2 })
    );
}

#[test]
fn test_counts_respect_selected_categories() {
    let env = language_env();
    let mut session = open_session(&env, Some(vec!["Food".to_string()]));

    let screen = session.screen.clone();
    assert!(tick_until(&mut session.host, || counts_of(&screen).is_some()));
    assert_eq!(
        counts_of(&session.screen),
        Some(DueAndNewCounts { due: 0, new: 1 })
    );
}

#[test]
fn test_unreadable_vocabulary_reports_failure() {
    let env = language_env();
    env.write_raw_vocabulary("es", "{ not json").unwrap();
    let mut session = open_session(&env, None);

    let screen = session.screen.clone();
    assert!(tick_until(&mut session.host, || matches!(
        *screen.counts.get(),
        CountsState::Failed(_)
    )));
    match &*session.screen.counts.get() {
        CountsState::Failed(message) => assert!(message.contains("Failed to parse vocabulary file")),
        other => panic!("expected failure, got {:?}", other),
    };
}

#[test]
fn test_switching_set_updates_title_and_recounts() {
    let env = language_env();
    let mut session = open_session(&env, None);
    let screen = session.screen.clone();
    assert!(tick_until(&mut session.host, || counts_of(&screen).is_some()));
    let container_id = session.screen.component_id;

    let ctx = ScreenContext::new(&session.config);
    session.host.handle_event(key(KeyCode::Char('s')), &ctx).unwrap();
    assert_eq!(session.host.len(), 2);
    assert_ne!(session.host.top_id(), Some(container_id));

    session.host.handle_event(key(KeyCode::Down), &ctx).unwrap();
    session.host.handle_event(key(KeyCode::Enter), &ctx).unwrap();

    // The menu is gone and the screen underneath appeared again
    assert_eq!(session.host.len(), 1);
    assert_eq!(session.host.top_id(), Some(container_id));
    assert_eq!(session.root_store.set_store.current_set_id().as_deref(), Some("ja"));
    {
        let bar = session.screen.top_bar.get();
        assert_eq!(bar.title, "Japanese");
        assert_eq!(bar.icon.as_ref().map(|i| i.glyph.as_str()), Some("[JA]"));
    }
    assert!(session.screen.counts.get().is_loading());

    assert!(tick_until(&mut session.host, || counts_of(&screen).is_some()));
    assert_eq!(
        counts_of(&session.screen),
        Some(DueAndNewCounts { due: 0, new: 3 })
    );
}

#[test]
fn test_cancelling_set_menu_keeps_active_set() {
    let env = language_env();
    let mut session = open_session(&env, None);
    let ctx = ScreenContext::new(&session.config);

    session.host.handle_event(key(KeyCode::Char('s')), &ctx).unwrap();
    session.host.handle_event(key(KeyCode::Esc), &ctx).unwrap();

    assert_eq!(session.host.len(), 1);
    assert_eq!(session.root_store.set_store.current_set_id().as_deref(), Some("es"));
    assert_eq!(session.screen.top_bar.get().title, "Spanish");
}

#[test]
fn test_back_button_dismisses_and_clears_counts() {
    let env = language_env();
    let mut session = open_session(&env, None);
    let screen = session.screen.clone();
    assert!(tick_until(&mut session.host, || counts_of(&screen).is_some()));

    let ctx = ScreenContext::new(&session.config);
    session.host.handle_event(key(KeyCode::Esc), &ctx).unwrap();

    assert!(session.host.is_empty());
    assert_eq!(*session.screen.counts.get(), CountsState::NotLoaded);
}

#[test]
fn test_theme_change_updates_host_options() {
    let env = language_env();
    let mut session = open_session(&env, None);
    let id = session.screen.component_id;
    assert_eq!(session.host.options_of(id), Some(SCREEN_FULL_DARK_STYLES));

    session.root_store.theme_store.set_theme(ThemeType::Light);
    session.host.theme_changed(ThemeType::Light);
    assert_eq!(session.host.options_of(id), Some(SCREEN_FULL_LIGHT_STYLES));

    session.root_store.theme_store.set_theme(ThemeType::Dark);
    session.host.theme_changed(ThemeType::Dark);
    assert_eq!(session.host.options_of(id), Some(SCREEN_FULL_DARK_STYLES));
}

#[test]
fn test_render_shows_set_and_counts() {
    let env = language_env();
    let mut session = open_session(&env, None);
    let screen = session.screen.clone();
    assert!(tick_until(&mut session.host, || counts_of(&screen).is_some()));

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let keymap = session.config.keymap.clone();
    terminal
        .draw(|frame| {
            let area = frame.area();
            session.host.render(frame, area, &keymap);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let text: String = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert!(text.contains("Spanish"));
    assert!(text.contains("Due: "));
    assert!(text.contains("All categories"));
}

#[test]
fn test_cli_context_reads_overridden_config_dir() {
    use lingodeck::cli::CliContext;

    let env = TestEnv::new()
        .with_set("es", "Spanish", "es")
        .with_vocabulary("es", spanish_vocabulary())
        .with_env_override()
        .build()
        .unwrap();

    let ctx = CliContext::load().unwrap();
    assert_eq!(ctx.config_path, env.config_path());
    assert_eq!(ctx.resolve_set(None).unwrap().name, "Spanish");
    assert!(ctx.resolve_set(Some("fr")).is_err());
    assert_eq!(ctx.load_vocabulary("es").unwrap().len(), 5);
}
