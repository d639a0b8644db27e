use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    prelude::*,
    widgets::{StatefulWidget, Widget},
};
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::mpsc;
use vapour_client::{
    ArchiveRecord, Collection, GameRecord, LibraryRecord, RecordKind, SizeDisplay,
};

use super::components::{ArchiveAction, GameDetail, TabBar, TabItem};
use super::views::{ArchivesView, CollectionViewState, LibrariesView};
use super::{AppEvent, Fetch, ManagerEvent, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tab {
    Libraries,
    Archives,
}

impl Tab {
    const ALL: [Tab; 2] = [Tab::Libraries, Tab::Archives];
}

impl TabItem for Tab {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn title(&self) -> &'static str {
        match self {
            Tab::Libraries => "Libraries [1]",
            Tab::Archives => "Archives [2]",
        }
    }
}

/// The game shown in the detail pop-up.
#[derive(Debug)]
struct Detail {
    kind: RecordKind,
    id: u64,
    game: Fetch<GameRecord>,
    action: ArchiveAction,
}

pub(crate) struct App {
    running: bool,
    tab: Tab,
    settings: Settings,
    libraries: Fetch<Vec<LibraryRecord>>,
    archives: Fetch<Vec<ArchiveRecord>>,
    library_view: CollectionViewState,
    archive_view: CollectionViewState,
    detail: Option<Detail>,
    /// Games with an archive request pending or accepted; their archive
    /// action stays off.
    archived: HashSet<u64>,
    app_sender: mpsc::Sender<AppEvent>,
    manager_receiver: mpsc::Receiver<ManagerEvent>,
}

impl App {
    pub(crate) fn new(
        app_sender: mpsc::Sender<AppEvent>,
        manager_receiver: mpsc::Receiver<ManagerEvent>,
        settings: Settings,
    ) -> Self {
        Self {
            running: true,
            tab: Tab::Libraries,
            settings,
            libraries: Fetch::Loading,
            archives: Fetch::Loading,
            library_view: CollectionViewState::new(),
            archive_view: CollectionViewState::new(),
            detail: None,
            archived: HashSet::new(),
            app_sender,
            manager_receiver,
        }
    }

    pub(crate) fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> std::io::Result<()> {
        self.refresh();
        while self.running {
            terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
            self.handle_events()?;
            self.handle_manager_events();
        }
        // Notify manager that we're quitting
        let _ = self.app_sender.try_send(AppEvent::Quit);
        Ok(())
    }

    fn send(&self, event: AppEvent) {
        if let Err(err) = self.app_sender.try_send(event) {
            tracing::warn!(error = %err, "manager is not accepting requests");
        }
    }

    fn refresh(&mut self) {
        self.libraries = Fetch::Loading;
        self.archives = Fetch::Loading;
        self.send(AppEvent::RequestLibraries);
        self.send(AppEvent::RequestArchives);
    }

    fn handle_events(&mut self) -> std::io::Result<()> {
        // Poll with a timeout so we can also check manager events
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key(key_event.code, key_event.modifiers);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_manager_events(&mut self) {
        while let Ok(event) = self.manager_receiver.try_recv() {
            self.handle_manager_event(event);
        }
    }

    fn handle_manager_event(&mut self, event: ManagerEvent) {
        match event {
            ManagerEvent::Libraries(libraries) => {
                self.libraries = libraries;
                let len = self.libraries.ready().map_or(0, Vec::len);
                if self.library_view.selected >= len {
                    self.library_view.selected = 0;
                }
                self.request_games(Tab::Libraries);
            }
            ManagerEvent::Archives(archives) => {
                self.archives = archives;
                let len = self.archives.ready().map_or(0, Vec::len);
                if self.archive_view.selected >= len {
                    self.archive_view.selected = 0;
                }
                self.request_games(Tab::Archives);
            }
            ManagerEvent::Games(collection, games) => {
                let display = self.settings.size_display;
                let view = match collection {
                    Collection::Library(_) => &mut self.library_view,
                    Collection::Archive(_) => &mut self.archive_view,
                };
                view.receive_games(collection, games, display);
            }
            ManagerEvent::Game(kind, id, game) => {
                if let Some(detail) = &mut self.detail
                    && detail.kind == kind
                    && detail.id == id
                {
                    detail.game = game;
                }
            }
            ManagerEvent::Archived { app_id, result } => {
                let accepted = result.ready().is_some();
                if let Some(detail) = &mut self.detail
                    && detail.id == app_id
                {
                    detail.action = if accepted {
                        ArchiveAction::Done
                    } else {
                        ArchiveAction::Failed
                    };
                }
                if accepted {
                    tracing::info!(app_id, "game archived");
                    self.refresh();
                } else {
                    self.archived.remove(&app_id);
                }
            }
        }
    }

    /// The collection currently selected on `tab`, if its list has arrived.
    fn selected_collection(&self, tab: Tab) -> Option<Collection> {
        match tab {
            Tab::Libraries => self
                .libraries
                .ready()?
                .get(self.library_view.selected)
                .map(|library| Collection::Library(library.id)),
            Tab::Archives => self
                .archives
                .ready()?
                .get(self.archive_view.selected)
                .map(|archive| Collection::Archive(archive.id)),
        }
    }

    fn view_mut(&mut self, tab: Tab) -> &mut CollectionViewState {
        match tab {
            Tab::Libraries => &mut self.library_view,
            Tab::Archives => &mut self.archive_view,
        }
    }

    fn collection_count(&self, tab: Tab) -> usize {
        match tab {
            Tab::Libraries => self.libraries.ready().map_or(0, Vec::len),
            Tab::Archives => self.archives.ready().map_or(0, Vec::len),
        }
    }

    fn request_games(&mut self, tab: Tab) {
        if let Some(collection) = self.selected_collection(tab) {
            self.view_mut(tab).begin_loading(collection);
            self.send(AppEvent::RequestGames(collection));
        }
    }

    fn switch_collection(&mut self, forward: bool) {
        let tab = self.tab;
        let len = self.collection_count(tab);
        let view = self.view_mut(tab);
        if forward {
            view.select_next_collection(len);
        } else {
            view.select_prev_collection(len);
        }
        self.request_games(tab);
    }

    fn open_detail(&mut self) {
        let tab = self.tab;
        let view = self.view_mut(tab);
        let Some(collection) = view.loaded_for else {
            return;
        };
        let Some(id) = view.focus_selected() else {
            return;
        };
        let kind = collection.record_kind();

        let action = if self.archived.contains(&id) {
            ArchiveAction::Done
        } else if !kind.is_archivable() {
            ArchiveAction::Unavailable
        } else {
            self.archives
                .ready()
                .and_then(|archives| archives.first())
                .map_or(ArchiveAction::Unavailable, |archive| {
                    ArchiveAction::Available(archive.path.clone())
                })
        };

        self.detail = Some(Detail {
            kind,
            id,
            game: Fetch::Loading,
            action,
        });
        self.send(AppEvent::RequestGame(kind, id));
    }

    fn close_detail(&mut self) {
        self.detail = None;
        let tab = self.tab;
        self.view_mut(tab).set_focus(None);
    }

    fn archive_focused(&mut self) {
        let Some(archive_id) = self
            .archives
            .ready()
            .and_then(|archives| archives.first())
            .map(|archive| archive.id)
        else {
            return;
        };
        let Some(detail) = &mut self.detail else {
            return;
        };
        if !matches!(detail.action, ArchiveAction::Available(_)) {
            return;
        }
        detail.action = ArchiveAction::Pending;
        let app_id = detail.id;
        self.archived.insert(app_id);
        self.send(AppEvent::Archive { archive_id, app_id });
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key, modifiers) {
            self.running = false;
            return;
        }

        if self.detail.is_some() {
            match key {
                KeyCode::Esc => self.close_detail(),
                KeyCode::Char('a') => self.archive_focused(),
                KeyCode::Char('q') => self.running = false,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = c.to_digit(10).map_or(0, |d| d as usize);
                if let Some(tab) = Tab::from_index(index) {
                    self.tab = tab;
                }
            }
            KeyCode::Left => self.switch_collection(false),
            KeyCode::Right => self.switch_collection(true),
            KeyCode::Up => {
                let tab = self.tab;
                self.view_mut(tab).select_prev_game();
            }
            KeyCode::Down => {
                let tab = self.tab;
                self.view_mut(tab).select_next_game();
            }
            KeyCode::Enter => self.open_detail(),
            KeyCode::Char('r') => self.refresh(),
            _ => {}
        }
    }

    fn size_header(&self) -> &'static str {
        match self.settings.size_display {
            SizeDisplay::Humanised => "Size",
            SizeDisplay::Gibibytes => "Size (GiB)",
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [tabs_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let status = match (&self.libraries, &self.archives) {
            (Fetch::Loading, _) | (_, Fetch::Loading) => "loading...",
            (Fetch::Failed, _) | (_, Fetch::Failed) => "error",
            _ => "ready",
        };
        TabBar::new(
            format!("vapour - {} - {status}", self.settings.base_url),
            self.tab,
        )
        .render(tabs_area, buf);

        let size_header = self.size_header();
        match self.tab {
            Tab::Libraries => LibrariesView::new(
                &self.libraries,
                &self.settings.style,
                self.settings.label_cutoff,
            )
            .size_header(size_header)
            .render(body_area, buf, &mut self.library_view),
            Tab::Archives => ArchivesView::new(&self.archives, &self.settings.style)
                .size_header(size_header)
                .render(body_area, buf, &mut self.archive_view),
        }

        if let Some(detail) = &self.detail {
            GameDetail::new(
                &detail.game,
                detail.kind,
                &detail.action,
                &self.settings.style,
            )
            .render(area, buf);
        }
    }
}
