use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::DefaultTerminal;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

use user_service::{ServiceError, User, UserApi, UserDraft, UserStore};

type LoadOutcome = Result<Vec<User>, ServiceError>;

// =============================================================================
// Focus & Form State
// =============================================================================

/// Which pane receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Phone,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Phone,
            FormField::Phone => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Phone,
            FormField::Email => FormField::Name,
            FormField::Phone => FormField::Email,
        }
    }
}

/// The single reusable form. `editing` holds the id of the user being
/// edited; `None` means the form is in create-mode.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub focus: FormField,
    pub editing: Option<u64>,
}

impl FormState {
    pub fn draft(&self) -> UserDraft {
        UserDraft::new(self.name.clone(), self.email.clone(), self.phone.clone())
    }

    pub fn load(&mut self, user: &User) {
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.phone = user.phone.clone();
        self.focus = FormField::Name;
        self.editing = Some(user.id);
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.focus = FormField::Name;
        self.editing = None;
    }

    pub fn buffer_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
        }
    }
}

// =============================================================================
// Load Error (diagnostics panel entries)
// =============================================================================

#[derive(Debug, Clone)]
pub struct LoadError {
    pub endpoint: String,
    pub message: String,
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub focus: Focus,
    pub store: UserStore,
    pub form: FormState,
    pub selected_index: usize,
    pub should_quit: bool,

    // Loader state
    pub loading: bool,
    pub load_errors: Vec<LoadError>,
    pub pending_load: bool,
    pub load_receiver: Option<UnboundedReceiver<LoadOutcome>>,
    pub load_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            focus: Focus::Table,
            store: UserStore::new(),
            form: FormState::default(),
            selected_index: 0,
            should_quit: false,
            loading: true,
            load_errors: Vec::new(),
            pending_load: true,
            load_receiver: None,
            load_task: None,
        }
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;

            // Kick off the one-shot load on the first pass
            if self.pending_load {
                self.pending_load = false;
                self.start_load();
            }

            // Apply the load result once it arrives
            self.process_load_events();
        }

        // A fetch still in flight must not outlive the app
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        Ok(())
    }

    // =========================================================================
    // Remote Load
    // =========================================================================

    fn start_load(&mut self) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.load_receiver = Some(rx);

        let api = UserApi::new();
        self.load_task = Some(tokio::spawn(async move {
            let _ = tx.send(api.fetch_users().await);
        }));
    }

    pub fn process_load_events(&mut self) {
        let Some(rx) = &mut self.load_receiver else {
            return;
        };

        let mut completed = false;

        while let Ok(outcome) = rx.try_recv() {
            match outcome {
                Ok(users) => {
                    self.store.replace_all(users);
                }
                Err(e) => {
                    self.load_errors.push(LoadError {
                        endpoint: format!("{}/users", user_service::DEFAULT_BASE_URL),
                        message: e.to_string(),
                    });
                }
            }
            self.loading = false;
            completed = true;
        }

        if completed {
            self.load_receiver = None;
            self.load_task = None;
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn move_up(&mut self) {
        if self.focus == Focus::Table && self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.focus == Focus::Table
            && self.selected_index < self.store.len().saturating_sub(1)
        {
            self.selected_index += 1;
        }
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // CRUD Actions
    // =========================================================================

    /// The row the table cursor is on, if any
    pub fn selected_user(&self) -> Option<&User> {
        self.store.users().get(self.selected_index)
    }

    /// Switch the form to create-mode with empty buffers
    pub fn begin_create(&mut self) {
        self.form.clear();
        self.focus = Focus::Form;
    }

    /// Copy the selected user's fields into the form and mark its id
    pub fn begin_edit(&mut self) {
        let Some(user) = self.selected_user().cloned() else {
            return;
        };
        self.form.load(&user);
        self.focus = Focus::Form;
    }

    /// Form submit: update when an id is being edited, create otherwise.
    /// Blank forms are ignored.
    pub fn submit_form(&mut self) {
        let draft = self.form.draft();
        if draft.is_blank() {
            return;
        }

        match self.form.editing {
            Some(id) => {
                self.store.update(id, draft);
            }
            None => {
                self.store.create(draft);
                // New entries land at the head, keep the cursor on them
                self.selected_index = 0;
            }
        }

        self.form.clear();
        self.focus = Focus::Table;
    }

    /// Drop any in-progress edit or create and return to the table
    pub fn cancel_form(&mut self) {
        self.form.clear();
        self.focus = Focus::Table;
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_user().map(|u| u.id) else {
            return;
        };
        self.store.delete(id);

        // An edit pointed at the removed row would dangle; fall back to
        // create-mode.
        if self.form.editing == Some(id) {
            self.form.clear();
        }

        if self.selected_index >= self.store.len() {
            self.selected_index = self.store.len().saturating_sub(1);
        }
    }

    // =========================================================================
    // Form Input
    // =========================================================================

    pub fn form_push_char(&mut self, c: char) {
        if self.focus == Focus::Form {
            self.form.buffer_mut().push(c);
        }
    }

    pub fn form_pop_char(&mut self) {
        if self.focus == Focus::Form {
            self.form.buffer_mut().pop();
        }
    }

    pub fn form_next_field(&mut self) {
        self.form.focus = self.form.focus.next();
    }

    pub fn form_prev_field(&mut self) {
        self.form.focus = self.form.focus.prev();
    }

    /// Submit label per mode, mirrored in the form title and footer
    pub fn submit_label(&self) -> &'static str {
        if self.form.editing.is_some() {
            "Update User"
        } else {
            "Create User"
        }
    }
}
