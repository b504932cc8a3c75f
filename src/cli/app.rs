use std::io::{self, Write};
use std::path::Path;
use std::thread;

use tasksort::feedback::{Feedback, FeedbackKind, MESSAGE_CLEAR_DELAY, REDIRECT_DELAY};
use tasksort::{
    AccountStore, FileStorage, Page, Result, StoreError, TaskFilter, TaskStore,
};

/// Line-oriented stand-in for the task pages
///
/// Owns the two stores over one shared file-backed device store and runs
/// the page loop: the route guard picks the page, the page reads a
/// command, store results come back as transient feedback messages.
pub struct App {
    tasks: TaskStore<FileStorage>,
    accounts: AccountStore<FileStorage>,
    filter: TaskFilter,
}

impl App {
    pub fn open(data_dir: &Path) -> Result<Self> {
        let device = FileStorage::open(data_dir)?;
        let tasks = TaskStore::open(device.clone())?;
        let accounts = AccountStore::open(device)?;
        if tasks.recovered() || accounts.recovered() {
            show(&Feedback::error(
                "Some saved data was unreadable and has been reset",
            ));
        }
        Ok(Self {
            tasks,
            accounts,
            filter: TaskFilter::All,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut page = Page::Landing;
        loop {
            // Route guard runs before anything else on each page load
            if let Some(target) = self.accounts.route_guard(page) {
                page = target;
            }
            let next = match page {
                Page::Landing => self.landing_page()?,
                Page::Tasks => self.tasks_page()?,
            };
            match next {
                Some(target) => page = target,
                None => return Ok(()),
            }
        }
    }

    fn landing_page(&mut self) -> Result<Option<Page>> {
        println!();
        println!("== TaskSort - sign in ==");
        println!("Commands: login, register, quit");
        let Some(command) = prompt("landing")? else {
            return Ok(None);
        };
        match command.trim() {
            "login" => self.login_form(),
            "register" => self.register_form(),
            "quit" | "q" => Ok(None),
            "" => Ok(Some(Page::Landing)),
            other => {
                println!("Unknown command '{other}'");
                Ok(Some(Page::Landing))
            }
        }
    }

    fn login_form(&mut self) -> Result<Option<Page>> {
        let Some(email) = prompt("Email")? else {
            return Ok(None);
        };
        let Some(mut password) = prompt("Password")? else {
            return Ok(None);
        };
        match self.accounts.login(&email, &password) {
            Ok(display_name) => {
                show(&Feedback::welcome(&display_name));
                thread::sleep(REDIRECT_DELAY);
                Ok(Some(Page::Tasks))
            }
            Err(err @ StoreError::CredentialsRejected) => {
                // The form clears the password field on rejection
                password.clear();
                show(&Feedback::from(&err));
                thread::sleep(MESSAGE_CLEAR_DELAY);
                Ok(Some(Page::Landing))
            }
            Err(err) => Err(err),
        }
    }

    fn register_form(&mut self) -> Result<Option<Page>> {
        let Some(email) = prompt("Email")? else {
            return Ok(None);
        };
        let Some(password) = prompt("Password")? else {
            return Ok(None);
        };
        let Some(display_name) = prompt("User name")? else {
            return Ok(None);
        };
        // Field presence is the form's job; the store does not re-validate
        if email.trim().is_empty() || password.is_empty() || display_name.trim().is_empty() {
            show(&Feedback::error("You can't leave the form empty"));
            thread::sleep(MESSAGE_CLEAR_DELAY);
            return Ok(Some(Page::Landing));
        }
        match self.accounts.register(&email, &password, &display_name) {
            Ok(()) => {
                show(&Feedback::account_created());
                Ok(Some(Page::Landing))
            }
            Err(err @ StoreError::DuplicateIdentity(_)) => {
                show(&Feedback::from(&err));
                thread::sleep(MESSAGE_CLEAR_DELAY);
                Ok(Some(Page::Landing))
            }
            Err(err) => Err(err),
        }
    }

    fn tasks_page(&mut self) -> Result<Option<Page>> {
        println!();
        if let Some(user) = self.accounts.current_user() {
            println!("== TaskSort - tasks ({}) ==", user.display_name);
        }
        self.render_tasks();
        println!("Commands: add, del <n>, filter <All|High|Medium|Low>, logout, quit");
        let Some(command) = prompt("tasks")? else {
            return Ok(None);
        };
        let command = command.trim();

        if command == "add" {
            self.add_form()?;
        } else if let Some(rest) = command.strip_prefix("del ") {
            self.delete_command(rest);
        } else if let Some(rest) = command.strip_prefix("filter ") {
            match rest.trim().parse::<TaskFilter>() {
                Ok(criterion) => self.filter = criterion,
                Err(err) => show(&Feedback::from(&err)),
            }
        } else if command == "logout" {
            let confirmed = self
                .accounts
                .logout(|| ask_yes_no("Do you want log out?"))?;
            if confirmed {
                return Ok(Some(Page::Landing));
            }
        } else if command == "quit" || command == "q" {
            return Ok(None);
        } else if !command.is_empty() {
            println!("Unknown command '{command}'");
        }
        Ok(Some(Page::Tasks))
    }

    // Renders every record but shows only those matching the active
    // filter, so the printed positions stay valid for `del <n>`.
    fn render_tasks(&self) {
        if self.tasks.is_empty() {
            println!("(no tasks)");
            return;
        }
        if self.filter != TaskFilter::All {
            println!("(filter: {})", self.filter);
        }
        for (position, task) in self.tasks.tasks().iter().enumerate() {
            if self.filter.matches(task) {
                println!(
                    "[{position}] {} ({}) - {}",
                    task.title, task.priority, task.description
                );
            }
        }
    }

    fn add_form(&mut self) -> Result<()> {
        let Some(title) = prompt("Title")? else {
            return Ok(());
        };
        let Some(description) = prompt("Description")? else {
            return Ok(());
        };
        let Some(priority) = prompt("Priority (High/Medium/Low)")? else {
            return Ok(());
        };
        match self.tasks.create(&title, &description, &priority) {
            Ok(task) => show(&Feedback::success(format!("Added '{}'", task.title))),
            Err(err @ StoreError::Validation(_)) => {
                show(&Feedback::from(&err));
                thread::sleep(MESSAGE_CLEAR_DELAY);
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn delete_command(&mut self, argument: &str) {
        let outcome = match argument.trim().parse::<usize>() {
            Ok(position) => self.tasks.delete(position).map(|task| task.title),
            Err(_) => Err(StoreError::Validation(format!(
                "'{}' is not a task position",
                argument.trim()
            ))),
        };
        match outcome {
            Ok(title) => show(&Feedback::success(format!("Deleted '{title}'"))),
            Err(err) => show(&Feedback::from(&err)),
        }
    }
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().map_err(io_error)?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line).map_err(io_error)?;
    if read == 0 {
        // EOF: treat as leaving the page
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask_yes_no(question: &str) -> bool {
    match prompt(&format!("{question} [y/N]")) {
        Ok(Some(answer)) => matches!(answer.trim(), "y" | "Y" | "yes"),
        _ => false,
    }
}

fn show(feedback: &Feedback) {
    let tag = match feedback.kind {
        FeedbackKind::Success => "ok",
        FeedbackKind::Error => "error",
    };
    println!("[{tag}] {}", feedback.text);
}

fn io_error(err: io::Error) -> StoreError {
    StoreError::Storage(err.to_string())
}
