#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use shiftboard::{
    io,
    model::{Roster, SearchWindow, Shift, ShiftId, ShiftRequest},
    scheduler::Scheduler,
    storage::{IdStrategy, JsonStorage, ShiftBook, Storage},
    user::{Directory, Role, User},
    view::ShiftView,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de gestion des créneaux de travail (roster JSON local)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de roster
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    /// Utilisateur courant (identité utilisée pour les droits et les valeurs par défaut)
    #[arg(long = "as", global = true)]
    actor: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct TimeArgs {
    #[arg(long)]
    start_hour: u32,
    #[arg(long, default_value_t = 0)]
    start_minute: u32,
    #[arg(long)]
    end_hour: u32,
    #[arg(long, default_value_t = 0)]
    end_minute: u32,
}

impl TimeArgs {
    fn request(self, user: Option<String>) -> ShiftRequest {
        let mut request = ShiftRequest::new(
            self.start_hour,
            self.start_minute,
            self.end_hour,
            self.end_minute,
        );
        request.username = user;
        request
    }
}

/// Fenêtre de recherche, 00:00–23:59 par défaut
#[derive(Args, Debug, Clone, Copy)]
struct WindowArgs {
    #[arg(long, default_value_t = 0)]
    from_hour: u32,
    #[arg(long, default_value_t = 0)]
    from_minute: u32,
    #[arg(long, default_value_t = 23)]
    to_hour: u32,
    #[arg(long, default_value_t = 59)]
    to_minute: u32,
}

impl WindowArgs {
    fn window(self) -> Result<SearchWindow> {
        Ok(SearchWindow::new(
            self.from_hour,
            self.from_minute,
            self.to_hour,
            self.to_minute,
        )?)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialiser un roster vide
    Init {
        /// Identifiants UUID au lieu d'un compteur
        #[arg(long)]
        uuid_ids: bool,
    },

    /// Enregistrer un utilisateur
    Register {
        #[arg(long)]
        username: String,
        /// liste "manager,employee"
        #[arg(long, default_value = "employee")]
        roles: String,
    },

    /// Importer des utilisateurs depuis un CSV
    ImportUsers {
        #[arg(long)]
        csv: String,
    },

    /// Lister les utilisateurs (manager)
    Users,

    /// Créer un créneau (manager)
    Create {
        /// Employé concerné ; l'utilisateur courant par défaut
        #[arg(long)]
        user: Option<String>,
        #[command(flatten)]
        time: TimeArgs,
    },

    /// Afficher un créneau
    Get {
        #[arg(long)]
        id: String,
    },

    /// Modifier la plage d'un créneau (manager)
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        user: Option<String>,
        #[command(flatten)]
        time: TimeArgs,
    },

    /// Supprimer un créneau (manager)
    Delete {
        #[arg(long)]
        id: String,
        /// Restreint la suppression aux créneaux de cet employé
        #[arg(long)]
        user: Option<String>,
    },

    /// Tous les créneaux dans la fenêtre (manager)
    All {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Créneaux de l'utilisateur courant
    Mine {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Créneaux d'un employé donné (manager)
    UserShifts {
        #[arg(long)]
        user: String,
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Exporter le roster et/ou les créneaux (manager)
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster)?;

    if let Commands::Init { uuid_ids } = cli.cmd {
        if storage.exists() {
            bail!("roster already exists: {}", storage.path().display());
        }
        let strategy = if uuid_ids {
            IdStrategy::Uuid
        } else {
            IdStrategy::Sequential
        };
        let roster = Roster {
            shifts: ShiftBook::with_strategy(strategy),
            ..Roster::default()
        };
        storage.save(&roster)?;
        println!("Initialized {}", storage.path().display());
        return Ok(());
    }

    let mut scheduler = Scheduler::from_roster(storage.load_or_default()?);

    match cli.cmd {
        Commands::Init { .. } => {}
        Commands::Register { username, roles } => {
            let roles = io::parse_roles(&roles)?;
            scheduler
                .users_mut()
                .register(User::new(username.clone(), roles))?;
            storage.save(&scheduler.into_roster())?;
            println!("User registered: {username}");
        }
        Commands::ImportUsers { csv } => {
            let users = io::import_users_csv(csv)?;
            let count = users.len();
            for user in users {
                scheduler.users_mut().register(user)?;
            }
            storage.save(&scheduler.into_roster())?;
            println!("Imported {count} user(s)");
        }
        Commands::Users => {
            require(&scheduler, cli.actor.as_deref(), Access::Manage)?;
            for user in scheduler.users().users() {
                let roles: Vec<&str> = user.roles.iter().map(Role::as_str).collect();
                println!("{} | {}", user.username, roles.join(","));
            }
        }
        Commands::Create { user, time } => {
            let actor = require(&scheduler, cli.actor.as_deref(), Access::Manage)?;
            let shift = scheduler.create_shift(&actor.username, &time.request(user))?;
            println!("{}", ShiftView::from(&shift));
            storage.save(&scheduler.into_roster())?;
        }
        Commands::Get { id } => {
            let actor = require(&scheduler, cli.actor.as_deref(), Access::ViewOwn)?;
            let scope = (!actor.can_manage()).then_some(actor.username.as_str());
            let shift = scheduler.get_shift(&ShiftId::new(id), scope)?;
            println!("{}", ShiftView::from(&shift));
        }
        Commands::Update { id, user, time } => {
            let actor = require(&scheduler, cli.actor.as_deref(), Access::Manage)?;
            let shift =
                scheduler.update_shift(&actor.username, &ShiftId::new(id), &time.request(user))?;
            println!("{}", ShiftView::from(&shift));
            storage.save(&scheduler.into_roster())?;
        }
        Commands::Delete { id, user } => {
            require(&scheduler, cli.actor.as_deref(), Access::Manage)?;
            let sid = ShiftId::new(id);
            scheduler.delete_shift(&sid, user.as_deref())?;
            storage.save(&scheduler.into_roster())?;
            println!("Deleted shift {sid}");
        }
        Commands::All { window } => {
            require(&scheduler, cli.actor.as_deref(), Access::Manage)?;
            print_shifts(&scheduler.list_all(&window.window()?));
        }
        Commands::Mine { window } => {
            let actor = require(&scheduler, cli.actor.as_deref(), Access::ViewOwn)?;
            let shifts = scheduler.search_shifts(&actor.username, None, &window.window()?)?;
            print_shifts(&shifts);
        }
        Commands::UserShifts { user, window } => {
            let actor = require(&scheduler, cli.actor.as_deref(), Access::Manage)?;
            let shifts =
                scheduler.search_shifts(&actor.username, Some(&user), &window.window()?)?;
            print_shifts(&shifts);
        }
        Commands::Export { out_json, out_csv } => {
            require(&scheduler, cli.actor.as_deref(), Access::Manage)?;
            if let Some(path) = out_csv {
                let shifts = scheduler.list_all(&SearchWindow::default());
                io::export_shifts_csv(path, &shifts)?;
            }
            if let Some(path) = out_json {
                io::export_roster_json(path, &scheduler.into_roster())?;
            }
        }
    }

    Ok(())
}

/// Droits exigés par une commande.
#[derive(Debug, Clone, Copy)]
enum Access {
    Manage,
    ViewOwn,
}

impl Access {
    fn granted(self, user: &User) -> bool {
        match self {
            Access::Manage => user.can_manage(),
            Access::ViewOwn => user.can_view_own(),
        }
    }

    fn needed(self) -> &'static str {
        match self {
            Access::Manage => "ROLE_MANAGER",
            Access::ViewOwn => "ROLE_MANAGER or ROLE_EMPLOYEE",
        }
    }
}

/// Vérifie que l'utilisateur courant existe et détient les droits requis.
fn require(scheduler: &Scheduler, actor: Option<&str>, access: Access) -> Result<User> {
    let username = actor.context("this command needs the current user: pass --as <username>")?;
    let user = scheduler
        .users()
        .find_user(username)
        .with_context(|| format!("unknown user: {username}"))?;
    if !access.granted(user) {
        bail!("access denied for {username}: requires {}", access.needed());
    }
    Ok(user.clone())
}

fn print_shifts(shifts: &[Shift]) {
    if shifts.is_empty() {
        println!("No shifts found");
        return;
    }
    for shift in shifts {
        println!("{}", ShiftView::from(shift));
    }
}
