//! Permission inspection CLI
//!
//! Prints the role matrix, answers single checks and shows a role's
//! dashboard navigation, using the same table the server uses.

use clap::{Parser, Subcommand};
use estate_hub::auth::rbac::{Action, Capability, PermissionTable, Resource, Role, TracingObserver};
use estate_hub::core::navigation::build_navigation_str;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

/// Exit status of a granted check
const GRANTED: u8 = 0;
/// Exit status of a denied check
const DENIED: u8 = 1;

#[derive(Parser)]
#[command(name = "access-tool")]
#[command(about = "Inspect the marketplace permission table")]
struct Cli {
    /// Log unrecognized roles, permissions and resources
    #[arg(long, global = true, env = "ESTATE_RBAC_DIAGNOSTICS")]
    diagnostics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full permission matrix
    Matrix {
        /// Print the records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check one permission; exits with 1 when denied
    Check {
        /// Session role, e.g. "agent"
        #[arg(short, long)]
        role: String,

        /// Permission key, e.g. "canEdit" or "canManageUsers"
        #[arg(short, long)]
        permission: String,

        /// Resource for set permissions, e.g. "properties"
        #[arg(long)]
        resource: Option<String>,
    },
    /// Check a mutating action; exits with 1 when denied
    Action {
        #[arg(short, long)]
        role: String,

        /// One of create, edit, delete, approve
        #[arg(short, long)]
        action: String,

        #[arg(long)]
        resource: String,
    },
    /// List the dashboard entries of a role
    Nav {
        #[arg(short, long)]
        role: String,
    },
}

fn write_matrix<W: Write>(table: &PermissionTable, out: &mut W) -> io::Result<()> {
    write!(out, "{:<12}", "")?;
    for role in Role::ALL {
        write!(out, "{:<12}", role.as_str())?;
    }
    writeln!(out)?;

    for resource in Resource::ALL {
        write!(out, "{:<12}", resource.as_str())?;
        for role in Role::ALL {
            let letters: String = Action::ALL
                .iter()
                .filter(|action| table.can_perform_action(role, **action, resource))
                .map(|action| action.as_str().chars().next().unwrap_or('?').to_ascii_uppercase())
                .collect();
            let cell = if letters.is_empty() { "-".to_string() } else { letters };
            write!(out, "{:<12}", cell)?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    for capability in Capability::ALL {
        write!(out, "{:<22}", capability.as_str())?;
        for role in Role::ALL {
            let mark = if table.permissions(role).capability(capability) { "yes" } else { "-" };
            write!(out, "{:<8}", mark)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn verdict<W: Write>(granted: bool, out: &mut W) -> io::Result<u8> {
    if granted {
        writeln!(out, "granted")?;
        Ok(GRANTED)
    } else {
        writeln!(out, "denied")?;
        Ok(DENIED)
    }
}

/// Execute a command against `table`, returning the process exit status
fn run<W: Write>(table: &PermissionTable, command: Commands, out: &mut W) -> io::Result<u8> {
    match command {
        Commands::Matrix { json } => {
            if json {
                let records: BTreeMap<_, _> = table.list_roles().collect();
                let text = serde_json::to_string_pretty(&records).map_err(io::Error::other)?;
                writeln!(out, "{}", text)?;
            } else {
                write_matrix(table, out)?;
            }
            Ok(GRANTED)
        }
        Commands::Check {
            role,
            permission,
            resource,
        } => verdict(
            table.has_permission_str(&role, &permission, resource.as_deref()),
            out,
        ),
        Commands::Action {
            role,
            action,
            resource,
        } => verdict(table.can_perform_action_str(&role, &action, &resource), out),
        Commands::Nav { role } => {
            for entry in build_navigation_str(table, &role) {
                writeln!(out, "{:<16}{}", entry.label, entry.path)?;
            }
            Ok(GRANTED)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    let table = if cli.diagnostics {
        PermissionTable::standard().with_observer(Arc::new(TracingObserver))
    } else {
        PermissionTable::standard()
    };

    let stdout = io::stdout();
    match run(&table, cli.command, &mut stdout.lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
