//! Command line editor of the standard attributes access control

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use portal::AppConfigSession;
use portal::access_control::{AccessControlLevel, AccessControlTier};
use portal::config::PortalSettings;
use portal::profile::attributes_list::{ChangeOutcome, TierSelector};

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Edit the standard attributes access control of an app config")]
struct Cli {
	/// App config file (.yaml, .yml or .json), overrides PORTAL_APP_CONFIG
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// Log filter used when RUST_LOG is not set, overrides PORTAL_LOG
	#[arg(long)]
	log_level: Option<String>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List the standard attributes with their levels per tier
	Show,
	/// Set the level of one tier of an attribute
	Set {
		/// Attribute pointer, e.g. /email
		pointer: String,
		/// portal_ui, bearer or end_user
		tier: String,
		/// hidden, readonly or readwrite
		level: String,
		/// Apply changes forced on other tiers without asking
		#[arg(long, short)]
		yes: bool,
	},
	/// List the levels each tier of an attribute can be set to
	Options {
		/// Attribute pointer, e.g. /email
		pointer: String,
	},
}

fn print_attributes(session: &AppConfigSession) {
	println!("{:<22} {:<10} {:<10} {:<10}", "attribute", "portal_ui", "bearer", "end_user");
	for item in session.editor().items() {
		let ac = item.access_control;
		println!("{:<22} {:<10} {:<10} {:<10}", item.pointer, ac.portal_ui, ac.bearer, ac.end_user);
	}
}

fn print_selector(selector: &TierSelector) {
	let options: Vec<String> = selector
		.options
		.iter()
		.map(|o| {
			let mark = if o.level == selector.selected { "*" } else { "" };
			if o.disabled { format!("({}{})", o.level, mark) } else { format!("{}{}", o.level, mark) }
		})
		.collect();
	let state = if selector.disabled { " [locked]" } else { "" };
	println!("{:<10} {}{}", selector.tier.as_str(), options.join(" "), state);
}

fn set_level(
	session: &mut AppConfigSession,
	pointer: &str,
	tier: &str,
	level: &str,
	yes: bool,
) -> anyhow::Result<()> {
	let tier: AccessControlTier = tier.parse()?;
	let level: AccessControlLevel = level.parse()?;
	let index = session.position(pointer)?;

	let selector = session.editor().selector(index, tier)?;
	if !selector.is_enabled(level) {
		bail!("{} cannot be set to {} on {}", tier, level, pointer);
	}

	match session.editor_mut().change_level(index, tier, level)? {
		ChangeOutcome::Applied => debug!(pointer, "Change applied"),
		ChangeOutcome::PendingConfirmation => {
			if let Some(prompt) = session.editor().pending_prompt()? {
				println!(
					"Setting {} of {} to {} also lowers {}.",
					prompt.party, prompt.field_name, prompt.level, prompt.affected
				);
			}
			if !yes {
				session.editor_mut().dismiss();
				bail!("change not saved, run again with --yes to apply it");
			}
			session.editor_mut().confirm()?;
		}
	}

	session.save()?;
	info!(pointer, %tier, %level, "Access control updated");
	print_attributes(session);
	Ok(())
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let settings = PortalSettings::from_env().with_overrides(cli.config, cli.log_level);
	portal::logging::init_logging(&settings.log_level);
	debug!(config = %settings.app_config_path.display(), "Starting");

	let mut session = AppConfigSession::open(&settings.app_config_path).with_context(|| {
		format!("cannot open app config {}", settings.app_config_path.display())
	})?;

	match cli.command {
		Commands::Show => print_attributes(&session),
		Commands::Set { pointer, tier, level, yes } => {
			set_level(&mut session, &pointer, &tier, &level, yes)?;
		}
		Commands::Options { pointer } => {
			let index = session.position(&pointer)?;
			for tier in AccessControlTier::ALL {
				print_selector(&session.editor().selector(index, tier)?);
			}
		}
	}
	Ok(())
}

// vim: ts=4
