use clap::{Parser, Subcommand};
use guildboard::{
    api::{authorize_member, ApiClient, DiscordGateway, NotifyRequest},
    config::Settings,
    models::{Achievement, DiscordUser, GuildMember, LeaderEntry, MemberStats},
    progress::{self, SortMode},
    ranking::{Medal, RankingEngine},
    showcase,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "guildboard")]
#[clap(about = "Guild leaderboard and achievement views", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked leaderboard
    Top {
        /// JSON file with an array of leaderboard entries
        #[clap(short, long)]
        file: PathBuf,
    },

    /// Print the achievement showcase and the full achievement list
    Achievements {
        /// JSON file with an array of achievements
        #[clap(short, long)]
        file: PathBuf,

        /// Ordering: rarity, date, or title
        #[clap(short, long, default_value = "rarity")]
        sort: String,

        /// Show unlocked achievements only
        #[clap(long)]
        only_unlocked: bool,

        /// Override the configured showcase budget
        #[clap(short, long)]
        budget: Option<usize>,
    },

    /// Print a member profile card
    Profile {
        /// JSON file with user, member, stats, and achievements
        #[clap(short, long)]
        file: PathBuf,
    },

    /// Exchange an OAuth code and notify the channel
    Authorize {
        /// Authorization code from the OAuth redirect
        #[clap(short, long)]
        code: String,

        /// Channel to notify once authorized
        #[clap(long)]
        channel_id: String,
    },

    /// Send a bare authorization notification
    Notify {
        #[clap(long)]
        channel_id: String,

        #[clap(long)]
        username: String,

        #[clap(long)]
        user_id: String,
    },
}

/// Everything the profile card renders, in one document.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileFile {
    user: DiscordUser,
    #[serde(default)]
    member: Option<GuildMember>,
    #[serde(default)]
    stats: Option<MemberStats>,
    #[serde(default)]
    achievements: Vec<Achievement>,
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn medal_label(medal: Option<Medal>) -> &'static str {
    match medal {
        Some(Medal::Gold) => "gold",
        Some(Medal::Silver) => "silver",
        Some(Medal::Bronze) => "bronze",
        None => "",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let settings = Settings::new().unwrap_or_else(|_| {
        info!("Using default settings");
        Settings::default()
    });

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    match cli.command {
        Commands::Top { file } => {
            let entries: Vec<LeaderEntry> = load_json(&file)?;
            let engine = RankingEngine::from_settings(&settings.display);

            println!(
                "{:>5}  {:<20} {:>5} {:>10} {:>5}  achievements",
                "place", "username", "lvl", "xp", "bar"
            );
            for row in engine.standings(&entries) {
                println!(
                    "{:>5}  {:<20} {:>5} {:>10} {:>4}%  {} shown +{}  {}",
                    row.place,
                    row.entry.username,
                    row.entry.level,
                    row.entry.xp,
                    row.xp_bar_percent,
                    row.strip.visible.len(),
                    row.strip.overflow,
                    medal_label(row.medal),
                );
            }
        }

        Commands::Achievements {
            file,
            sort,
            only_unlocked,
            budget,
        } => {
            let items: Vec<Achievement> = load_json(&file)?;
            let mode = SortMode::from_str(&sort)
                .ok_or_else(|| anyhow::anyhow!("Unknown sort mode: {}", sort))?;

            let summary = showcase::summarize(&items);
            println!(
                "Unlocked {} of {} ({}%)",
                summary.unlocked, summary.total, summary.percent
            );

            let shown = showcase::select(&items, budget.unwrap_or(settings.display.showcase_budget));
            println!(
                "Showcase: {} icons, +{} hidden",
                shown.visible.len(),
                shown.overflow
            );

            let listed = progress::sort_achievements(
                &progress::filter_unlocked(&items, only_unlocked),
                mode,
            );
            for a in &listed {
                println!(
                    "  [{:<9}] {:>3}%  {}  {}",
                    a.rarity.as_str(),
                    progress::effective_progress(a),
                    if a.unlocked { "open" } else { "    " },
                    a.title,
                );
            }
        }

        Commands::Profile { file } => {
            let profile: ProfileFile = load_json(&file)?;
            let member = profile.member.as_ref();

            println!("{}", profile.user.display_name(member));
            if let Some(member) = member {
                println!("presence: {}", member.presence.as_str());
                if let Some(activity) = &member.activity_name {
                    println!("playing: {}", activity);
                }
                for role in &member.roles {
                    println!("role: {}", role.name);
                }
            }
            if let Some(stats) = &profile.stats {
                println!(
                    "Lvl {}  {} / {} XP ({}%)",
                    stats.level,
                    stats.xp,
                    stats.xp_to_next,
                    progress::xp_bar_percent(stats.xp, stats.xp_to_next),
                );
            }

            let summary = showcase::summarize(&profile.achievements);
            println!(
                "Unlocked {} of {} ({}%)",
                summary.unlocked, summary.total, summary.percent
            );
            let shown = showcase::select(&profile.achievements, settings.display.showcase_budget);
            for a in &shown.visible {
                println!(
                    "  {:>3}%  {}  {}",
                    progress::effective_progress(a),
                    a.title,
                    a.display_icon(),
                );
            }
            if shown.overflow > 0 {
                println!("  +{}", shown.overflow);
            }
        }

        Commands::Authorize { code, channel_id } => {
            let client = ApiClient::new(&settings.api)?;
            let token = authorize_member(&client, &code, &channel_id).await?;
            println!("token_type: {}", token.token_type);
            println!("expires_in: {}", token.expires_in);
            println!("scope: {}", token.scope);
            if let Some(me) = token.me {
                println!("member: {} ({})", me.username, me.id);
            }
        }

        Commands::Notify {
            channel_id,
            username,
            user_id,
        } => {
            let client = ApiClient::new(&settings.api)?;
            let ack = client
                .notify_authorized(NotifyRequest {
                    channel_id,
                    username,
                    user_id,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&ack)?);
        }
    }

    Ok(())
}
