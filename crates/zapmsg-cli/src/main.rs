use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use owo_colors::OwoColorize;
use zapmsg_ai::{GeminiClient, Tone};
use zapmsg_core::{
    Beeper, Campaign, Clock, Contact, ContactStatus, LinkMode, Resolution, SendSession,
    SilentBeeper, SystemClock, build_link, encode_for_url, format_phone_for_display,
    parse_contacts, render,
};
use zapmsg_host::{SystemOpener, TerminalBell};

#[derive(Parser, Debug)]
#[command(
    name = "zapmsg-cli",
    version,
    about = "Campanhas de WhatsApp sem interface: importar, gerar links e enviar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a contact list and print the parsed contacts.
    Import {
        file: PathBuf,
        /// Print contacts as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the personalized send link for every contact.
    Links {
        #[arg(long, value_name = "FILE")]
        contacts: PathBuf,
        #[arg(long, value_name = "FILE")]
        template: PathBuf,
        /// Use WhatsApp Web links instead of wa.me.
        #[arg(long, env = "ZAPMSG_WEB")]
        web: bool,
    },
    /// Generate a message template with Gemini.
    Generate {
        #[arg(long)]
        topic: String,
        /// friendly, professional, urgent or funny.
        #[arg(long, default_value = "friendly")]
        tone: Tone,
        #[arg(long)]
        no_emoji: bool,
    },
    /// Go through the list one contact at a time, opening each link.
    Send {
        #[arg(long, value_name = "FILE")]
        contacts: PathBuf,
        #[arg(long, value_name = "FILE")]
        template: PathBuf,
        #[arg(long, env = "ZAPMSG_WEB")]
        web: bool,
        /// Do not ring the terminal bell.
        #[arg(long, env = "ZAPMSG_QUIET")]
        quiet: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .from_env_lossy()
                .add_directive("zapmsg_cli=info".parse()?)
                .add_directive("zapmsg_core=warn".parse()?)
                .add_directive("zapmsg_host=warn".parse()?)
                .add_directive("zapmsg_ai=warn".parse()?),
        )
        .init();

    match Cli::parse().command {
        Commands::Import { file, json } => import(&file, json),
        Commands::Links {
            contacts,
            template,
            web,
        } => links(&contacts, &template, link_mode(web)),
        Commands::Generate {
            topic,
            tone,
            no_emoji,
        } => generate(&topic, tone, !no_emoji).await,
        Commands::Send {
            contacts,
            template,
            web,
            quiet,
        } => send(&contacts, &template, link_mode(web), quiet),
    }
}

fn link_mode(web: bool) -> LinkMode {
    if web { LinkMode::Web } else { LinkMode::Direct }
}

fn read_contacts(path: &Path) -> Result<Vec<Contact>> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read contacts from {}", path.display()))?;
    let contacts = parse_contacts(&text)
        .wrap_err_with(|| format!("Invalid contact list in {}", path.display()))?;
    tracing::info!(count = contacts.len(), file = %path.display(), "Contacts imported");
    Ok(contacts)
}

fn read_campaign(contacts: &Path, template: &Path) -> Result<Campaign> {
    let template_text = std::fs::read_to_string(template)
        .wrap_err_with(|| format!("Failed to read template from {}", template.display()))?;
    let campaign = Campaign::new(read_contacts(contacts)?, template_text.trim_end())?;
    Ok(campaign)
}

fn import(file: &Path, json: bool) -> Result<()> {
    let contacts = read_contacts(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    println!("📇 {} contatos importados", contacts.len().bold());
    for contact in &contacts {
        println!(
            "  {} {:<24} {}",
            "✔".green(),
            contact.name(),
            format_phone_for_display(contact.phone()).dimmed()
        );
    }
    Ok(())
}

fn links(contacts: &Path, template: &Path, mode: LinkMode) -> Result<()> {
    let campaign = read_campaign(contacts, template)?;

    for (contact, url) in campaign.contacts.iter().zip(link_lines(&campaign, &SystemClock, mode)) {
        println!("{}\t{}", contact.name(), url);
    }
    Ok(())
}

/// One rendered link per contact, in list order.
fn link_lines(campaign: &Campaign, clock: &dyn Clock, mode: LinkMode) -> Vec<String> {
    let now = clock.now();
    campaign
        .contacts
        .iter()
        .map(|contact| {
            let text = render(&campaign.template, contact, now);
            build_link(contact.phone(), &encode_for_url(&text), mode)
        })
        .collect()
}

async fn generate(topic: &str, tone: Tone, include_emoji: bool) -> Result<()> {
    let client = GeminiClient::from_env();
    if !client.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set");
    }

    println!("✨ Gerando mensagem ({})...", tone.magenta());
    println!();
    println!("{}", client.generate(topic, tone, include_emoji).await);
    Ok(())
}

fn send(contacts: &Path, template: &Path, mode: LinkMode, quiet: bool) -> Result<()> {
    let campaign = read_campaign(contacts, template)?;
    let beeper: Box<dyn Beeper> = if quiet {
        Box::new(SilentBeeper)
    } else {
        Box::new(TerminalBell)
    };

    let mut session = SendSession::new(
        campaign,
        Arc::new(SystemClock),
        beeper,
        Box::new(SystemOpener::detect()),
    )
    .with_mode(mode);

    println!("🚀 Enviando para {} contatos via {}", session.contacts().len(), mode.label());

    while let Some(next) = session.next_pending() {
        let id = next.id();
        let name = next.name().to_string();
        let phone = format_phone_for_display(next.phone());

        print_progress(&session);
        println!("➡️  Próximo: {} ({})", name.bold(), phone);

        match read_line("[Enter] abrir · [s] pular · [q] sair: ")?.trim() {
            "" => {
                session.initiate_send(id)?;
                let answer = read_line("Enviou? [S/n] ")?;
                if is_no(&answer) {
                    println!("↩️  {} continua pendente", name);
                } else if session.confirm_return().is_some() {
                    println!("{} {} enviado", "✅".green(), name);
                }
            }
            "s" => {
                session.set_status_manually(id, Resolution::Skipped)?;
                println!("⏭️  {} pulado", name);
            }
            "q" => break,
            _ => println!("❌ Opção inválida"),
        }
    }

    print_progress(&session);
    if session.is_complete() {
        println!("{}", "🎉 Lista Finalizada!".bright_green());
    }
    print_leftovers(&session);
    Ok(())
}

fn print_progress(session: &SendSession) {
    let stats = session.stats();
    println!();
    println!(
        "📊 {}% · {} enviados · {} pendentes · {} pulados",
        stats.progress.bold(),
        stats.sent.green(),
        stats.pending,
        stats.skipped.dimmed()
    );
}

fn print_leftovers(session: &SendSession) {
    let pending: Vec<_> = session
        .contacts()
        .iter()
        .filter(|c| c.status() == ContactStatus::Pending)
        .collect();

    if pending.is_empty() {
        return;
    }

    println!("Ainda pendentes:");
    for contact in pending {
        println!("  • {} {}", contact.name(), format_phone_for_display(contact.phone()));
    }
}

fn is_no(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "n" | "nao" | "não" | "no")
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use zapmsg_core::FixedClock;

    use super::*;

    #[test]
    fn test_link_lines_render_each_contact() {
        let contacts = parse_contacts("Ana, 5511999991111\n5521988882222").unwrap();
        let campaign = Campaign::new(contacts, "{saudacao}, {nome}").unwrap();

        let lines = link_lines(&campaign, &FixedClock::at_hour(15), LinkMode::Direct);

        assert_eq!(
            lines,
            vec![
                "https://wa.me/5511999991111?text=Boa%20tarde%2C%20Ana".to_string(),
                "https://wa.me/5521988882222?text=Boa%20tarde%2C%20Amigo(a)".to_string(),
            ]
        );
    }

    #[test]
    fn test_web_links() {
        let contacts = parse_contacts("Ana, 5511999991111").unwrap();
        let campaign = Campaign::new(contacts, "Oi").unwrap();

        let lines = link_lines(&campaign, &FixedClock::at_hour(9), LinkMode::Web);

        assert_eq!(lines, vec!["https://web.whatsapp.com/send?phone=5511999991111&text=Oi"]);
    }

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::try_parse_from([
            "zapmsg-cli",
            "generate",
            "--topic",
            "Promoção de pizza",
            "--tone",
            "urgente",
            "--no-emoji",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                topic,
                tone,
                no_emoji,
            } => {
                assert_eq!(topic, "Promoção de pizza");
                assert_eq!(tone, Tone::Urgent);
                assert!(no_emoji);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        let result = Cli::try_parse_from(["zapmsg-cli", "generate", "--topic", "x", "--tone", "sarcastic"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_no() {
        assert!(is_no("n\n"));
        assert!(is_no(" Não "));
        assert!(!is_no("\n"));
        assert!(!is_no("s"));
    }
}
