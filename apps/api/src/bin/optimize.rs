use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile_optimizer::client::clipboard::CommandClipboard;
use profile_optimizer::client::form::{FormStatus, InputKind, ListField, ProfileForm, ResultSection};
use profile_optimizer::client::http::AnalyzeClient;

#[derive(Parser)]
#[command(name = "optimize")]
#[command(about = "Submit a profile to the optimizer API and print the suggestions")]
struct Cli {
    /// Base URL of the optimizer API
    #[arg(long, env = "OPTIMIZER_URL", default_value = "http://localhost:8080")]
    server: String,

    /// LinkedIn profile URL (URL mode)
    #[arg(long, conflicts_with_all = ["headline", "summary", "experience", "skill"])]
    url: Option<String>,

    #[arg(long)]
    headline: Option<String>,

    #[arg(long)]
    summary: Option<String>,

    /// One experience line; repeat for more
    #[arg(long)]
    experience: Vec<String>,

    /// One skill; repeat for more
    #[arg(long)]
    skill: Vec<String>,

    /// Copy one section to the clipboard after printing
    #[arg(long, value_enum)]
    copy: Option<CopyTarget>,

    /// Command that receives copied text on stdin
    #[arg(long, env = "CLIPBOARD_CMD", default_value = "xclip -selection clipboard")]
    clipboard_cmd: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 90)]
    timeout: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum CopyTarget {
    Headline,
    Keywords,
    Experience,
    Summary,
}

impl From<CopyTarget> for ResultSection {
    fn from(target: CopyTarget) -> Self {
        match target {
            CopyTarget::Headline => ResultSection::Headline,
            CopyTarget::Keywords => ResultSection::Keywords,
            CopyTarget::Experience => ResultSection::Experience,
            CopyTarget::Summary => ResultSection::Summary,
        }
    }
}

fn build_form(cli: &Cli) -> ProfileForm {
    let mut form = ProfileForm::new();

    if let Some(url) = &cli.url {
        form.set_url(url.as_str());
        return form;
    }

    form.select_input(InputKind::Manual);
    if let Some(headline) = &cli.headline {
        form.set_headline(headline.as_str());
    }
    if let Some(summary) = &cli.summary {
        form.set_summary(summary.as_str());
    }
    fill_list(&mut form, ListField::Experience, &cli.experience);
    fill_list(&mut form, ListField::Skills, &cli.skill);
    form
}

fn fill_list(form: &mut ProfileForm, list: ListField, values: &[String]) {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            form.add_item(list);
        }
        form.set_item(list, index, value.as_str());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut form = build_form(&cli);

    if !form.can_submit() {
        bail!("Nothing to analyze: pass --url or at least one profile field");
    }

    let client = AnalyzeClient::new(cli.server.as_str(), Duration::from_secs(cli.timeout))?;
    eprintln!("Analyzing profile...");
    client.submit(&mut form).await?;

    if form.status() == FormStatus::Failed {
        let message = form
            .notification()
            .map(|n| n.description.clone())
            .unwrap_or_default();
        bail!("{message}");
    }

    let Some(result) = form.result().cloned() else {
        bail!("No result received");
    };

    for section in ResultSection::ALL {
        println!("== {} ==", section.title());
        match section {
            ResultSection::Keywords => println!("{}", result.keywords.join(", ")),
            ResultSection::Experience => {
                for point in &result.experience {
                    println!("• {point}");
                }
            }
            _ => println!("{}", section.copy_text(&result)),
        }
        println!();
    }

    if let Some(target) = cli.copy {
        let Some(clipboard) = CommandClipboard::from_command_line(&cli.clipboard_cmd) else {
            bail!("--clipboard-cmd is empty");
        };
        // Copy failure is reported but does not fail the run
        let _ = form.copy_section(target.into(), &clipboard);
        if let Some(note) = form.notification() {
            eprintln!("{}: {}", note.title, note.description);
        }
    }

    Ok(())
}
