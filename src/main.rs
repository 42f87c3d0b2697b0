use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use frame_studio::backend::HttpBackend;
use frame_studio::config::StudioConfig;
use frame_studio::script::SceneEdit;
use frame_studio::view::{self, Notice, NoticeLevel};
use frame_studio::wizard::{IntakeOutcome, ProgressSink, WizardController, WizardStep};

/// Prints loading phrases to stderr while a backend call is in flight.
struct TerminalProgress;

impl ProgressSink for TerminalProgress {
    fn started(&self, phrase: &str) {
        eprintln!("⏳ {phrase}...");
    }

    fn finished(&self) {}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = StudioConfig::from_env();

    eprintln!("🎬 FrameStudio v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {}", config.backend_url);
    eprintln!("   Paste a website URL to begin.");
    eprintln!("   Commands: next · back · select N · edit · regen [feedback] · scene N · restart · quit\n");

    let backend = Arc::new(HttpBackend::new(&config)?);
    let mut wizard =
        WizardController::new(backend, config).with_progress(Arc::new(TerminalProgress));

    render(&wizard);

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    eprint!("> ");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            // Empty input re-prompts locally, the focus-return analog.
            eprint!("> ");
            continue;
        }

        let command = line.split_whitespace().next().unwrap_or("");
        match command {
            "quit" | "exit" => break,
            "next" => {
                if let Err(e) = wizard.advance().await {
                    show(&Notice::error(e.to_string()));
                }
            }
            "back" => wizard.back(),
            "select" => select(&mut wizard, &line),
            "edit" => edit_concept(&mut wizard, &mut lines).await,
            "regen" => {
                let feedback = line.strip_prefix("regen").unwrap_or("").trim();
                match wizard.regenerate(feedback).await {
                    Ok(()) => show(&Notice::success("Concepts regenerated.")),
                    Err(e) => show(&Notice::error(e.to_string())),
                }
            }
            "scene" => edit_scene(&mut wizard, &line, &mut lines).await,
            "restart" => {
                wizard.reset();
                show(&Notice::info("Starting over."));
            }
            _ => {
                if wizard.state().step == WizardStep::Intake {
                    match wizard.submit_url(&line).await {
                        Ok(IntakeOutcome::Analyzed) => {
                            show(&Notice::success("Website analyzed."));
                        }
                        Ok(IntakeOutcome::EmptyUrl) => {
                            show(&Notice::error("Enter a website URL."));
                        }
                        Err(e) => show(&Notice::error(e.to_string())),
                    }
                } else {
                    show(&Notice::error(format!("Unknown command: {line}")));
                }
            }
        }

        render(&wizard);
        eprint!("> ");
    }

    Ok(())
}

fn render(wizard: &WizardController) {
    let view = view::step_view(wizard.state());
    println!("\n── {} ──", view.title);
    for line in &view.lines {
        println!("{line}");
    }
    println!();
}

fn show(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => eprintln!("ℹ️  {}", notice.message),
        NoticeLevel::Success => eprintln!("✅ {}", notice.message),
        NoticeLevel::Error => eprintln!("❌ {}", notice.message),
    }
}

fn select(wizard: &mut WizardController, line: &str) {
    let index = line
        .split_whitespace()
        .nth(1)
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1));
    match index {
        Some(index) if index < wizard.state().concepts.len() => {
            wizard.select_concept(index);
        }
        _ => show(&Notice::error("Usage: select N (a listed concept number)")),
    }
}

/// Modal edit flow: prompt per field, empty input keeps the current value.
async fn edit_concept(wizard: &mut WizardController, lines: &mut Lines<BufReader<Stdin>>) {
    let Some(mut draft) = wizard.edit_form() else {
        show(&Notice::error("No concept selected to edit."));
        return;
    };

    if let Some(title) = prompt_field(lines, "Title", &draft.title).await {
        draft.title = title;
    }
    if let Some(storyline) = prompt_field(lines, "Storyline", &draft.storyline).await {
        draft.storyline = storyline;
    }
    let characters = draft.characters.replace('\n', "; ");
    if let Some(edited) = prompt_field(lines, "Characters (separate with ;)", &characters).await {
        draft.characters = edited
            .split(';')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
    }
    if let Some(location) = prompt_field(lines, "Location", &draft.location).await {
        draft.location = location;
    }

    wizard.apply_edit(&draft);
    show(&Notice::success("Concept updated."));
}

/// Per-scene edit flow, mirroring the concept form.
async fn edit_scene(
    wizard: &mut WizardController,
    line: &str,
    lines: &mut Lines<BufReader<Stdin>>,
) {
    let index = line
        .split_whitespace()
        .nth(1)
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1));
    let Some(index) = index else {
        show(&Notice::error("Usage: scene N (a listed scene number)"));
        return;
    };
    let Some(scene) = wizard.state().script.scenes.get(index).cloned() else {
        show(&Notice::error("No such scene."));
        return;
    };

    let edit = SceneEdit {
        setting: prompt_field(lines, "Setting", &scene.setting).await,
        visual_description: prompt_field(lines, "Visual", &scene.visual_description).await,
        text_on_screen: prompt_field(lines, "On screen", &scene.text_on_screen).await,
        audio_cue: prompt_field(lines, "Audio", &scene.audio_cue).await,
    };
    wizard.update_scene(index, &edit);
    show(&Notice::success("Scene updated."));
}

/// Prompt for one field; `None` (empty input or EOF) keeps the current value.
async fn prompt_field(
    lines: &mut Lines<BufReader<Stdin>>,
    label: &str,
    current: &str,
) -> Option<String> {
    eprintln!("{label} [{current}]");
    eprint!("> ");
    match lines.next_line().await {
        Ok(Some(line)) => {
            let line = line.trim();
            if line.is_empty() {
                None
            } else {
                Some(line.to_string())
            }
        }
        _ => None,
    }
}
