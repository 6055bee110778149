//! Built-in portfolio commands.
//!
//! These are always available. The table is built once on first access and
//! cached for the lifetime of the process.

use std::sync::OnceLock;

use crate::command::context::{CommandContext, Directive, Effect};
use crate::command::registry::{CommandCategory, CommandSpec};
use crate::host::NotificationSeverity;
use crate::transcript::LineKind;

/// Static storage for builtin commands (initialized once).
static BUILTIN_COMMANDS: OnceLock<Vec<CommandSpec>> = OnceLock::new();

/// Returns all builtin commands, in the order `help` and completion show them.
pub fn builtin_commands() -> &'static [CommandSpec] {
    use CommandCategory::*;

    BUILTIN_COMMANDS.get_or_init(|| {
        vec![
            CommandSpec::new("help", &["?", "man"], "help [command]", "Show available commands", Session, help),
            CommandSpec::new("whoami", &[], "whoami", "Who is behind this terminal", Portfolio, whoami),
            CommandSpec::new("about", &["bio"], "about", "A short biography", Portfolio, about),
            CommandSpec::new("skills", &["stack"], "skills", "Languages, frameworks and tools", Portfolio, skills),
            CommandSpec::new("projects", &["work", "portfolio"], "projects", "Selected projects", Portfolio, projects),
            CommandSpec::new("experience", &["exp", "jobs"], "experience", "Work history", Portfolio, experience),
            CommandSpec::new("education", &["edu"], "education", "Degrees and schools", Portfolio, education),
            CommandSpec::new("social", &["links"], "social", "Where to find me online", Portfolio, social),
            CommandSpec::new("ls", &["sections"], "ls", "List page sections", Navigation, list_sections),
            CommandSpec::new("goto", &["cd", "open", "nav"], "goto <section>", "Scroll the page to a section", Navigation, goto),
            CommandSpec::new("theme", &[], "theme", "Toggle light/dark theme", Navigation, theme),
            CommandSpec::new("resume", &["cv", "download"], "resume", "Download my resume", Contact, resume),
            CommandSpec::new("contact", &["mail", "message"], "contact", "Send me a message from here", Contact, contact),
            CommandSpec::new("tutorial", &["tour", "guide"], "tutorial [skip]", "Start (or dismiss) the guided tour", Tutorial, tutorial),
            CommandSpec::new("next", &["continue"], "next", "Continue to the next tour step", Tutorial, next),
            CommandSpec::new("skip", &[], "skip [all]", "Skip a tour step, or the whole tour", Tutorial, skip),
            CommandSpec::new("exit", &["quit-tutorial"], "exit", "Leave the guided tour", Tutorial, exit),
            CommandSpec::new("history", &[], "history", "Commands entered this session", Session, history),
            CommandSpec::new("clear", &["cls"], "clear", "Clear the screen", Session, clear),
            CommandSpec::new("echo", &[], "echo <text>", "Print text", Session, echo),
            CommandSpec::new("play", &["game", "games"], "play <game>", "Launch a mini game", Fun, play),
            CommandSpec::new("chat", &["bot", "ai"], "chat", "Open the chat assistant", Fun, chat),
            CommandSpec::new("neofetch", &["fetch"], "neofetch", "System information, portfolio edition", Fun, neofetch),
            CommandSpec::new("sudo", &[], "sudo <command>", "Ask nicely", Fun, sudo),
        ]
    })
}

fn help(ctx: &mut CommandContext<'_>, args: &[String]) {
    if let Some(topic) = args.first() {
        let Some(spec) = ctx.registry.lookup(topic) else {
            ctx.error(format!("help: no such command '{}'", topic));
            let candidates = ctx.suggestions.correct(topic);
            if !candidates.is_empty() {
                ctx.info(format!("Did you mean: {}?", candidates.join(", ")));
            }
            return;
        };
        let (name, usage, description, aliases) =
            (spec.name, spec.usage, spec.description, spec.aliases);
        ctx.success(format!("{} - {}", name, description));
        ctx.output(format!("Usage: {}", usage));
        if !aliases.is_empty() {
            ctx.output(format!("Aliases: {}", aliases.join(", ")));
        }
        return;
    }

    ctx.output("Available commands:");
    let registry = ctx.registry;
    for category in CommandCategory::all() {
        let commands: Vec<_> = registry.in_category(*category).collect();
        if commands.is_empty() {
            continue;
        }
        ctx.info(format!("  {}:", category.label()));
        for spec in commands {
            ctx.clickable(
                LineKind::Output,
                format!("    {:<18} {}", spec.usage, spec.description),
                spec.name,
            );
        }
    }
    ctx.info("Tab completes, ↑/↓ browse history, `help <command>` shows details.");
}

fn whoami(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    ctx.success(profile.handle.clone());
    ctx.output(format!("{} · {}", profile.name, profile.role));
    ctx.info(profile.tagline.clone());
}

fn about(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    for line in &profile.bio {
        ctx.output(line.clone());
    }
    ctx.info(format!("Based in {}.", profile.location));
}

fn skills(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    if profile.skills.is_empty() {
        ctx.info("No skills listed yet.");
        return;
    }
    let width = profile
        .skills
        .iter()
        .map(|group| group.category.len())
        .max()
        .unwrap_or(0);
    for group in &profile.skills {
        ctx.output(format!(
            "  {:<width$}  {}",
            group.category,
            group.items.join(" · "),
            width = width
        ));
    }
}

fn projects(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    if profile.projects.is_empty() {
        ctx.info("Nothing public yet. Check back soon.");
        return;
    }
    for project in &profile.projects {
        ctx.success(format!("▸ {}", project.name));
        ctx.output(format!("    {}", project.summary));
        if !project.stack.is_empty() {
            ctx.info(format!("    stack: {}", project.stack.join(", ")));
        }
        if let Some(link) = &project.link {
            ctx.info(format!("    {}", link));
        }
    }
}

fn experience(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    for job in &profile.experience {
        ctx.success(format!("{} @ {}", job.role, job.company));
        ctx.info(format!("    {}", job.period));
        if !job.summary.is_empty() {
            ctx.output(format!("    {}", job.summary));
        }
    }
}

fn education(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    for entry in &profile.education {
        ctx.success(entry.degree.clone());
        ctx.output(format!("    {} ({})", entry.school, entry.period));
    }
}

fn social(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    for link in &profile.socials {
        ctx.output(format!("  {:<10} {}", link.label, link.url));
    }
    ctx.output(format!("  {:<10} {}", "Email", profile.email));
}

fn list_sections(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    for section in &profile.sections {
        ctx.clickable(
            LineKind::Output,
            format!("  {}/", section.id),
            format!("goto {}", section.id),
        );
    }
}

fn goto(ctx: &mut CommandContext<'_>, args: &[String]) {
    let profile = ctx.profile;
    let Some(target) = args.first() else {
        ctx.error("goto: missing section. Usage: goto <section>");
        ctx.info(format!("Sections: {}", profile.section_ids().join(", ")));
        return;
    };
    let target = target.trim_end_matches('/');
    match profile.section(target) {
        Some(section) => {
            ctx.success(format!("Navigating to {}...", section.title));
            ctx.effect(Effect::Navigate {
                section: section.id.clone(),
            });
        }
        None => {
            ctx.error(format!("goto: no such section '{}'", target));
            ctx.info(format!("Sections: {}", profile.section_ids().join(", ")));
        }
    }
}

fn theme(ctx: &mut CommandContext<'_>, _args: &[String]) {
    ctx.success("Theme toggled.");
    ctx.effect(Effect::ToggleTheme);
}

fn resume(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    let resume = &profile.resume;
    ctx.success(format!("Downloading {}...", resume.file_name));
    ctx.effect(Effect::Download {
        path: resume.path.clone(),
        suggested_name: resume.file_name.clone(),
    });
}

fn contact(ctx: &mut CommandContext<'_>, _args: &[String]) {
    ctx.directive(Directive::StartDialogue);
}

fn tutorial(ctx: &mut CommandContext<'_>, args: &[String]) {
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None | Some("start") => ctx.directive(Directive::StartTutorial),
        Some("skip") => ctx.directive(Directive::DeclineTutorial),
        Some(other) => {
            ctx.error(format!("tutorial: unknown option '{}'", other));
            ctx.info("Usage: tutorial [skip]");
        }
    }
}

fn next(ctx: &mut CommandContext<'_>, _args: &[String]) {
    if ctx.tutorial_active() {
        ctx.directive(Directive::ContinueTutorial);
    } else {
        ctx.error("next: no tour in progress. Type `tutorial` to start one.");
    }
}

fn skip(ctx: &mut CommandContext<'_>, args: &[String]) {
    if !ctx.tutorial_active() {
        ctx.error("skip: no tour in progress. Type `tutorial` to start one.");
        return;
    }
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None => ctx.directive(Directive::SkipTutorialStep),
        Some("all") => ctx.directive(Directive::SkipTutorial),
        Some(other) => {
            ctx.error(format!("skip: unknown option '{}'", other));
            ctx.info("Usage: skip [all]");
        }
    }
}

fn exit(ctx: &mut CommandContext<'_>, _args: &[String]) {
    if ctx.tutorial_active() {
        ctx.directive(Directive::ExitTutorial);
    } else {
        ctx.info("Nothing to exit. Type `help` to see what you can do here.");
    }
}

fn history(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let history = ctx.history;
    if history.is_empty() {
        ctx.info("No commands yet.");
        return;
    }
    for (position, command) in history.entries().iter().enumerate() {
        ctx.clickable(
            LineKind::Output,
            format!("  {:>3}  {}", position + 1, command),
            command.clone(),
        );
    }
}

fn clear(ctx: &mut CommandContext<'_>, _args: &[String]) {
    ctx.directive(Directive::ClearTranscript);
}

fn echo(ctx: &mut CommandContext<'_>, args: &[String]) {
    ctx.output(args.join(" "));
}

fn play(ctx: &mut CommandContext<'_>, args: &[String]) {
    let profile = ctx.profile;
    let Some(requested) = args.first() else {
        ctx.output("Available games:");
        for game in &profile.games {
            ctx.clickable(LineKind::Output, format!("  {}", game), format!("play {}", game));
        }
        return;
    };
    match profile.game(requested) {
        Some(game) => {
            ctx.success(format!("Launching {}...", game));
            ctx.effect(Effect::OpenSubmodule {
                name: game.to_string(),
            });
        }
        None => {
            ctx.error(format!("play: no such game '{}'", requested));
            ctx.info(format!("Games: {}", profile.games.join(", ")));
        }
    }
}

fn chat(ctx: &mut CommandContext<'_>, _args: &[String]) {
    ctx.info("Opening the chat assistant...");
    ctx.effect(Effect::OpenSubmodule {
        name: "chatbot".to_string(),
    });
}

fn neofetch(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let profile = ctx.profile;
    let logo = [
        r"   _____    ",
        r"  |  _  |   ",
        r"  | |_| |   ",
        r"  |_____|   ",
        r"   /   \    ",
    ];
    let languages = profile
        .skills
        .first()
        .map(|group| group.items.join(", "))
        .unwrap_or_default();
    let facts = [
        format!("{}@portfolio", profile.handle),
        format!("Role: {}", profile.role),
        format!("Location: {}", profile.location),
        format!("Languages: {}", languages),
        format!("Projects: {}", profile.projects.len()),
    ];
    for (art, fact) in logo.iter().zip(facts.iter()) {
        ctx.ascii(format!("{}{}", art, fact));
    }
}

fn sudo(ctx: &mut CommandContext<'_>, _args: &[String]) {
    let handle = ctx.profile.handle.clone();
    ctx.error(format!(
        "guest is not in the sudoers file. This incident will be reported to {}.",
        handle
    ));
    ctx.effect(Effect::Notify {
        text: format!("Incident reported to {}", handle),
        severity: NotificationSeverity::Warning,
    });
}
