//! Radical Interpreter - line-oriented terminal front end.
//!
//! Usage: `radical-interpreter [config.toml]`. Without an argument the path is read
//! from `RADICAL_INTERPRETER_CONFIG`; without either, defaults apply.

use interpretation_rules::{field_manual, fill, Language, TextKey};
use interpreter_core::{
    FinalReport, GameSession, GameState, Interpreter, InterpreterConfig, CONFIG_ENV,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Start(usize),
    Next,
    Define(usize, String),
    Theory,
    Submit,
    Retry,
    Advance,
    Report,
    Restart,
    Lang(String),
    Manual,
    Help,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        // Levels are numbered from 1 on screen.
        "start" => match rest {
            "" => Command::Start(0),
            n => match n.parse::<usize>() {
                Ok(level) => Command::Start(level.saturating_sub(1)),
                Err(_) => Command::Unknown,
            },
        },
        "next" => Command::Next,
        "define" => match rest.split_once(char::is_whitespace) {
            Some((n, text)) => match n.parse::<usize>() {
                Ok(index) if index > 0 => Command::Define(index - 1, text.trim().to_string()),
                _ => Command::Unknown,
            },
            None => Command::Unknown,
        },
        "theory" => Command::Theory,
        "submit" => Command::Submit,
        "retry" => Command::Retry,
        "advance" => Command::Advance,
        "report" => Command::Report,
        "restart" => Command::Restart,
        "lang" => Command::Lang(rest.to_string()),
        "manual" => Command::Manual,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    };
    Some(command)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from)
}

fn main() -> ExitCode {
    init_logging();

    let config = match config_path() {
        Some(path) => match InterpreterConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "failed to load config");
                return ExitCode::FAILURE;
            }
        },
        None => InterpreterConfig::default(),
    };

    let mut interpreter = match Interpreter::from_config(&config) {
        Ok(interpreter) => interpreter,
        Err(e) => {
            error!(error = %e, "failed to start");
            return ExitCode::FAILURE;
        }
    };

    let mut session = interpreter.new_session(config.language);
    info!(session = %session.id(), "session created");
    print_intro(&mut interpreter, &session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };
        if command == Command::Quit {
            break;
        }
        dispatch(&mut interpreter, &mut session, command);
    }

    ExitCode::SUCCESS
}

fn dispatch(interpreter: &mut Interpreter, session: &mut GameSession, command: Command) {
    let lang = session.language();

    match command {
        Command::Start(level) => {
            println!("{}", lang.text(TextKey::GeneratingScenario));
            match interpreter.begin(session, level) {
                Ok(GameState::Playing) => print_level(session),
                Ok(_) => print_intro(interpreter, session),
                Err(e) => deny(lang, e),
            }
        }
        Command::Next => match session.reveal_next() {
            Ok(_) => print_observation(session),
            Err(e) => deny(lang, e),
        },
        Command::Define(index, text) => {
            let utterance = session.observed_utterances().get(index).map(|u| u.to_string());
            match utterance {
                Some(utterance) => match session.define(&utterance, text) {
                    Ok(()) => print_theory(session),
                    Err(e) => deny(lang, e),
                },
                None => println!("{}", lang.text(TextKey::ActionDenied)),
            }
        }
        Command::Theory => print_theory(session),
        Command::Submit => {
            println!("{}", lang.text(TextKey::PeerReviewing));
            match interpreter.submit(session) {
                Ok(_) => print_result(session),
                Err(e) => deny(lang, e),
            }
        }
        Command::Retry => match session.retry() {
            Ok(()) => {
                print_observation(session);
                print_theory(session);
            }
            Err(e) => deny(lang, e),
        },
        Command::Advance => {
            println!("{}", lang.text(TextKey::GeneratingScenario));
            match interpreter.advance(session) {
                Ok(GameState::Playing) => print_level(session),
                Ok(_) => print_intro(interpreter, session),
                Err(e) => deny(lang, e),
            }
        }
        Command::Report => {
            let report = FinalReport::compile(session.campaign(), lang, session.level_count());
            println!("{}", report.to_text());
        }
        Command::Restart => match session.restart() {
            Ok(()) => print_intro(interpreter, session),
            Err(e) => deny(lang, e),
        },
        Command::Lang(code) => match code.parse::<Language>() {
            Ok(language) => match interpreter.change_language(session, language) {
                Ok(()) => print_intro(interpreter, session),
                Err(e) => deny(lang, e),
            },
            Err(e) => println!("{}", e),
        },
        Command::Manual => println!("{}", field_manual(lang)),
        Command::Help => println!("{}", lang.text(TextKey::Help)),
        Command::Quit => {}
        Command::Unknown => println!("{}", lang.text(TextKey::UnknownCommand)),
    }
}

fn deny(lang: Language, reason: impl std::fmt::Display) {
    println!("{}: {}", lang.text(TextKey::ActionDenied), reason);
}

fn print_intro(interpreter: &mut Interpreter, session: &GameSession) {
    let lang = session.language();
    println!("== {} ==", lang.text(TextKey::Title));
    println!("{}", lang.text(TextKey::Tagline));
    println!();
    println!("{}", lang.text(TextKey::CoreDirectives));
    for key in [
        TextKey::DirectiveObservation,
        TextKey::DirectiveTSchema,
        TextKey::DirectiveCharity,
    ] {
        println!("  - {}", lang.text(key));
    }
    println!();

    let languages: Vec<String> = Language::display_order(interpreter.rng_mut())
        .into_iter()
        .map(|l| format!("{} ({})", l.native_name(), l.code()))
        .collect();
    println!("lang: {}", languages.join(" | "));
    println!("[start] {}", lang.text(TextKey::BeginSimulation));
    println!("[manual] {}", lang.text(TextKey::ManualTitle));
    println!("{}", lang.text(TextKey::Help));
}

fn print_level(session: &GameSession) {
    let lang = session.language();
    if let Some(scenario) = session.scenario() {
        let label = fill(
            lang.text(TextKey::LevelLabel),
            &[
                ("level", &(session.level_index() + 1).to_string()),
                ("total", &session.level_count().to_string()),
            ],
        );
        println!();
        println!("{} - {} / {}", label, scenario.language_name, scenario.alien_name);
    }
    print_observation(session);
}

fn print_observation(session: &GameSession) {
    let lang = session.language();
    let (Some(scenario), Some(observation)) = (session.scenario(), session.current_observation())
    else {
        return;
    };

    let counter = fill(
        lang.text(TextKey::ObservationLog),
        &[
            ("current", &(session.reveal_index() + 1).to_string()),
            ("total", &scenario.observations.len().to_string()),
        ],
    );
    let entry = fill(
        lang.text(TextKey::LogEntry),
        &[("id", &observation.id.to_string())],
    );

    println!();
    println!("[{}] {}", counter, entry);
    println!("  {}  {}", observation.visual_emojis, observation.context_description);
    println!("  >> \"{}\"", observation.utterance);

    if session.can_reveal() {
        println!("[next] {}", lang.text(TextKey::NextObservation));
    } else if session.can_submit() {
        println!("[submit] {}", lang.text(TextKey::SubmitForReview));
    }
}

fn print_theory(session: &GameSession) {
    let lang = session.language();
    println!();
    println!("== {} ==", lang.text(TextKey::TheoryBuilder));
    println!("{}", lang.text(TextKey::TheoryInstruction));
    for (n, utterance) in session.observed_utterances().into_iter().enumerate() {
        let head = fill(lang.text(TextKey::IsTrueIff), &[("utterance", utterance)]);
        println!(
            "  {}. {} {}",
            n + 1,
            head,
            session.theory().condition_for(utterance)
        );
    }
}

fn print_result(session: &GameSession) {
    let lang = session.language();
    let Some(result) = session.evaluation() else {
        return;
    };

    println!();
    let verdict = if result.is_coherent {
        TextKey::TheoryAccepted
    } else {
        TextKey::TheoryRejected
    };
    println!("== {} ==", lang.text(verdict));
    println!(
        "{}",
        fill(
            lang.text(TextKey::CoherenceScore),
            &[("score", &result.score.to_string())]
        )
    );
    println!();
    println!("{}", lang.text(TextKey::PeerReviewFeedback));
    println!("{}", result.feedback);
    println!();
    println!("{}", lang.text(TextKey::IndeterminacyNote));
    println!("{}", lang.text(TextKey::IndeterminacyQuote));
    if !result.alternative_theory.is_empty() {
        println!("{}", result.alternative_theory);
    }

    if let Some(scenario) = session.scenario() {
        if !scenario.takeaways.is_empty() {
            println!();
            println!("{}", lang.text(TextKey::Takeaways));
            for takeaway in &scenario.takeaways {
                println!("  * {}", takeaway);
            }
        }
    }

    println!();
    if session.state() == GameState::Failure {
        println!("[retry] {}", lang.text(TextKey::ReviseTheory));
    }
    if session.can_advance() {
        println!("[advance] {}", lang.text(TextKey::NextLevel));
    } else if session.is_campaign_complete() {
        println!("{}", lang.text(TextKey::AllLevelsComplete));
        println!("[report] {}", lang.text(TextKey::FinalReport));
    }
    if session.is_campaign_complete() {
        println!("[restart] {}", lang.text(TextKey::RestartCampaign));
    } else {
        println!("[restart] {}", lang.text(TextKey::NewSimulation));
    }
}
