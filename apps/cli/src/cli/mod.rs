//! Interactive terminal front end.
//!
//! One command per line over stdin. Commands mutate the session through the
//! reducer or call the backend; every failure prints and the loop keeps
//! going. `quit` (or EOF) is the only way out.

pub mod render;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::backend::BackendClient;
use crate::chat::{self, ChatSession};
use crate::config::Config;
use crate::filters::FilterDimension;
use crate::models::job::JobSummary;
use crate::session::flow::run_search;
use crate::session::{reduce, SessionEvent, SessionState, SortDirection, SortKey, SortSpec};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SkillAdd(String),
    SkillRemove(String),
    Skills,
    Search,
    Jobs,
    Job(usize),
    Filters,
    Filter(FilterDimension, String),
    Unfilter(FilterDimension, String),
    /// Keep only this value selected in the dimension.
    Only(FilterDimension, String),
    Clear(Option<FilterDimension>),
    Sort(SortSpec),
    Courses,
    Suggest(String),
    Upload(PathBuf),
    Chat(String),
    Help,
    Quit,
}

/// First whitespace-delimited word and the trimmed remainder. Values keep
/// their internal spaces ("filter location Pune, Maharashtra").
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(split) => (&input[..split], input[split..].trim_start()),
        None => (input, ""),
    }
}

fn dimension_keys() -> String {
    FilterDimension::ALL.map(|d| d.key()).join(", ")
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let (head, rest) = split_word(line);
    match head.to_lowercase().as_str() {
        "skill" => {
            let (action, name) = split_word(rest);
            match (action.to_lowercase().as_str(), name) {
                ("add", name) if !name.is_empty() => Ok(Command::SkillAdd(name.to_string())),
                ("rm", name) if !name.is_empty() => Ok(Command::SkillRemove(name.to_string())),
                _ => Err("usage: skill add <name> | skill rm <name>".to_string()),
            }
        }
        "skills" => Ok(Command::Skills),
        "search" => Ok(Command::Search),
        "jobs" => Ok(Command::Jobs),
        "job" => rest
            .parse::<usize>()
            .ok()
            .filter(|position| *position > 0)
            .map(Command::Job)
            .ok_or_else(|| "usage: job <n>".to_string()),
        "filters" => Ok(Command::Filters),
        "filter" => parse_filter_args("filter", rest).map(|(d, v)| Command::Filter(d, v)),
        "unfilter" => parse_filter_args("unfilter", rest).map(|(d, v)| Command::Unfilter(d, v)),
        "only" => parse_filter_args("only", rest).map(|(d, v)| Command::Only(d, v)),
        "clear" => {
            if rest.is_empty() {
                Ok(Command::Clear(None))
            } else {
                FilterDimension::parse(rest)
                    .map(|dimension| Command::Clear(Some(dimension)))
                    .ok_or_else(|| {
                        format!("unknown dimension '{rest}' (one of: {})", dimension_keys())
                    })
            }
        }
        "sort" => {
            const USAGE: &str = "usage: sort <match|salary|experience> [asc|desc]";
            let (key, direction) = split_word(rest);
            let key = SortKey::parse(key).ok_or_else(|| USAGE.to_string())?;
            let direction = if direction.is_empty() {
                SortDirection::default()
            } else {
                SortDirection::parse(direction).ok_or_else(|| USAGE.to_string())?
            };
            Ok(Command::Sort(SortSpec { key, direction }))
        }
        "courses" => Ok(Command::Courses),
        "suggest" => {
            if rest.is_empty() {
                Err("usage: suggest <prefix>".to_string())
            } else {
                Ok(Command::Suggest(rest.to_string()))
            }
        }
        "upload" => {
            if rest.is_empty() {
                Err("usage: upload <path>".to_string())
            } else {
                Ok(Command::Upload(PathBuf::from(rest)))
            }
        }
        "chat" => {
            if rest.is_empty() {
                Err("usage: chat <message>".to_string())
            } else {
                Ok(Command::Chat(rest.to_string()))
            }
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}'; type `help`")),
    }
}

fn parse_filter_args(verb: &str, rest: &str) -> Result<(FilterDimension, String), String> {
    let (dimension, value) = split_word(rest);
    let dimension = FilterDimension::parse(dimension).ok_or_else(|| {
        format!(
            "usage: {verb} <dimension> <value>, dimension one of: {}",
            dimension_keys()
        )
    })?;
    if value.is_empty() {
        return Err(format!("usage: {verb} <dimension> <value>"));
    }
    Ok((dimension, value.to_string()))
}

pub async fn run(config: &Config, backend: &BackendClient) -> Result<()> {
    let mut state = SessionState::new();
    let mut chat_session = ChatSession::new();

    render::print_welcome();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(usage) => {
                println!("{usage}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        execute(command, &mut state, &mut chat_session, config, backend).await;
    }
    Ok(())
}

async fn execute(
    command: Command,
    state: &mut SessionState,
    chat_session: &mut ChatSession,
    config: &Config,
    backend: &BackendClient,
) {
    match command {
        Command::SkillAdd(name) => {
            *state = reduce(state, SessionEvent::SkillAdded(name));
            render::print_skills(&state.skills);
        }
        Command::SkillRemove(name) => {
            *state = reduce(state, SessionEvent::SkillRemoved(name));
            render::print_skills(&state.skills);
        }
        Command::Skills => render::print_skills(&state.skills),
        Command::Search => {
            if state.skills.is_empty() {
                println!("Add at least one skill first (`skill add <name>`).");
                return;
            }
            println!("Searching...");
            *state = run_search(backend, state, config.search_limit).await;
            render::print_job_list(state);
            if !state.recommendations.is_empty() {
                println!("Course recommendations are ready; run `courses`.");
            }
        }
        Command::Jobs => render::print_job_list(state),
        Command::Job(position) => {
            let visible = state.visible_jobs();
            match visible.get(position - 1) {
                Some(job) => render::print_job_detail(position, job, &state.skills),
                None => println!(
                    "No job at position {position}; {} job(s) listed.",
                    visible.len()
                ),
            }
        }
        Command::Filters => render::print_facets(state),
        Command::Filter(dimension, value) => {
            *state = reduce(state, SessionEvent::FilterToggled { dimension, value });
            print_filter_summary(state);
        }
        Command::Unfilter(dimension, value) => {
            *state = reduce(state, SessionEvent::FilterRemoved { dimension, value });
            print_filter_summary(state);
        }
        Command::Only(dimension, value) => {
            *state = reduce(
                state,
                SessionEvent::FilterReplaced {
                    dimension,
                    values: vec![value],
                },
            );
            print_filter_summary(state);
        }
        Command::Clear(Some(dimension)) => {
            *state = reduce(state, SessionEvent::DimensionCleared(dimension));
            print_filter_summary(state);
        }
        Command::Clear(None) => {
            *state = reduce(state, SessionEvent::FiltersCleared);
            print_filter_summary(state);
        }
        Command::Sort(sort) => {
            *state = reduce(state, SessionEvent::SortChanged(sort));
            render::print_job_list(state);
        }
        Command::Courses => render::print_courses(state),
        Command::Suggest(prefix) => {
            if prefix.chars().count() < 2 {
                println!("Type at least 2 characters to get suggestions.");
                return;
            }
            match backend.search_suggestions(&prefix).await {
                Ok(response) => render::print_suggestions(&response.suggestions),
                Err(error) => {
                    debug!("Suggestion lookup failed: {error}");
                    render::print_suggestions(&[]);
                }
            }
        }
        Command::Upload(path) => handle_upload(state, chat_session, backend, &path).await,
        Command::Chat(message) => {
            let before = chat_session.messages.len();
            chat::send_turn(backend, chat_session, &message).await;
            render::print_chat_messages(&chat_session.messages[before..]);
        }
        Command::Help => render::print_help(),
        Command::Quit => {}
    }
}

fn print_filter_summary(state: &SessionState) {
    println!(
        "{} filter value(s) active; {} of {} job(s) visible.",
        state.filters.total_selected(),
        state.visible_jobs().len(),
        state.jobs.len()
    );
}

async fn handle_upload(
    state: &mut SessionState,
    chat_session: &mut ChatSession,
    backend: &BackendClient,
    path: &Path,
) {
    let response = match chat::run_upload(backend, chat_session, path).await {
        Ok(response) => response,
        Err(error) => {
            println!("{error}");
            return;
        }
    };

    if !response.message.is_empty() {
        println!("{}", response.message);
    }
    if let Some(profile) = &chat_session.profile {
        render::print_profile(profile);
    }
    if !response.recommendations.is_empty() {
        println!("Tips to improve your profile:");
        for tip in &response.recommendations {
            println!("  - {tip}");
        }
    }
    if response.jobs.is_empty() {
        return;
    }

    // Matched jobs replace the result set, exactly like a skill search.
    *state = reduce(state, SessionEvent::SearchStarted);
    *state = reduce(state, SessionEvent::JobsLoaded(response.jobs.clone()));
    render::print_job_list(state);

    let skills = chat_session
        .profile
        .as_ref()
        .map(|profile| profile.skills.clone())
        .unwrap_or_default();
    let summaries: Vec<JobSummary> = response.jobs.iter().map(JobSummary::from).collect();
    match backend.recommend_for_jobs(&skills, &summaries).await {
        Ok(recommendation) => {
            let covered: Vec<String> = recommendation
                .keywords_processed
                .into_iter()
                .filter(|skill| skill != "NA")
                .collect();
            *state = reduce(
                state,
                SessionEvent::RecommendationsLoaded {
                    courses: recommendation.recommendations,
                    covered_skills: covered,
                },
            );
            if !state.recommendations.is_empty() {
                println!("Course recommendations are ready; run `courses`.");
            }
        }
        Err(error) => {
            warn!("Course recommendation fetch failed: {error}");
            *state = reduce(
                state,
                SessionEvent::RecommendationsFailed(
                    "Course service unreachable; showing demo recommendations.".to_string(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skill_commands() {
        assert_eq!(
            parse_command("skill add Power BI"),
            Ok(Command::SkillAdd("Power BI".to_string()))
        );
        assert_eq!(
            parse_command("skill rm sql"),
            Ok(Command::SkillRemove("sql".to_string()))
        );
        assert!(parse_command("skill").is_err());
        assert!(parse_command("skill add").is_err());
    }

    #[test]
    fn test_parse_filter_keeps_spaces_in_value() {
        assert_eq!(
            parse_command("filter salary ₹30K - ₹50K"),
            Ok(Command::Filter(
                FilterDimension::Salary,
                "₹30K - ₹50K".to_string()
            ))
        );
        assert_eq!(
            parse_command("unfilter location Pune, Maharashtra"),
            Ok(Command::Unfilter(
                FilterDimension::Location,
                "Pune, Maharashtra".to_string()
            ))
        );
        assert_eq!(
            parse_command("only sector IT"),
            Ok(Command::Only(FilterDimension::Sector, "IT".to_string()))
        );
        assert!(parse_command("filter region x").is_err());
        assert!(parse_command("filter sector").is_err());
        assert!(parse_command("only").is_err());
    }

    #[test]
    fn test_parse_sort_defaults_to_descending() {
        assert_eq!(
            parse_command("sort salary asc"),
            Ok(Command::Sort(SortSpec {
                key: SortKey::Salary,
                direction: SortDirection::Asc,
            }))
        );
        assert_eq!(
            parse_command("sort match"),
            Ok(Command::Sort(SortSpec {
                key: SortKey::Match,
                direction: SortDirection::Desc,
            }))
        );
        assert!(parse_command("sort relevance").is_err());
    }

    #[test]
    fn test_parse_job_requires_a_position() {
        assert_eq!(parse_command("job 3"), Ok(Command::Job(3)));
        assert!(parse_command("job 0").is_err());
        assert!(parse_command("job first").is_err());
    }

    #[test]
    fn test_parse_clear_variants() {
        assert_eq!(parse_command("clear"), Ok(Command::Clear(None)));
        assert_eq!(
            parse_command("clear location"),
            Ok(Command::Clear(Some(FilterDimension::Location)))
        );
        assert!(parse_command("clear region").is_err());
    }

    #[test]
    fn test_parse_text_commands_require_text() {
        assert_eq!(
            parse_command("chat what jobs fit me?"),
            Ok(Command::Chat("what jobs fit me?".to_string()))
        );
        assert_eq!(
            parse_command("suggest py"),
            Ok(Command::Suggest("py".to_string()))
        );
        assert_eq!(
            parse_command("upload /tmp/cv.pdf"),
            Ok(Command::Upload(PathBuf::from("/tmp/cv.pdf")))
        );
        assert!(parse_command("chat").is_err());
        assert!(parse_command("suggest").is_err());
        assert!(parse_command("upload").is_err());
    }

    #[test]
    fn test_parse_is_case_insensitive_on_the_verb() {
        assert_eq!(parse_command("SEARCH"), Ok(Command::Search));
        assert_eq!(parse_command("Quit"), Ok(Command::Quit));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_unknown_verbs() {
        assert!(parse_command("dance").is_err());
    }
}
