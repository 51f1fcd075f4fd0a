//! # Interactive Prompts
//!
//! Prompting is split in three steps so the decision logic can be tested
//! without a terminal:
//!
//! 1. [`build_questions`] turns the command-line request into the list of
//!    questions that still need an answer. A question is left out when its
//!    option was given on the command line or when an earlier choice makes it
//!    moot.
//! 2. A [`Prompter`] asks them. [`TerminalPrompter`] uses `dialoguer`.
//! 3. [`resolve`] merges the answers back into immutable [`InitOptions`].

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{Error, Result};
use crate::options::{GitProtocol, InitOptions, InitRequest};
use crate::package_manager::PackageManager;
use crate::path::absolutize;
use crate::probe::ToolAvailability;
use crate::template::TemplateMode;

/// Identifies which option a question resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKey {
    Directory,
    Template,
    PackageManager,
    GitProtocol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Select { items: Vec<String>, default: usize },
    Text { default: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: String,
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Index into the question's `items`
    Choice(usize),
    Text(String),
}

pub type Answers = HashMap<QuestionKey, Answer>;

/// Asks a list of questions, in order.
///
/// Returns `None` when the user cancelled.
pub trait Prompter {
    fn ask(&mut self, questions: &[Question]) -> Result<Option<Answers>>;
}

/// Prompts on the attached terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, questions: &[Question]) -> Result<Option<Answers>> {
        let mut answers = Answers::new();
        for question in questions {
            let answer = match &question.kind {
                QuestionKind::Select { items, default } => {
                    let choice = cancel_on_interrupt(
                        Select::with_theme(&self.theme)
                            .with_prompt(&question.prompt)
                            .items(items)
                            .default(*default)
                            .interact_opt(),
                    )?;
                    match choice {
                        Some(Some(index)) => Answer::Choice(index),
                        _ => return Ok(None),
                    }
                }
                QuestionKind::Text { default } => {
                    let text = cancel_on_interrupt(
                        Input::<String>::with_theme(&self.theme)
                            .with_prompt(&question.prompt)
                            .default(default.clone())
                            .interact_text(),
                    )?;
                    match text {
                        Some(text) => Answer::Text(text),
                        None => return Ok(None),
                    }
                }
            };
            answers.insert(question.key, answer);
        }
        Ok(Some(answers))
    }
}

/// Ctrl-C while a prompt reads input counts as cancelling it.
fn cancel_on_interrupt<T>(result: std::result::Result<T, dialoguer::Error>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Package managers offered in the prompt, npm first when installed.
fn manager_choices(tools: &ToolAvailability) -> Vec<PackageManager> {
    PackageManager::ALL
        .into_iter()
        .filter(|manager| tools.is_installed(*manager))
        .collect()
}

/// Manager used when the question is not asked.
fn default_manager(tools: &ToolAvailability) -> PackageManager {
    if tools.is_installed(PackageManager::DEFAULT) {
        PackageManager::DEFAULT
    } else {
        tools
            .package_managers
            .first()
            .copied()
            .unwrap_or(PackageManager::DEFAULT)
    }
}

/// Questions still needing an answer, in the fixed order
/// directory, template, package manager, git protocol.
pub fn build_questions(
    request: &InitRequest,
    tools: &ToolAvailability,
    has_repositories: bool,
) -> Vec<Question> {
    let mut questions = Vec::new();

    if request.dir.is_none() && !request.yes {
        questions.push(Question {
            key: QuestionKey::Directory,
            prompt: "Project directory".to_string(),
            kind: QuestionKind::Text {
                default: ".".to_string(),
            },
        });
    }

    if request.mode == TemplateMode::Unspecified {
        questions.push(Question {
            key: QuestionKey::Template,
            prompt: "Select template".to_string(),
            kind: QuestionKind::Select {
                items: TemplateMode::CHOICES
                    .iter()
                    .map(|mode| format!("{} ({})", mode, mode.description()))
                    .collect(),
                default: 0,
            },
        });
    }

    let choices = manager_choices(tools);
    if request.package_manager.is_none() && !request.yes && choices.len() > 1 {
        let default = choices
            .iter()
            .position(|manager| *manager == PackageManager::DEFAULT)
            .unwrap_or(0);
        questions.push(Question {
            key: QuestionKey::PackageManager,
            prompt: "Package manager".to_string(),
            kind: QuestionKind::Select {
                items: choices.iter().map(|manager| manager.to_string()).collect(),
                default,
            },
        });
    }

    if has_repositories && request.git_protocol.is_none() && !request.yes {
        questions.push(Question {
            key: QuestionKey::GitProtocol,
            prompt: "Git protocol for additional repositories".to_string(),
            kind: QuestionKind::Select {
                items: GitProtocol::ALL.iter().map(|p| p.to_string()).collect(),
                default: 0,
            },
        });
    }

    questions
}

/// Merge the request with prompt answers into the final options.
pub fn resolve(
    request: &InitRequest,
    tools: &ToolAvailability,
    answers: &Answers,
) -> Result<InitOptions> {
    let dir = match (&request.dir, answers.get(&QuestionKey::Directory)) {
        (Some(dir), _) => dir.clone(),
        (None, Some(Answer::Text(text))) if !text.trim().is_empty() => PathBuf::from(text.trim()),
        _ => PathBuf::from("."),
    };

    let mode = match (request.mode, answers.get(&QuestionKey::Template)) {
        (TemplateMode::Unspecified, Some(Answer::Choice(index))) => *TemplateMode::CHOICES
            .get(*index)
            .ok_or_else(|| invalid_choice("template", *index))?,
        (TemplateMode::Unspecified, _) => {
            return Err(Error::InvalidOption {
                option: "template".to_string(),
                message: "no template was selected".to_string(),
            })
        }
        (mode, _) => mode,
    };

    let package_manager = match (request.package_manager, answers.get(&QuestionKey::PackageManager)) {
        (Some(manager), _) => manager,
        (None, Some(Answer::Choice(index))) => *manager_choices(tools)
            .get(*index)
            .ok_or_else(|| invalid_choice("package manager", *index))?,
        (None, _) => default_manager(tools),
    };

    let git_protocol = match (request.git_protocol, answers.get(&QuestionKey::GitProtocol)) {
        (Some(protocol), _) => protocol,
        (None, Some(Answer::Choice(index))) => *GitProtocol::ALL
            .get(*index)
            .ok_or_else(|| invalid_choice("git protocol", *index))?,
        (None, _) => GitProtocol::default(),
    };

    Ok(InitOptions {
        mode,
        dir: absolutize(&request.cwd, &dir),
        compiler_version: request.compiler_version.clone(),
        yes: request.yes,
        package_manager,
        skip_build: request.skip_build,
        git_protocol,
    })
}

fn invalid_choice(option: &str, index: usize) -> Error {
    Error::InvalidOption {
        option: option.to_string(),
        message: format!("choice {index} is out of range"),
    }
}

/// Replays canned answers and records what was asked.
#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    pub answers: Option<Answers>,
    pub asked: Vec<QuestionKey>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn answering(answers: Vec<(QuestionKey, Answer)>) -> Self {
        Self {
            answers: Some(answers.into_iter().collect()),
            asked: Vec::new(),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            answers: None,
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, questions: &[Question]) -> Result<Option<Answers>> {
        self.asked = questions.iter().map(|q| q.key).collect();
        Ok(self.answers.clone())
    }
}
