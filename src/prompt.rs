//! Interactive prompting as an injected capability.
//!
//! Commands never talk to stdin/stdout directly; they go through [`Prompt`]
//! so tests can script every answer. The terminal implementation blocks the
//! (only) thread while waiting for input.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Source of interactive answers.
pub trait Prompt {
    /// Free-text input with a default used for empty answers.
    fn input(&mut self, message: &str, default: &str) -> Result<String>;

    /// Pick one entry out of a closed choice set.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<String>;
}

/// Stdin/stdout prompt for normal CLI runs.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        print!("{message} ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let answer = read_line()?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<String> {
        println!("{message}");
        for (index, choice) in choices.iter().enumerate() {
            println!("  {}) {}", index + 1, choice);
        }
        print!("Enter a number (1-{}): ", choices.len());
        std::io::stdout().flush().context("failed to flush stdout")?;

        let answer = read_line()?;
        let index: usize = answer
            .parse()
            .with_context(|| format!("`{answer}` is not a number"))?;
        if index == 0 || index > choices.len() {
            bail!("selection out of range: {index}");
        }
        Ok(choices[index - 1].clone())
    }
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Resolve which project a command operates on.
///
/// With exactly one project there is nothing to ask — selection is
/// deterministic and no prompt occurs.
pub fn select_project(names: &[String], prompt: &mut dyn Prompt) -> Result<String> {
    match names {
        [] => bail!("no projects found in the workspace configuration"),
        [only] => Ok(only.clone()),
        _ => prompt.select("Select a project:", names),
    }
}

/// Scripted prompt for tests: answers are consumed front to back, and
/// selections are verified against the offered choice set.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn input(&mut self, _message: &str, default: &str) -> Result<String> {
        let answer = self.answers.pop_front().context("no scripted answer left")?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn select(&mut self, _message: &str, choices: &[String]) -> Result<String> {
        let answer = self.answers.pop_front().context("no scripted answer left")?;
        if !choices.contains(&answer) {
            bail!("scripted answer `{answer}` not among choices {choices:?}");
        }
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_project_selected_without_prompt() {
        // An empty script would fail if select() were consulted.
        let mut prompt = ScriptedPrompt::default();
        let names = vec!["demo".to_string()];
        assert_eq!(select_project(&names, &mut prompt).unwrap(), "demo");
    }

    #[test]
    fn test_multiple_projects_go_through_prompt() {
        let mut prompt = ScriptedPrompt::with_answers(&["admin"]);
        let names = vec!["demo".to_string(), "admin".to_string()];
        assert_eq!(select_project(&names, &mut prompt).unwrap(), "admin");
    }

    #[test]
    fn test_no_projects_is_an_error() {
        let mut prompt = ScriptedPrompt::default();
        assert!(select_project(&[], &mut prompt).is_err());
    }

    #[test]
    fn test_scripted_input_falls_back_to_default() {
        let mut prompt = ScriptedPrompt::with_answers(&[""]);
        assert_eq!(prompt.input("Source locale:", "en").unwrap(), "en");
    }
}
