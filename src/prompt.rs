//! Interactive prompts.
//!
//! The workflow and the output resolver only talk to the [`Prompter`] trait.
//! [`TerminalPrompter`] backs it with `dialoguer` widgets; tests drive the
//! same code with scripted answers.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select, Sort};

use crate::error::Result;

/// Source of user answers.
///
/// Any `Err` returned here is fatal for the whole session.
pub trait Prompter {
    /// Pick one of `options`.
    ///
    /// Returns `None` when the answer is not one of the options (for the
    /// terminal widget: the user pressed Esc or `q`).
    fn select(&mut self, message: &str, options: &[String]) -> Result<Option<usize>>;

    /// Pick any number of `options`, in the order the user wants them.
    ///
    /// An empty vector is a valid answer. `None` means the prompt was
    /// aborted.
    fn multi_select(&mut self, message: &str, options: &[String]) -> Result<Option<Vec<usize>>>;

    /// Free-text answer, pre-filled with `default`.
    fn input(&mut self, message: &str, default: &str) -> Result<String>;

    /// Yes/no question defaulting to "no".
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// `dialoguer`-backed prompter for a real terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter using the colorful theme.
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
    fn select(&mut self, message: &str, options: &[String]) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    fn multi_select(&mut self, message: &str, options: &[String]) -> Result<Option<Vec<usize>>> {
        let Some(selected) = MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .interact_opt()?
        else {
            return Ok(None);
        };

        // MultiSelect reports indices in list order, so let the user arrange them.
        if selected.len() < 2 {
            return Ok(Some(selected));
        }

        let names: Vec<&String> = selected.iter().map(|&idx| &options[idx]).collect();
        let order = Sort::with_theme(&self.theme)
            .with_prompt("Arrange the merge order (space to grab, enter to confirm)")
            .items(&names)
            .interact_opt()?;

        Ok(Some(match order {
            Some(order) => order.into_iter().map(|pos| selected[pos]).collect(),
            None => selected,
        }))
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}

#[cfg(any(test, feature = "test-util"))]
pub mod scripted {
    //! Prompter that replays canned answers.
    //!
    //! Available to unit tests and, with the `test-util` feature, to the
    //! integration tests.

    use super::Prompter;
    use crate::error::{CpdfError, Result};
    use std::collections::VecDeque;
    use std::io;

    /// One canned answer for [`ScriptedPrompter`].
    #[derive(Debug, Clone)]
    pub enum Answer {
        /// Answer to [`Prompter::select`].
        Select(Option<usize>),
        /// Answer to [`Prompter::multi_select`].
        MultiSelect(Option<Vec<usize>>),
        /// Answer to [`Prompter::input`].
        Input(String),
        /// Answer to [`Prompter::confirm`].
        Confirm(bool),
    }

    impl Answer {
        /// Shorthand for [`Answer::Input`].
        pub fn input(text: impl Into<String>) -> Self {
            Self::Input(text.into())
        }
    }

    /// Prompter that replays answers and fails like a closed terminal once
    /// they run out.
    ///
    /// Out-of-range picks come back as `None`, the way an aborted prompt
    /// does.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        /// Every prompt message shown so far.
        pub messages: Vec<String>,
    }

    impl ScriptedPrompter {
        /// Queue `answers` in order.
        pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                messages: Vec::new(),
            }
        }

        /// Answers not consumed yet.
        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        fn next(&mut self, message: &str) -> Result<Answer> {
            self.messages.push(message.to_string());
            self.answers.pop_front().ok_or_else(|| {
                CpdfError::prompt(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed",
                ))
            })
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select(&mut self, message: &str, options: &[String]) -> Result<Option<usize>> {
            match self.next(message)? {
                Answer::Select(choice) => Ok(choice.filter(|&idx| idx < options.len())),
                other => panic!("expected select answer for {message:?}, got {other:?}"),
            }
        }

        fn multi_select(
            &mut self,
            message: &str,
            options: &[String],
        ) -> Result<Option<Vec<usize>>> {
            match self.next(message)? {
                Answer::MultiSelect(choice) => {
                    Ok(choice.filter(|picked| picked.iter().all(|&idx| idx < options.len())))
                }
                other => panic!("expected multi-select answer for {message:?}, got {other:?}"),
            }
        }

        fn input(&mut self, message: &str, _default: &str) -> Result<String> {
            match self.next(message)? {
                Answer::Input(text) => Ok(text),
                other => panic!("expected input answer for {message:?}, got {other:?}"),
            }
        }

        fn confirm(&mut self, message: &str) -> Result<bool> {
            match self.next(message)? {
                Answer::Confirm(yes) => Ok(yes),
                other => panic!("expected confirm answer for {message:?}, got {other:?}"),
            }
        }
    }
}
