//! The interactive session: an unbounded loop of prompt turns.
//!
//! Each turn collects an input file and a watermark type, validates the
//! involved files, runs the transformation to completion, then offers a
//! single follow-up edit on the freshly produced file. Answering the
//! readiness question with "no" ends the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use imgmark_processing::{derive_output_name, ImageStore, Operation};

use crate::prompt::Prompter;

pub const WELCOME: &str = "Hi! Welcome to \"Watermark manager\". Copy your image files to `/img` folder. Then you'll be able to use them in the app. Are you ready?";

const WATERMARK_CHOICES: &[&str] = &["Text watermark", "Image watermark"];
const EDIT_CHOICES: &[&str] = &[
    "Make image brighter",
    "Increase contrast",
    "Make image b&w",
    "Invert image",
];

const GENERIC_FAILURE: &str = "Something went wrong... Try again!";
const RANGE_WARNING: &str = "The value must be from -1 to 1. Try again.";

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    store: ImageStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(prompter: Prompter<R, W>, store: ImageStore) -> Self {
        Self { prompter, store }
    }

    /// Run prompt turns until the user declines the readiness question.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            if !self.prompter.confirm(WELCOME, true)? {
                return Ok(());
            }
            self.turn().await?;
        }
    }

    async fn turn(&mut self) -> Result<()> {
        let input = self
            .prompter
            .input_with_default("What file do you want to mark?", "test.jpg")?;
        let choice = self
            .prompter
            .select("Choose a watermark type:", WATERMARK_CHOICES)?;

        // The working filename only advances once validation has passed.
        let mut working = input.clone();

        if choice == 0 {
            let text = self.prompter.input("Type your watermark text:")?;
            match self.store.resolve_existing(&input) {
                Ok(_) => {
                    working = self
                        .transform(&input, Operation::TextWatermark { text })
                        .await?;
                }
                Err(error) => self.prompter.say(&error.to_string())?,
            }
        } else {
            let watermark = self
                .prompter
                .input_with_default("Type your watermark name:", "logo.png")?;
            // Input file is checked first, then the watermark file.
            let validated = self
                .store
                .resolve_existing(&input)
                .and_then(|_| self.store.resolve_existing(&watermark));
            match validated {
                Ok(_) => {
                    working = self
                        .transform(&input, Operation::ImageWatermark { watermark })
                        .await?;
                }
                Err(error) => self.prompter.say(&error.to_string())?,
            }
        }

        if !self.prompter.confirm("Do you want to edit file?", true)? {
            return Ok(());
        }

        let edit = self.prompter.select("Choose an edit:", EDIT_CHOICES)?;
        let op = match edit {
            0 => Operation::Brighten {
                value: self.ranged_value("Enter value from -1 to 1 to change brightness")?,
            },
            1 => Operation::Contrast {
                value: self.ranged_value("Enter value from -1 to 1 to change contrast")?,
            },
            2 => Operation::Grayscale,
            _ => Operation::Invert,
        };
        self.transform(&working, op).await?;

        Ok(())
    }

    /// Run one transformation to completion. Prints the success line or
    /// the generic failure line; either way the returned working name is
    /// the derived output name, so a failed edit chains onto a name that
    /// may not exist (and then fails with the same generic line).
    async fn transform(&mut self, input: &str, op: Operation) -> Result<String> {
        let store = self.store.clone();
        let input_owned = input.to_string();
        let task_op = op.clone();
        let result =
            tokio::task::spawn_blocking(move || {
                imgmark_processing::apply(&store, &input_owned, &task_op)
            })
            .await?;

        match result {
            Ok(output) => {
                self.prompter.say(op.success_message())?;
                Ok(output)
            }
            Err(error) => {
                tracing::warn!(%error, input = input, "transformation failed");
                self.prompter.say(GENERIC_FAILURE)?;
                Ok(derive_output_name(input, op.suffix()))
            }
        }
    }

    /// Range-check a brightness/contrast value. Out-of-range values only
    /// warn; the value is passed through and saturates pixel-side.
    fn ranged_value(&mut self, message: &str) -> Result<f32> {
        let value = self.prompter.number(message)?;
        if !(-1.0..=1.0).contains(&value) {
            self.prompter.say(RANGE_WARNING)?;
        }
        Ok(value)
    }
}
