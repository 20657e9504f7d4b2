//! The interactive session: greeting, menu loop, one assessment run at a
//! time, and read-back of past results.

use std::io::{BufRead, Write};

use neuroscan_core::models::{AssessmentResult, Reminder, ReminderChoice, Subject};
use neuroscan_instruments::Instrument;
use neuroscan_instruments::engine::Assessment;
use neuroscan_storage::logs::{ReminderLog, ResultsLog};
use tracing::{info, warn};

use crate::clock::Clock;
use crate::config::NeuroScanConfig;
use crate::console::Console;

const RULE: &str = "------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TakeAssessment,
    ViewResults,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::TakeAssessment),
            "2" => Some(Self::ViewResults),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Session<'a, R, W, C> {
    console: Console<R, W>,
    clock: C,
    instrument: &'a dyn Instrument,
    results: ResultsLog,
    reminders: ReminderLog,
}

impl<'a, R: BufRead, W: Write, C: Clock> Session<'a, R, W, C> {
    pub fn new(
        config: &NeuroScanConfig,
        instrument: &'a dyn Instrument,
        console: Console<R, W>,
        clock: C,
    ) -> Self {
        Self {
            console,
            clock,
            instrument,
            results: ResultsLog::new(config.results_log.clone()),
            reminders: ReminderLog::new(config.reminders_log.clone()),
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Greet, identify the subject, then loop over the menu until Exit or
    /// end of input.
    pub fn run(&mut self) -> eyre::Result<()> {
        self.console.say(&format!(
            "Welcome to {}: Your Early Detection Assistant",
            self.instrument.name()
        ))?;
        self.console.say(RULE)?;

        let Some(subject) = self.identify()? else {
            return Ok(());
        };
        info!(subject = %subject.name, caregiver = subject.caregiver, "session started");

        loop {
            self.console.blank()?;
            self.console
                .say(&format!("\u{1F44B} Hello, {}! What would you like to do?", subject.name))?;
            self.console
                .say(&format!("1. Take the {} Assessment", self.instrument.name()))?;
            self.console.say("2. View Past Results")?;
            self.console.say("3. Exit")?;

            let choice = match self.console.prompt("Enter your choice (1-3): ")? {
                None => MenuChoice::Exit,
                Some(input) => match MenuChoice::parse(&input) {
                    Some(choice) => choice,
                    None => {
                        self.console.say("Invalid choice. Please enter 1, 2, or 3.")?;
                        continue;
                    }
                },
            };

            match choice {
                MenuChoice::TakeAssessment => {
                    if self.run_assessment(&subject)?.is_none() {
                        break;
                    }
                }
                MenuChoice::ViewResults => self.view_past_results()?,
                MenuChoice::Exit => break,
            }
        }

        self.console.blank()?;
        self.console.say(&format!(
            "Thank you for using {}, {}! Stay healthy \u{1F499}",
            self.instrument.name(),
            subject.name
        ))?;
        Ok(())
    }

    /// Run one assessment and persist it. Returns `None` when input ran out
    /// before every question was answered; nothing is written in that case.
    pub fn run_assessment(&mut self, subject: &Subject) -> eyre::Result<Option<AssessmentResult>> {
        let instrument = self.instrument;
        let total = instrument.questions().len();
        let legend = instrument.scale().legend();

        self.console.blank()?;
        self.console.say(&format!(
            "This assistant will ask you {total} questions to evaluate early neurodegenerative symptoms."
        ))?;
        self.console.say("Please answer honestly using the scale:")?;
        self.console.say(&legend)?;
        self.console.blank()?;

        let mut assessment = Assessment::new(instrument);
        while let Some(question) = assessment.current_question() {
            self.console
                .say(&format!("{}. {}", question.number, question.prompt))?;
            let mut prompt = format!("Your response ({legend}): ");
            loop {
                let Some(input) = self.console.prompt(&prompt)? else {
                    info!(answered = assessment.answered(), "input ended mid-assessment");
                    return Ok(None);
                };
                match assessment.answer_current(&input) {
                    Ok(_) => break,
                    Err(e) => {
                        tracing::debug!(error = %e, "response rejected");
                        prompt = "Invalid input. Please enter 0, 1, or 2: ".to_string();
                    }
                }
            }
            self.console.say(&format!(
                "Progress: [{:>2}/{total}] completed",
                assessment.answered()
            ))?;
            self.console.blank()?;
        }

        let result = assessment.finish(subject.clone(), self.clock.now())?;
        info!(
            subject = %subject.name,
            score = result.score,
            tier = ?result.tier,
            "assessment complete"
        );
        self.show_result(&result)?;

        let choice = self
            .console
            .prompt("Would you like to set a reminder to retake this in:\n1 week (1), 2 weeks (2), or No reminder (0)? ")?
            .map(|input| ReminderChoice::from_menu(&input))
            .unwrap_or(ReminderChoice::NoReminder);
        let reminder = Reminder::schedule(&subject.name, &result.completed_at, choice)?;

        self.console.blank()?;
        self.console.say("\u{1F4A1} Weekly Brain Health Challenge:")?;
        self.console.say(
            "This week, try learning a new word each day and use it in conversation. \u{1F9E0}\u{1F4D6}",
        )?;

        let note = if subject.caregiver {
            self.console.blank()?;
            self.caregiver_note()?
        } else {
            None
        };

        self.save_result(&result, note.as_deref())?;
        if let Some(reminder) = reminder {
            self.save_reminder(&reminder)?;
        }

        Ok(Some(result))
    }

    /// Print the assessment log as stored, oldest entry first.
    pub fn view_past_results(&mut self) -> eyre::Result<()> {
        let lines = match self.results.view() {
            Ok(Some(lines)) => lines,
            Ok(None) => {
                self.console.say("No previous results found.")?;
                return Ok(());
            }
            Err(e) => {
                warn!(error = %e, "could not open results log");
                self.console
                    .say(&format!("\u{26A0} Could not read past results: {e}"))?;
                return Ok(());
            }
        };

        self.console.blank()?;
        self.console.say("\u{1F4C1} Displaying past results:")?;
        self.console.say(RULE)?;
        for line in lines {
            match line {
                Ok(line) => self.console.say(&line)?,
                Err(e) => {
                    warn!(error = %e, "results log read failed");
                    self.console
                        .say(&format!("\u{26A0} Could not read the rest of the results: {e}"))?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn identify(&mut self) -> eyre::Result<Option<Subject>> {
        let subject = loop {
            let Some(name) = self.console.prompt("Enter your name: ")? else {
                return Ok(None);
            };
            match Subject::new(name, false) {
                Ok(subject) => break subject,
                Err(e) => self.console.say(&format!("{e}."))?,
            }
        };
        let caregiver = self
            .console
            .confirm("Are you filling this out as a caregiver for someone else? (y/n): ")?;
        Ok(Some(Subject {
            caregiver,
            ..subject
        }))
    }

    fn show_result(&mut self, result: &AssessmentResult) -> eyre::Result<()> {
        self.console.say(RULE)?;
        if result.frequent_memory_issue {
            self.console.say(
                "\u{1F9E0} Additional Note: Frequent memory issues may be a sign of early cognitive decline.",
            )?;
            self.console
                .say(">> Tip: Use reminders, sticky notes, and keep a memory journal.")?;
            self.console.blank()?;
        }
        self.console.say(&format!(
            "{}, your total risk score is: {} out of {}.",
            result.subject.name, result.score, result.max_score
        ))?;
        self.console.blank()?;
        self.console.say(&result.tier.to_string())?;
        self.console.say(&result.recommendation)?;
        self.console.say(RULE)?;
        self.console.blank()?;
        Ok(())
    }

    fn caregiver_note(&mut self) -> eyre::Result<Option<String>> {
        if !self
            .console
            .confirm("Would you like to leave a caregiver note? (y/n): ")?
        {
            return Ok(None);
        }
        let note = self.console.prompt("Enter your caregiver note: ")?;
        Ok(note.filter(|n| !n.trim().is_empty()))
    }

    // Persistence failures are reported, never fatal: the result on screen
    // stays valid.
    fn save_result(&mut self, result: &AssessmentResult, note: Option<&str>) -> eyre::Result<()> {
        self.console.blank()?;
        match self.results.append(result, note) {
            Ok(()) => self.console.say(&format!(
                "\u{1F4C4} Your results have been saved to '{}'.",
                self.results.path().display()
            ))?,
            Err(e) => {
                warn!(error = %e, "results not saved");
                self.console
                    .say(&format!("\u{26A0} Your results were not saved: {e}"))?;
            }
        }
        Ok(())
    }

    fn save_reminder(&mut self, reminder: &Reminder) -> eyre::Result<()> {
        match self.reminders.append(reminder) {
            Ok(()) => self.console.say(&format!(
                "\u{1F514} Reminder saved! You'll see this in '{}'.",
                self.reminders.path().display()
            ))?,
            Err(e) => {
                warn!(error = %e, "reminder not saved");
                self.console
                    .say(&format!("\u{26A0} Your reminder was not saved: {e}"))?;
            }
        }
        Ok(())
    }
}
