//! Interactive clinic desk menu
//!
//! Reads choices line by line and forwards them to the dispatcher. End of
//! input behaves like choosing exit.

use crate::render::Renderer;
use clinic_queue_core::Dispatcher;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A parsed menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    AddEmergency,
    AddRegular,
    ServeNext,
    ViewWaiting,
    EstimateWait,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::AddEmergency),
            "2" => Some(Choice::AddRegular),
            "3" => Some(Choice::ServeNext),
            "4" => Some(Choice::ViewWaiting),
            "5" => Some(Choice::EstimateWait),
            "6" => Some(Choice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
==================================================
CLINIC PATIENT QUEUE
==================================================
1. Add Emergency Patient
2. Add Regular Patient
3. Serve Next Patient
4. View Waiting Patients
5. Estimate Wait Time for New Regular Patient
6. Exit";

pub struct Menu<R, W> {
    dispatcher: Dispatcher,
    renderer: Renderer,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(dispatcher: Dispatcher, renderer: Renderer, input: R, out: W) -> Self {
        Self {
            dispatcher,
            renderer,
            input,
            out,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if !self.renderer.json {
                writeln!(self.out, "\n{MENU}")?;
                self.prompt("Choose an option (1-6): ")?;
            }
            let Some(line) = self.read_line()? else {
                break;
            };

            match Choice::parse(&line) {
                Some(Choice::AddEmergency) => self.admit(true)?,
                Some(Choice::AddRegular) => self.admit(false)?,
                Some(Choice::ServeNext) => {
                    let served = self.dispatcher.serve_next();
                    self.renderer.served(&mut self.out, served.as_ref())?;
                }
                Some(Choice::ViewWaiting) => {
                    let list = self.dispatcher.list_waiting();
                    self.renderer.waiting(&mut self.out, &list)?;
                }
                Some(Choice::EstimateWait) => {
                    let estimate = self.dispatcher.estimate_wait();
                    self.renderer.estimate(&mut self.out, &estimate)?;
                }
                Some(Choice::Exit) => break,
                None => {
                    debug!(input = line.trim(), "unrecognized menu choice");
                    if !self.renderer.json {
                        writeln!(self.out, "Invalid choice. Please select 1-6.")?;
                    }
                }
            }
        }

        if !self.renderer.json {
            writeln!(self.out, "Thank you! The clinic queue is now closed.")?;
        }
        self.out.flush()
    }

    fn admit(&mut self, emergency: bool) -> io::Result<()> {
        if !self.renderer.json {
            let label = if emergency { "emergency" } else { "regular" };
            self.prompt(&format!("Enter {label} patient name: "))?;
        }
        let name = self.read_line()?.unwrap_or_default();
        let result = if emergency {
            self.dispatcher.add_emergency(&name)
        } else {
            self.dispatcher.add_regular(&name)
        };
        match result {
            Ok(admission) => self.renderer.admitted(&mut self.out, &admission),
            Err(err) => self.renderer.rejected(&mut self.out, &err.to_string()),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    #[cfg(test)]
    fn into_dispatcher(self) -> Dispatcher {
        self.dispatcher
    }
}
