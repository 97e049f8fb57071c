//! Console rendering for dispatcher results
//!
//! Text output follows the clinic desk wording; `--json` emits one JSON
//! object per result instead.

use chrono::{DateTime, Local, Utc};
use clinic_queue_core::{Admission, Patient, PatientClass, ServedPatient, WaitEstimate, WaitingList};
use serde::Serialize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// How results are written
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub json: bool,
    pub utc: bool,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonLine<'a> {
    Admitted(&'a Admission),
    Served(&'a ServedPatient),
    NothingToServe,
    Waiting(&'a WaitingList),
    Estimate(&'a WaitEstimate),
    Rejected { reason: String },
}

impl Renderer {
    fn clock_time(&self, at: DateTime<Utc>) -> String {
        if self.utc {
            at.format("%H:%M").to_string()
        } else {
            at.with_timezone(&Local).format("%H:%M").to_string()
        }
    }

    fn json_line(&self, out: &mut impl Write, line: &JsonLine<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut *out, line)?;
        writeln!(out)
    }

    pub fn admitted(&self, out: &mut impl Write, admission: &Admission) -> io::Result<()> {
        if self.json {
            return self.json_line(out, &JsonLine::Admitted(admission));
        }
        let at = self.clock_time(admission.patient.admitted_at());
        match admission.class {
            PatientClass::Emergency => writeln!(
                out,
                "'{}' added as emergency patient at {}.",
                admission.patient.name(),
                at
            ),
            PatientClass::Regular => writeln!(
                out,
                "'{}' added to regular queue at {}.",
                admission.patient.name(),
                at
            ),
        }
    }

    pub fn rejected(&self, out: &mut impl Write, reason: &str) -> io::Result<()> {
        if self.json {
            return self.json_line(
                out,
                &JsonLine::Rejected {
                    reason: reason.to_string(),
                },
            );
        }
        writeln!(out, "{reason}.")
    }

    pub fn served(&self, out: &mut impl Write, served: Option<&ServedPatient>) -> io::Result<()> {
        match (served, self.json) {
            (Some(served), true) => self.json_line(out, &JsonLine::Served(served)),
            (None, true) => self.json_line(out, &JsonLine::NothingToServe),
            (None, false) => writeln!(out, "No patients waiting."),
            (Some(served), false) => match served.class {
                PatientClass::Emergency => writeln!(
                    out,
                    "Serving EMERGENCY patient: {} (arrived at {})",
                    served.patient.name(),
                    self.clock_time(served.patient.admitted_at())
                ),
                PatientClass::Regular => {
                    writeln!(out, "Serving regular patient: {}", served.patient.name())
                }
            },
        }
    }

    pub fn waiting(&self, out: &mut impl Write, list: &WaitingList) -> io::Result<()> {
        if self.json {
            return self.json_line(out, &JsonLine::Waiting(list));
        }
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{rule}")?;
        writeln!(out, "CURRENTLY WAITING PATIENTS")?;
        writeln!(out, "{rule}")?;

        if list.emergencies.is_empty() {
            writeln!(out, "No emergency patients waiting.")?;
        } else {
            writeln!(out, "EMERGENCY PATIENTS (Priority):")?;
            self.numbered(out, &list.emergencies, true)?;
        }

        if list.regulars.is_empty() {
            writeln!(out, "No regular patients waiting.")?;
        } else {
            writeln!(out, "REGULAR PATIENTS (FIFO):")?;
            self.numbered(out, &list.regulars, false)?;
        }
        writeln!(out, "{rule}")
    }

    fn numbered(&self, out: &mut impl Write, patients: &[Patient], with_time: bool) -> io::Result<()> {
        for (idx, patient) in patients.iter().enumerate() {
            if with_time {
                writeln!(
                    out,
                    "  {}. {} [Arrived: {}]",
                    idx + 1,
                    patient.name(),
                    self.clock_time(patient.admitted_at())
                )?;
            } else {
                writeln!(out, "  {}. {}", idx + 1, patient.name())?;
            }
        }
        Ok(())
    }

    pub fn estimate(&self, out: &mut impl Write, estimate: &WaitEstimate) -> io::Result<()> {
        if self.json {
            return self.json_line(out, &JsonLine::Estimate(estimate));
        }
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(out, "{rule}")?;
        writeln!(out, "ESTIMATED WAIT TIME")?;
        writeln!(out, "{rule}")?;
        if estimate.emergencies_ahead > 0 {
            writeln!(
                out,
                "{} emergency patient(s) ahead - you will be delayed.",
                estimate.emergencies_ahead
            )?;
        }
        writeln!(
            out,
            "As a regular patient, estimated wait: ~{} minutes",
            estimate.minutes
        )?;
        writeln!(
            out,
            "  (Based on {} ahead + avg {} min per patient)",
            estimate.regulars_ahead, estimate.avg_service_time
        )?;
        writeln!(out, "{rule}")
    }
}
