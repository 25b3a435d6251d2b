//! `clinica` — maintenance/reporting entry point over the file-backed store.
//!
//! The dashboards themselves are a separate front end; this binary covers
//! the operations useful from a terminal: booking, status changes and the
//! printable monthly report.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};

use clinica_infra::{JsonFileRepository, ScheduleStore, assistant};
use clinica_reporting::{ReportMonth, monthly_revenue, render_report};
use clinica_scheduling::{
    AddProfessional, BookAppointment, CancelAppointment, DeleteProfessional, ProfessionalPatch,
    ScheduleCommand, UpdateAppointmentNotes, UpdateAppointmentStatus, UpdateProfessionalProfile,
};

const USAGE: &str = "\
usage: clinica <command> [args]

commands:
  professionals                                 list professionals and their ids
  add-professional <name> <specialty> [cents]   register a professional
  update-professional <prof-id> <field> <value> set name|specialty|price (cents)
  delete-professional <prof-id>                 remove a professional and their appointments
  book <prof-id> <patient> <start> <end>        book a consultation (RFC 3339 times)
  cancel <appointment-id>                       cancel an appointment
  status <appointment-id> <status>              set scheduled|confirmed|completed|cancelled
  notes <appointment-id> <text...>              replace an appointment's notes
  report [YYYY-MM]                              print the monthly financial report
  briefing [YYYY-MM]                            print the assistant's schedule briefing
";

fn main() -> Result<()> {
    clinica_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print!("{USAGE}");
        return Ok(());
    };

    let path =
        JsonFileRepository::default_path().context("no platform data directory available")?;
    tracing::debug!(path = %path.display(), "opening schedule store");
    let mut store = ScheduleStore::open(JsonFileRepository::new(path))?;

    match command.as_str() {
        "professionals" => {
            for prof in &store.data().professionals {
                println!("{}  {} ({})", prof.id, prof.name, prof.specialty);
            }
        }
        "add-professional" => {
            let name = arg(&args, 1, "name")?;
            let specialty = arg(&args, 2, "specialty")?;
            let consultation_price = match args.get(3) {
                Some(cents) => Some(cents.parse().context("price must be whole cents")?),
                None => None,
            };
            store.dispatch(ScheduleCommand::AddProfessional(AddProfessional {
                name,
                specialty,
                consultation_price,
            }))?;
            println!("professional added");
        }
        "update-professional" => {
            let professional_id = arg(&args, 1, "professional id")?.parse()?;
            let field = arg(&args, 2, "field")?;
            let value = arg(&args, 3, "value")?;
            let patch = parse_patch(&field, value)?;
            store.dispatch(ScheduleCommand::UpdateProfessionalProfile(
                UpdateProfessionalProfile {
                    professional_id,
                    patch,
                },
            ))?;
            println!("professional updated");
        }
        "delete-professional" => {
            let professional_id = arg(&args, 1, "professional id")?.parse()?;
            store.dispatch(ScheduleCommand::DeleteProfessional(DeleteProfessional {
                professional_id,
            }))?;
            println!("professional deleted");
        }
        "book" => {
            let professional_id = arg(&args, 1, "professional id")?.parse()?;
            let patient_name = arg(&args, 2, "patient name")?;
            let start = parse_time(&arg(&args, 3, "start")?)?;
            let end = parse_time(&arg(&args, 4, "end")?)?;
            store.dispatch(ScheduleCommand::BookAppointment(BookAppointment {
                professional_id,
                patient_name,
                start,
                end,
            }))?;
            println!("appointment booked");
        }
        "cancel" => {
            let appointment_id = arg(&args, 1, "appointment id")?.parse()?;
            store.dispatch(ScheduleCommand::CancelAppointment(CancelAppointment {
                appointment_id,
            }))?;
            println!("appointment cancelled");
        }
        "status" => {
            let appointment_id = arg(&args, 1, "appointment id")?.parse()?;
            let status = arg(&args, 2, "status")?.parse()?;
            store.dispatch(ScheduleCommand::UpdateAppointmentStatus(
                UpdateAppointmentStatus {
                    appointment_id,
                    status,
                },
            ))?;
            println!("appointment status updated");
        }
        "notes" => {
            let appointment_id = arg(&args, 1, "appointment id")?.parse()?;
            arg(&args, 2, "notes")?;
            let notes = args[2..].join(" ");
            store.dispatch(ScheduleCommand::UpdateAppointmentNotes(
                UpdateAppointmentNotes {
                    appointment_id,
                    notes,
                },
            ))?;
            println!("appointment notes updated");
        }
        "report" => {
            let month = parse_month(args.get(1))?;
            let rows = monthly_revenue(store.data(), month);
            print!("{}", render_report(month, &rows));
        }
        "briefing" => {
            let month = parse_month(args.get(1))?;
            let reply = assistant::daily_briefing(store.data(), month)?;
            println!("{}", reply.text);
        }
        other => {
            print!("{USAGE}");
            bail!("unknown command '{other}'");
        }
    }

    Ok(())
}

fn arg(args: &[String], index: usize, what: &str) -> Result<String> {
    args.get(index)
        .cloned()
        .with_context(|| format!("missing argument: {what}"))
}

fn parse_time(s: &str) -> Result<DateTime<Utc>> {
    s.parse()
        .with_context(|| format!("invalid time '{s}', expected RFC 3339"))
}

fn parse_month(raw: Option<&String>) -> Result<ReportMonth> {
    match raw {
        Some(s) => Ok(s.parse()?),
        None => Ok(ReportMonth::current(Utc::now())),
    }
}

fn parse_patch(field: &str, value: String) -> Result<ProfessionalPatch> {
    match field {
        "name" => Ok(ProfessionalPatch {
            name: Some(value),
            ..Default::default()
        }),
        "specialty" => Ok(ProfessionalPatch {
            specialty: Some(value),
            ..Default::default()
        }),
        "price" => Ok(ProfessionalPatch {
            consultation_price: Some(value.parse().context("price must be whole cents")?),
            ..Default::default()
        }),
        other => bail!("unknown field '{other}', expected name|specialty|price"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_sets_exactly_the_named_field() {
        let patch = parse_patch("name", "Dra. Ana Souza".to_string()).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Dra. Ana Souza"));
        assert_eq!(patch.specialty, None);
        assert_eq!(patch.consultation_price, None);

        let patch = parse_patch("price", "22000".to_string()).unwrap();
        assert_eq!(patch.consultation_price, Some(22_000));
    }

    #[test]
    fn patch_rejects_unknown_fields_and_bad_prices() {
        assert!(parse_patch("email", "x".to_string()).is_err());
        assert!(parse_patch("price", "R$ 220,00".to_string()).is_err());
    }
}
