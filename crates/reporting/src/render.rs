//! Print-formatted rendering of the monthly report.
//!
//! Plain text meant for a printer or terminal, not a machine-readable
//! export. User-facing strings are in pt-BR, like the product UI.

use clinica_core::money::format_brl;

use crate::financial::{ReportMonth, RevenueRow};

pub fn render_report(month: ReportMonth, rows: &[RevenueRow]) -> String {
    let mut out = String::new();
    out.push_str("RELATÓRIO FINANCEIRO\n");
    out.push_str(&format!("Mês de referência: {month}\n"));
    out.push_str("Somente consultas com status \"concluído\".\n\n");

    if rows.is_empty() {
        out.push_str("Nenhum dado financeiro para o período.\n");
        return out;
    }

    for row in rows {
        out.push_str(&format!("{} ({})\n", row.name, row.specialty));
        out.push_str(&format!(
            "  Receita:                 {}\n",
            format_brl(row.total_revenue)
        ));
        out.push_str(&format!(
            "  Atendimentos concluídos: {}\n",
            row.completed_count
        ));
        out.push_str(&format!(
            "  Ticket médio:            {}\n\n",
            format_brl(row.average_ticket.round() as i64)
        ));
    }

    out
}
