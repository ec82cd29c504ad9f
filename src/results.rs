// src/results.rs

use tracing::{debug, info};

use crate::error::Result;
use crate::extract::extract_cells;
use crate::fetch::{PageSource, RunContext};
use crate::municipality::Municipality;

/// Columns that precede the party names.
pub const HEADER_PREFIX: [&str; 5] = ["code", "location", "registered", "envelopes", "valid"];

/// Party name cells of the two party tables on a municipality page.
const PARTY_NAMES: [&str; 2] = ["t1sa1 t1sb2", "t2sa1 t2sb2"];

/// Registered voters, issued envelopes, valid votes, then the vote count of
/// every party in both party tables.
const RECORD_FIELDS: [&str; 5] = ["sa2", "sa3", "sa6", "t1sa2 t1sb3", "t2sa2 t2sb3"];

/// Thousands separator used on the results site.
const NBSP: char = '\u{a0}';

/// Fetch one municipality page and build the full CSV header from the party
/// names listed there.
pub fn build_header<S: PageSource>(
    source: &S,
    ctx: &RunContext,
    link: &str,
) -> Result<Vec<String>> {
    let url = ctx.resolve(link)?;
    let doc = source.fetch(&url)?;
    info!("Getting list of parties...");
    let parties = extract_cells(&doc, &PARTY_NAMES)?;
    debug!(count = parties.len(), "parties found");

    Ok(HEADER_PREFIX
        .iter()
        .map(|c| c.to_string())
        .chain(parties.into_iter().map(|c| c.text))
        .collect())
}

/// Fetch a municipality page and read its numeric fields in header order.
/// Values stay text; only the thousands separator is removed.
pub fn build_record<S: PageSource>(
    source: &S,
    ctx: &RunContext,
    link: &str,
) -> Result<Vec<String>> {
    let url = ctx.resolve(link)?;
    let doc = source.fetch(&url)?;
    Ok(extract_cells(&doc, &RECORD_FIELDS)?
        .into_iter()
        .map(|c| c.text.replace(NBSP, ""))
        .collect())
}

/// `[code, name]` followed by the record values.
pub fn assemble_row(municipality: &Municipality, record: Vec<String>) -> Vec<String> {
    let mut row = Vec::with_capacity(record.len() + 2);
    row.push(municipality.code.to_string());
    row.push(municipality.name.clone());
    row.extend(record);
    row
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// A municipality results page in the layout used by volby.cz.
    pub fn municipality_page(registered: &str, parties: &[(&str, &str)]) -> String {
        let (first, second) = parties.split_at(parties.len().div_ceil(2));
        let table = |tab: u8, rows: &[(&str, &str)]| {
            let mut s = format!(r#"<table id="t{tab}">"#);
            for (i, (name, votes)) in rows.iter().enumerate() {
                s.push_str(&format!(
                    r#"<tr>
                         <td class="cislo" headers="t{tab}sa1 t{tab}sb1">{n}</td>
                         <td class="overflow_name" headers="t{tab}sa1 t{tab}sb2">{name}</td>
                         <td class="cislo" headers="t{tab}sa2 t{tab}sb3">{votes}</td>
                         <td class="cislo" headers="t{tab}sa2 t{tab}sb4">1,00</td>
                       </tr>"#,
                    n = i + 1
                ));
            }
            s.push_str("</table>");
            s
        };
        format!(
            r#"<html><body>
                 <table id="ps311_t1"><tr>
                   <td class="cislo" headers="sa1 sb1">1</td>
                   <td class="cislo" headers="sa2">{registered}</td>
                   <td class="cislo" headers="sa3">{envelopes}</td>
                   <td class="cislo" headers="sa6">{valid}</td>
                 </tr></table>
                 {t1}{t2}
               </body></html>"#,
            envelopes = "1&nbsp;000",
            valid = "995",
            t1 = table(1, first),
            t2 = table(2, second),
        )
    }
}
