// src/municipality.rs

use scraper::{ElementRef, Html};
use tracing::{debug, info};

use crate::error::{Result, ScrapeError};
use crate::extract::{extract_cells_in, headers_selector, Cell};

/// Number of parallel result tables on a district listing page.
pub const TAB_GROUPS: u8 = 3;

/// Number cell text of aggregate rows that have no detail page.
const NO_DETAIL: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Municipality {
    pub code: u32,
    pub name: String,
    /// Detail page link, relative to the listing page.
    pub link: String,
}

/// Read every municipality from a district listing page, tab group 1 to 3.
///
/// The name is taken from the same table row as the number/link cell, so a
/// skipped `-` row can never shift names onto the wrong municipality.
pub fn list_municipalities(doc: &Html) -> Result<Vec<Municipality>> {
    info!("Getting list of municipalities...");
    let mut out = Vec::new();
    let mut number_cells = 0usize;

    for tab in 1..=TAB_GROUPS {
        let number_tokens = format!("t{tab}sa1 t{tab}sb1");
        let name_tokens = format!("t{tab}sa1 t{tab}sb2");
        let number_sel = headers_selector(&[number_tokens.as_str()])?;

        for td in doc.select(&number_sel) {
            number_cells += 1;
            let Cell { text, link } = Cell::from_element(td);
            if text == NO_DETAIL {
                debug!(tab, "skipping row without detail page");
                continue;
            }
            let link = link.ok_or_else(|| ScrapeError::MissingLink(text.clone()))?;

            let code = text
                .trim()
                .parse::<u32>()
                .map_err(|source| ScrapeError::InvalidCode {
                    text: text.clone(),
                    source,
                })?;

            let name = match enclosing_row(td) {
                Some(row) => extract_cells_in(row, &[name_tokens.as_str()])?.into_iter().next(),
                None => None,
            }
            .ok_or(ScrapeError::MissingName(code))?
            .text;

            out.push(Municipality { code, name, link });
        }
    }

    if number_cells == 0 {
        return Err(ScrapeError::NoMunicipalityCells);
    }
    info!(count = out.len(), "municipalities found");
    Ok(out)
}

fn enclosing_row(td: ElementRef<'_>) -> Option<ElementRef<'_>> {
    td.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "tr")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tab: u8, code: &str, name: &str) -> String {
        let number = if code == "-" {
            "-".to_string()
        } else {
            format!(r#"<a href="ps311?xobec={code}">{code}</a>"#)
        };
        format!(
            r#"<tr>
                 <td class="cislo" headers="t{tab}sa1 t{tab}sb1">{number}</td>
                 <td class="overflow_name" headers="t{tab}sa1 t{tab}sb2">{name}</td>
                 <td class="center" headers="t{tab}sa2"><a href="ps36?x=1">X</a></td>
               </tr>"#
        )
    }

    fn listing(groups: &[&[(&str, &str)]]) -> Html {
        let mut body = String::from("<html><body>");
        for (i, group) in groups.iter().enumerate() {
            let tab = i as u8 + 1;
            body.push_str(&format!(r#"<table id="t{tab}">"#));
            body.push_str(r#"<tr><th id="t1sa1">Obec</th></tr>"#);
            for (code, name) in group.iter() {
                body.push_str(&row(tab, code, name));
            }
            body.push_str("</table>");
        }
        body.push_str("</body></html>");
        Html::parse_document(&body)
    }

    #[test]
    fn concatenates_tab_groups_in_order() {
        let doc = listing(&[
            &[("1", "A"), ("2", "B")],
            &[("3", "C")],
            &[("4", "D"), ("5", "E")],
        ]);
        let list = list_municipalities(&doc).unwrap();
        let names: Vec<_> = list.iter().map(|m| m.name.as_str()).collect();
        let codes: Vec<_> = list.iter().map(|m| m.code).collect();
        assert_eq!(names, ["A", "B", "C", "D", "E"]);
        assert_eq!(codes, [1, 2, 3, 4, 5]);
        assert_eq!(list[2].link, "ps311?xobec=3");
    }

    #[test]
    fn skips_rows_without_detail_page() {
        let doc = listing(&[&[("1", "A"), ("-", "Zahraničí"), ("2", "B")]]);
        let list = list_municipalities(&doc).unwrap();
        assert_eq!(
            list,
            vec![
                Municipality {
                    code: 1,
                    name: "A".into(),
                    link: "ps311?xobec=1".into()
                },
                Municipality {
                    code: 2,
                    name: "B".into(),
                    link: "ps311?xobec=2".into()
                },
            ]
        );
    }

    #[test]
    fn non_numeric_code_is_fatal() {
        let doc = listing(&[&[("1", "A"), ("x12", "B")]]);
        let err = list_municipalities(&doc).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidCode { ref text, .. } if text == "x12"));
    }

    #[test]
    fn number_without_link_is_fatal() {
        let doc = Html::parse_document(
            r#"<table><tr><td headers="t1sa1 t1sb1">7</td><td headers="t1sa1 t1sb2">A</td></tr></table>"#,
        );
        let err = list_municipalities(&doc).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingLink(ref t) if t == "7"));
    }

    #[test]
    fn page_without_number_cells_is_fatal() {
        let doc = Html::parse_document("<html><body><p>Nothing here</p></body></html>");
        let err = list_municipalities(&doc).unwrap_err();
        assert!(matches!(err, ScrapeError::NoMunicipalityCells));
    }
}
