// src/extract.rs

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

/// Text and optional detail link of one `<td>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub link: Option<String>,
}

impl Cell {
    pub(crate) fn from_element(el: ElementRef<'_>) -> Self {
        let text = el.text().collect::<String>();
        let link = el
            .select(&LINK)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);
        Self { text, link }
    }
}

static LINK: once_cell::sync::Lazy<Selector> =
    once_cell::sync::Lazy::new(|| Selector::parse("a[href]").expect("static selector"));

/// Build one selector matching `<td>` cells whose `headers` attribute equals
/// any of `token_sets` exactly.
pub fn headers_selector(token_sets: &[&str]) -> Result<Selector> {
    let selector = token_sets
        .iter()
        .map(|tokens| format!(r#"td[headers="{}"]"#, tokens))
        .collect::<Vec<_>>()
        .join(", ");
    Selector::parse(&selector).map_err(|e| ScrapeError::Selector {
        selector: selector.clone(),
        reason: format!("{:?}", e),
    })
}

/// Cells matching any of `token_sets`, in document order.
pub fn extract_cells(doc: &Html, token_sets: &[&str]) -> Result<Vec<Cell>> {
    let sel = headers_selector(token_sets)?;
    Ok(doc.select(&sel).map(Cell::from_element).collect())
}

/// Same as [`extract_cells`] but scoped to the subtree under `root`.
pub fn extract_cells_in(root: ElementRef<'_>, token_sets: &[&str]) -> Result<Vec<Cell>> {
    let sel = headers_selector(token_sets)?;
    Ok(root.select(&sel).map(Cell::from_element).collect())
}
